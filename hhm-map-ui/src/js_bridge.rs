//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Mapbox GL glue lives in `assets/js/map-glue.js` and is evaluated as
//! globals (no ES modules) once the Mapbox GL script has loaded, with each
//! entry point promoted to `window.*`. This module provides safe Rust
//! wrappers that serialize arguments to JSON and call those globals, plus
//! registration of the Rust callbacks the glue invokes (map ready, popup
//! HTML rendering).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the map glue at compile time
static MAP_GLUE_JS: &str = include_str!("../assets/js/map-glue.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HHM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Serialize a Rust string into a JS string literal.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

/// Initialize the map glue with a wait-for-Mapbox-GL polling loop.
///
/// The glue defines functions like `hhmInitMap(...)` via `function`
/// declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect `eval()` once `mapboxgl` is ready and then
/// explicitly promoted onto `window.*`.
pub fn init_map_glue() {
    // Store the script on window so the polling callback can eval it at
    // global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__hhmGlueScript = {};",
        js_str(MAP_GLUE_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForMapboxGl = setInterval(function() {
                if (typeof mapboxgl !== 'undefined') {
                    clearInterval(waitForMapboxGl);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__hhmGlueScript);
                    delete window.__hhmGlueScript;
                    // Promote function declarations to window explicitly
                    if (typeof hhmInitMap !== 'undefined') window.hhmInitMap = hhmInitMap;
                    if (typeof hhmHasSource !== 'undefined') window.hhmHasSource = hhmHasSource;
                    if (typeof hhmHasLayer !== 'undefined') window.hhmHasLayer = hhmHasLayer;
                    if (typeof hhmAddVectorSource !== 'undefined') window.hhmAddVectorSource = hhmAddVectorSource;
                    if (typeof hhmAddGeoJsonSource !== 'undefined') window.hhmAddGeoJsonSource = hhmAddGeoJsonSource;
                    if (typeof hhmAddLayer !== 'undefined') window.hhmAddLayer = hhmAddLayer;
                    if (typeof hhmSetFilter !== 'undefined') window.hhmSetFilter = hhmSetFilter;
                    if (typeof hhmSetPaintProperty !== 'undefined') window.hhmSetPaintProperty = hhmSetPaintProperty;
                    if (typeof hhmSetFeatureState !== 'undefined') window.hhmSetFeatureState = hhmSetFeatureState;
                    if (typeof hhmObserveResize !== 'undefined') window.hhmObserveResize = hhmObserveResize;
                    if (typeof hhmWirePopups !== 'undefined') window.hhmWirePopups = hhmWirePopups;
                    if (typeof hhmDestroyMap !== 'undefined') window.hhmDestroyMap = hhmDestroyMap;
                    window.__hhmGlueReady = true;
                    console.log('HHM map glue initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn set_window_callback(name: &str, value: &JsValue) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window object; cannot register {name}");
        return;
    };
    if js_sys::Reflect::set(&window, &JsValue::from_str(name), value).is_err() {
        log::warn!("failed to register {name} callback");
    }
}

/// Register the callback fired once the map style has finished loading.
pub fn on_map_ready(callback: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    set_window_callback("__hhmOnMapReady", closure.as_ref());
    closure.forget();
}

/// Register the renderer turning a clicked point feature's properties
/// (JSON object string) into popup HTML.
pub fn set_point_popup_renderer(render: impl FnMut(String) -> String + 'static) {
    let closure = Closure::wrap(Box::new(render) as Box<dyn FnMut(String) -> String>);
    set_window_callback("__hhmPointPopupHtml", closure.as_ref());
    closure.forget();
}

/// Register the renderer turning a clicked boundary's name into popup HTML.
pub fn set_boundary_popup_renderer(render: impl FnMut(String) -> String + 'static) {
    let closure = Closure::wrap(Box::new(render) as Box<dyn FnMut(String) -> String>);
    set_window_callback("__hhmBoundaryPopupHtml", closure.as_ref());
    closure.forget();
}

/// Construct the map inside the given container.
///
/// Uses a polling loop to wait for Mapbox GL to load, the glue to
/// initialize, and the container DOM element to exist before constructing.
pub fn init_map(container_id: &str, options_json: &str) {
    let id = js_str(container_id);
    let opts = js_str(options_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hhmGlueReady &&
                    typeof window.hhmInitMap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.hhmInitMap({id}, {opts});
                    }} catch(e) {{ console.error('[HHM] hhmInitMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Whether a source with this id is already registered on the map.
pub fn has_source(id: &str) -> bool {
    let code = format!(
        "!!(window.hhmHasSource && window.hhmHasSource({}))",
        js_str(id)
    );
    js_sys::eval(&code).map(|v| v.is_truthy()).unwrap_or(false)
}

/// Whether a layer with this id exists on the map.
pub fn has_layer(id: &str) -> bool {
    let code = format!(
        "!!(window.hhmHasLayer && window.hhmHasLayer({}))",
        js_str(id)
    );
    js_sys::eval(&code).map(|v| v.is_truthy()).unwrap_or(false)
}

pub fn add_vector_source(id: &str, options_json: &str) {
    call_js(&format!(
        "window.hhmAddVectorSource({}, {});",
        js_str(id),
        js_str(options_json)
    ));
}

pub fn add_geojson_source(id: &str, data_json: &str) {
    call_js(&format!(
        "window.hhmAddGeoJsonSource({}, {});",
        js_str(id),
        js_str(data_json)
    ));
}

pub fn add_layer(layer_json: &str) {
    call_js(&format!("window.hhmAddLayer({});", js_str(layer_json)));
}

pub fn set_filter(layer_id: &str, filter_json: &str) {
    call_js(&format!(
        "window.hhmSetFilter({}, {});",
        js_str(layer_id),
        js_str(filter_json)
    ));
}

pub fn set_paint_property(layer_id: &str, prop: &str, value_json: &str) {
    call_js(&format!(
        "window.hhmSetPaintProperty({}, {}, {});",
        js_str(layer_id),
        js_str(prop),
        js_str(value_json)
    ));
}

pub fn set_feature_state(source: &str, source_layer: &str, feature_id: &str, state_json: &str) {
    call_js(&format!(
        "window.hhmSetFeatureState({}, {}, {}, {});",
        js_str(source),
        js_str(source_layer),
        js_str(feature_id),
        js_str(state_json)
    ));
}

/// Watch the container for size changes and resize the map, debounced.
pub fn observe_resize(container_id: &str, debounce_ms: u32) {
    call_js(&format!(
        "window.hhmObserveResize({}, {});",
        js_str(container_id),
        debounce_ms
    ));
}

/// Install click and cursor handlers for both interactive layers.
pub fn wire_popups(point_layer: &str, point_source: &str, boundary_layer: &str, name_prop: &str) {
    call_js(&format!(
        "window.hhmWirePopups({}, {}, {}, {});",
        js_str(point_layer),
        js_str(point_source),
        js_str(boundary_layer),
        js_str(name_prop)
    ));
}

/// Tear down the map and its resize observer.
pub fn destroy_map() {
    call_js("if (window.hhmDestroyMap) window.hhmDestroyMap();");
}
