//! Map surface lifecycle handle.
//!
//! The actual renderer instance is a singleton owned by the JS glue;
//! `MapSurface` is a cheap handle that serializes the camera/basemap
//! configuration, drives initialization, and funnels every mutation
//! (sources, layers, paint, filter, feature state, resize) through the
//! bridge. Mutating methods are only valid once the ready callback
//! registered via [`crate::js_bridge::on_map_ready`] has fired; callers
//! guard on that.

use serde::Serialize;
use serde_json::Value;

use crate::js_bridge;

/// Starting camera over the Upper Snake basin.
pub const STARTING_LOCATION: [f64; 2] = [-113.79, 43.65];
pub const STARTING_ZOOM: f64 = 6.0;

/// Basemap rotation offered by the toggle controls; the first entry is
/// the style the map opens with.
pub const BASEMAPS: [Basemap; 3] = [
    Basemap { style: "streets-v11", icon: "commute" },
    Basemap { style: "outdoors-v11", icon: "park" },
    Basemap { style: "satellite-streets-v11", icon: "satellite_alt" },
];

pub const POPUP_MAX_WIDTH_PX: u32 = 400;
pub const POPUP_OFFSET_PX: u32 = 15;

/// Trailing-edge debounce applied to container resize events.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Basemap {
    pub style: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapInitOptions<'a> {
    access_token: &'a str,
    center: [f64; 2],
    zoom: f64,
    basemaps: &'a [Basemap],
    popup_max_width: u32,
    popup_offset: u32,
}

/// Handle over the glue-owned map instance.
#[derive(Debug, Clone, Copy)]
pub struct MapSurface;

impl MapSurface {
    /// Construct the map inside `container_id` with the default camera and
    /// basemap. The glue ignores repeat construction while an instance is
    /// mounted; readiness is reported via the registered ready callback.
    pub fn init(container_id: &str, access_token: &str) -> Self {
        let options = MapInitOptions {
            access_token,
            center: STARTING_LOCATION,
            zoom: STARTING_ZOOM,
            basemaps: &BASEMAPS,
            popup_max_width: POPUP_MAX_WIDTH_PX,
            popup_offset: POPUP_OFFSET_PX,
        };
        let options_json = serde_json::to_string(&options).unwrap_or_default();
        log::info!("initializing map surface in #{container_id}");
        js_bridge::init_map(container_id, &options_json);
        Self
    }

    pub fn has_source(&self, id: &str) -> bool {
        js_bridge::has_source(id)
    }

    pub fn has_layer(&self, id: &str) -> bool {
        js_bridge::has_layer(id)
    }

    /// Register a vector tile source with a property promoted to the
    /// feature id.
    pub fn add_vector_source(&self, id: &str, url: &str, promote_id: &str) {
        let options = serde_json::json!({
            "type": "vector",
            "url": url,
            "promoteId": promote_id,
        });
        js_bridge::add_vector_source(id, &options.to_string());
    }

    pub fn add_geojson_source(&self, id: &str, data: &Value) {
        js_bridge::add_geojson_source(id, &data.to_string());
    }

    pub fn add_layer(&self, layer: &Value) {
        js_bridge::add_layer(&layer.to_string());
    }

    pub fn set_filter(&self, layer_id: &str, filter: &Value) {
        js_bridge::set_filter(layer_id, &filter.to_string());
    }

    pub fn set_paint_property(&self, layer_id: &str, prop: &str, value: &Value) {
        js_bridge::set_paint_property(layer_id, prop, &value.to_string());
    }

    /// Merge transient state into one feature of a source. State objects
    /// accumulate keys across calls.
    pub fn set_feature_state(&self, source: &str, source_layer: &str, feature_id: &str, state: &Value) {
        js_bridge::set_feature_state(source, source_layer, feature_id, &state.to_string());
    }

    /// Re-trigger map resize whenever the container's on-screen size
    /// changes, debounced to avoid thrashing during continuous resize.
    pub fn observe_resize(&self, container_id: &str) {
        js_bridge::observe_resize(container_id, RESIZE_DEBOUNCE_MS);
    }

    pub fn wire_popups(&self, point_layer: &str, point_source: &str, boundary_layer: &str, name_prop: &str) {
        js_bridge::wire_popups(point_layer, point_source, boundary_layer, name_prop);
    }

    /// Release the resize observer and detach the map instance.
    pub fn destroy(&self) {
        log::info!("destroying map surface");
        js_bridge::destroy_map();
    }
}
