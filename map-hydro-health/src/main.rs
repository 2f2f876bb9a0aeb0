//! Hydrologic Health Map
//!
//! Interactive Mapbox GL map of hydrologic-health indicators for the
//! Upper Snake basin: a circle layer of monitoring locations and a HUC-8
//! boundary choropleth, both colored by the shared health-percentage
//! bucket ladder and filtered by a selectable rolling-average window.
//!
//! Data flow:
//! 1. `include_str!` embeds the location rows (JSON) and boundary health
//!    table (CSV) into the WASM binary.
//! 2. On mount: parse both assets into state, evaluate the map glue, and
//!    construct the map surface.
//! 3. Once the style loads and both datasets are present: bind sources,
//!    feature state, and layers (at most once, guarded by source
//!    existence).
//! 4. On selection change: update the point-layer filter and the boundary
//!    fill color expression.

use dioxus::prelude::*;
use hhm_core::{expression, huc, layer, location, popup};
use hhm_map_ui::components::{
    ErrorDisplay, Legend, LegendControl, LoadingSpinner, MapContainer, YearsSelector,
};
use hhm_map_ui::js_bridge;
use hhm_map_ui::map_surface::MapSurface;
use hhm_map_ui::state::AppState;

// Embed the precomputed health rows at compile time.
const LOCATIONS_JSON: &str = include_str!("../data/locations.json");
const HUC_HEALTH_CSV: &str = include_str!("../data/huc_health.csv");

/// DOM id for the map container div.
const MAP_CONTAINER_ID: &str = "hydro-health-map";

/// Mapbox access token baked in at build time.
const MAPBOX_ACCESS_TOKEN: &str = match option_env!("MAPBOX_ACCESS_TOKEN") {
    Some(token) => token,
    None => "",
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hydro-health-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    // The map handle lives in component state so the later effects can
    // tell "not constructed yet" from "constructed".
    let mut map_surface: Signal<Option<MapSurface>> = use_signal(|| None);

    // ─── Effect 1: parse data, set up the bridge, construct the map ───
    // Reads no signals, so it runs exactly once after mount.
    use_effect(move || {
        match location::parse_locations(LOCATIONS_JSON) {
            Ok(rows) => {
                let windows = location::distinct_windows(&rows);
                if let Some(first) = windows.first() {
                    state.selected_years.set(*first);
                }
                state.available_windows.set(windows);
                state.locations.set(rows);
            }
            Err(err) => state.locations_error.set(Some(err.to_string())),
        }
        state.locations_loading.set(false);

        match huc::parse_huc_health(HUC_HEALTH_CSV) {
            Ok(rows) => state.huc_health.set(rows),
            Err(err) => state.huc_error.set(Some(err.to_string())),
        }
        state.huc_loading.set(false);

        js_bridge::init_map_glue();
        js_bridge::set_point_popup_renderer(|props_json| {
            let props: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&props_json).unwrap_or_default();
            popup::point_popup_html(&props, &popup::LOCATIONS_POPUP)
        });
        js_bridge::set_boundary_popup_renderer(|name| popup::boundary_popup_html(&name));
        js_bridge::on_map_ready(move || {
            log::info!("map style loaded");
            state.map_ready.set(true);
        });

        map_surface.set(Some(MapSurface::init(MAP_CONTAINER_ID, MAPBOX_ACCESS_TOKEN)));
    });

    // ─── Effect 2: watch the container size once the map is up ───
    use_effect(move || {
        if !(state.map_ready)() {
            return;
        }
        if let Some(surface) = map_surface() {
            surface.observe_resize(MAP_CONTAINER_ID);
        }
    });

    // ─── Effect 3: bind sources, feature state, and layers ───
    // Re-runs as data and readiness land; the source-existence guard keeps
    // the whole block at-most-once.
    use_effect(move || {
        let ready = (state.map_ready)();
        let locations = state.locations.read().clone();
        let huc_rows = state.huc_health.read().clone();
        if !ready || locations.is_empty() || huc_rows.is_empty() {
            return;
        }
        let Some(surface) = map_surface() else {
            return;
        };
        if surface.has_source(layer::LOCATIONS_SOURCE) {
            return;
        }
        // untracked read: rebinding on selection change is the sync
        // effect's job
        let selected = *state.selected_years.peek();

        log::info!(
            "binding {} location rows and {} boundary rows",
            locations.len(),
            huc_rows.len()
        );

        surface.add_vector_source(layer::HUC_SOURCE, layer::HUC_TILESET_URL, layer::HUC_PROMOTE_ID);
        let feature_states = huc::FeatureStateMap::from_rows(&huc_rows);
        for (huc_name, feature_state) in feature_states.iter() {
            surface.set_feature_state(
                layer::HUC_SOURCE,
                layer::HUC_SOURCE_LAYER,
                huc_name,
                &feature_state,
            );
        }
        surface.add_layer(&layer::huc_fill_layer(selected, &selected.to_string()));
        surface.add_layer(&layer::huc_line_layer());

        surface.add_geojson_source(
            layer::LOCATIONS_SOURCE,
            &location::locations_feature_collection(&locations),
        );
        surface.add_layer(&layer::locations_layer());
        surface.set_filter(
            layer::LOCATIONS_LAYER,
            &expression::selected_window_filter(selected),
        );

        surface.wire_popups(
            layer::LOCATIONS_LAYER,
            layer::LOCATIONS_SOURCE,
            layer::HUC_FILL_LAYER,
            layer::HUC_PROMOTE_ID,
        );
    });

    // ─── Effect 4: sync the selection into filter and paint state ───
    use_effect(move || {
        let selected = (state.selected_years)();
        if !(state.map_ready)() {
            return;
        }
        let Some(surface) = map_surface() else {
            return;
        };
        if !surface.has_layer(layer::LOCATIONS_LAYER) {
            return;
        }
        surface.set_filter(
            layer::LOCATIONS_LAYER,
            &expression::selected_window_filter(selected),
        );
        surface.set_paint_property(
            layer::HUC_FILL_LAYER,
            "fill-color",
            &expression::boundary_color_expression(selected),
        );
    });

    use_drop(move || {
        if let Some(surface) = *map_surface.peek() {
            surface.destroy();
        }
    });

    // ─── Render ───
    if let Some(err) = state.locations_error.read().as_ref() {
        return rsx! { ErrorDisplay { message: err.clone() } };
    }
    if let Some(err) = state.huc_error.read().as_ref() {
        return rsx! { ErrorDisplay { message: err.clone() } };
    }

    rsx! {
        div {
            style: "position: relative; width: 100vw; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",
            if *state.locations_loading.read() || *state.huc_loading.read() {
                LoadingSpinner {}
            }
            MapContainer { id: MAP_CONTAINER_ID.to_string() }
            YearsSelector {}
            Legend {}
            LegendControl {}
        }
    }
}
