//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use hhm_core::huc::HucHealthRow;
use hhm_core::location::MonitoringLocation;

/// Shared application state for the hydrologic health map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the map style has finished loading
    pub map_ready: Signal<bool>,
    /// Currently selected rolling-average window (years of history)
    pub selected_years: Signal<u32>,
    /// Distinct windows present in the data, for the selector
    pub available_windows: Signal<Vec<u32>>,
    /// Monitoring location rows
    pub locations: Signal<Vec<MonitoringLocation>>,
    /// HUC boundary health rows
    pub huc_health: Signal<Vec<HucHealthRow>>,
    /// Whether location data is still loading
    pub locations_loading: Signal<bool>,
    /// Whether boundary data is still loading
    pub huc_loading: Signal<bool>,
    /// Error message for a failed location-data load
    pub locations_error: Signal<Option<String>>,
    /// Error message for a failed boundary-data load
    pub huc_error: Signal<Option<String>>,
    /// Whether the legend overlay is shown
    pub legend_visible: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            map_ready: Signal::new(false),
            selected_years: Signal::new(1),
            available_windows: Signal::new(Vec::new()),
            locations: Signal::new(Vec::new()),
            huc_health: Signal::new(Vec::new()),
            locations_loading: Signal::new(true),
            huc_loading: Signal::new(true),
            locations_error: Signal::new(None),
            huc_error: Signal::new(None),
            legend_visible: Signal::new(true),
        }
    }
}
