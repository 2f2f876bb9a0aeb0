//! Shared Dioxus components and Mapbox GL bridge for the hydrologic
//! health map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Mapbox GL glue via `js_sys::eval()`
//! - `map_surface`: the map lifecycle handle and camera/basemap constants
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (legend, selector, containers)

pub mod components;
pub mod js_bridge;
pub mod map_surface;
pub mod state;
