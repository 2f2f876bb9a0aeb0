//! Core types and pure logic for the hydrologic health map.
//!
//! Everything in this crate is renderer-agnostic and natively testable:
//! the health-percentage bucket policy, Mapbox GL expression builders,
//! monitoring-location and HUC boundary data models, and popup formatting.
//! The WASM/Dioxus layers live in `hhm-map-ui`.

pub mod expression;
pub mod health;
pub mod huc;
pub mod layer;
pub mod location;
pub mod popup;
