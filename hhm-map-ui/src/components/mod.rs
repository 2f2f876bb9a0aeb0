//! Reusable Dioxus RSX components for the hydrologic health map.

mod error_display;
mod legend;
mod loading_spinner;
mod map_container;
mod years_selector;

pub use error_display::ErrorDisplay;
pub use legend::{Legend, LegendControl};
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use years_selector::YearsSelector;
