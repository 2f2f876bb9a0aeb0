//! Years-of-history selector.

use crate::state::AppState;
use dioxus::prelude::*;

/// Dropdown over the rolling-average windows present in the data.
/// Writing `selected_years` drives the layer filter and the boundary
/// recolor.
#[component]
pub fn YearsSelector() -> Element {
    let mut state = use_context::<AppState>();
    let windows = state.available_windows.read().clone();
    let selected = (state.selected_years)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(years) = evt.value().parse::<u32>() {
            state.selected_years.set(years);
        }
    };

    rsx! {
        div {
            style: "position: absolute; top: 10px; right: 10px; z-index: 2; background: rgba(255,255,255,0.92); border-radius: 4px; box-shadow: 0 1px 4px rgba(0,0,0,0.3); padding: 6px 10px;",
            label {
                style: "font-weight: bold; font-size: 12px;",
                "Years of history: "
                select {
                    onchange: on_change,
                    for window in windows.iter() {
                        option {
                            value: "{window}",
                            selected: *window == selected,
                            "{window}"
                        }
                    }
                }
            }
        }
    }
}
