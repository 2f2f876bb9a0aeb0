//! Map legend overlay and its visibility toggle.
//!
//! Legend rows come straight from the bucket ladder, so the swatches can
//! never disagree with the layer paint expressions.

use crate::state::AppState;
use dioxus::prelude::*;
use hhm_core::health::legend_entries;

/// Floating legend card listing each health bucket with its color.
/// Rendered only while `legend_visible` is set.
#[component]
pub fn Legend() -> Element {
    let state = use_context::<AppState>();
    if !(state.legend_visible)() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: absolute; bottom: 30px; left: 10px; z-index: 2; background: rgba(255,255,255,0.92); border-radius: 4px; box-shadow: 0 1px 4px rgba(0,0,0,0.3); padding: 10px 14px; font-size: 12px;",
            strong {
                style: "display: block; margin-bottom: 6px;",
                "% of Median Hydrologic Health"
            }
            for entry in legend_entries() {
                div {
                    style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border: 1px solid #444; background: {entry.color};",
                    }
                    "{entry.label}"
                }
            }
        }
    }
}

/// Floating button toggling legend visibility. Local state only; no map
/// mutation.
#[component]
pub fn LegendControl() -> Element {
    let mut state = use_context::<AppState>();
    let visible = (state.legend_visible)();

    rsx! {
        button {
            style: "position: absolute; bottom: 30px; right: 10px; z-index: 2; padding: 6px 10px; border: 1px solid #bbb; border-radius: 4px; background: white; cursor: pointer;",
            onclick: move |_| {
                let flipped = !visible;
                state.legend_visible.set(flipped);
            },
            if visible { "Hide legend" } else { "Show legend" }
        }
    }
}
