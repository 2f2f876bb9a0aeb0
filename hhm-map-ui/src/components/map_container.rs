//! Map container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (the renderer attaches to this)
    pub id: String,
}

/// The div the map renderer mounts into. Fills its parent; overlays
/// (legend, controls) position themselves against it.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "position: relative; width: 100%; height: 100%;",
        }
    }
}
