//! Static layer configuration for the map surface.
//!
//! Source and layer ids, the HUC-8 vector tileset reference, and the three
//! layer descriptors (location circles, boundary fill, boundary outline)
//! handed to the renderer as JSON.

use serde_json::{json, Value};

use crate::expression::{
    boundary_color_expression, has_state_opacity, point_color_expression,
};

pub const LOCATIONS_SOURCE: &str = "locations";
pub const LOCATIONS_LAYER: &str = "locations";

pub const HUC_SOURCE: &str = "huc-8-boundaries";
pub const HUC_FILL_LAYER: &str = "huc-8-boundaries-fill";
pub const HUC_LINE_LAYER: &str = "huc-8-boundaries-line";

/// Prebuilt HUC-8 boundary tileset for the Upper Snake basin.
pub const HUC_TILESET_URL: &str = "mapbox://idahoswc.1rdlvyx6";
pub const HUC_SOURCE_LAYER: &str = "WBDHU08_UpperSnake-6vc1aa";
/// Tileset property promoted to the feature id, so feature state can be
/// addressed by boundary name.
pub const HUC_PROMOTE_ID: &str = "Name";

/// Circle layer for monitoring locations, colored by the health ladder.
pub fn locations_layer() -> Value {
    json!({
        "id": LOCATIONS_LAYER,
        "type": "circle",
        "source": LOCATIONS_SOURCE,
        "paint": {
            "circle-stroke-width": 1,
            "circle-stroke-color": "black",
            "circle-radius": 7,
            "circle-color": point_color_expression(),
        },
    })
}

/// Choropleth fill over the HUC-8 boundaries.
///
/// `opacity_key` is the feature-state key whose presence marks a boundary
/// as having data at all; boundaries without it fade out.
pub fn huc_fill_layer(selected_years: u32, opacity_key: &str) -> Value {
    json!({
        "id": HUC_FILL_LAYER,
        "type": "fill",
        "source": HUC_SOURCE,
        "source-layer": HUC_SOURCE_LAYER,
        "paint": {
            "fill-color": boundary_color_expression(selected_years),
            "fill-opacity": has_state_opacity(opacity_key),
        },
    })
}

/// Outline layer over the HUC-8 boundaries.
pub fn huc_line_layer() -> Value {
    json!({
        "id": HUC_LINE_LAYER,
        "type": "line",
        "source": HUC_SOURCE,
        "source-layer": HUC_SOURCE_LAYER,
        "paint": {
            "line-color": "#60BAF0",
            "line-width": 2,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::point_color_expression;

    #[test]
    fn locations_layer_is_a_circle_layer_on_its_source() {
        let layer = locations_layer();
        assert_eq!(layer["id"], "locations");
        assert_eq!(layer["type"], "circle");
        assert_eq!(layer["source"], "locations");
        assert_eq!(layer["paint"]["circle-radius"], 7);
        assert_eq!(layer["paint"]["circle-color"], point_color_expression());
    }

    #[test]
    fn huc_layers_target_the_tileset_source_layer() {
        let fill = huc_fill_layer(1, "1");
        assert_eq!(fill["type"], "fill");
        assert_eq!(fill["source"], "huc-8-boundaries");
        assert_eq!(fill["source-layer"], "WBDHU08_UpperSnake-6vc1aa");
        assert_eq!(fill["paint"]["fill-color"], boundary_color_expression(1));

        let line = huc_line_layer();
        assert_eq!(line["type"], "line");
        assert_eq!(line["source-layer"], "WBDHU08_UpperSnake-6vc1aa");
        assert_eq!(line["paint"]["line-color"], "#60BAF0");
        assert_eq!(line["paint"]["line-width"], 2);
    }
}
