//! Typed builders for Mapbox GL expression trees.
//!
//! Paint and filter expressions cross the JS bridge as JSON arrays. These
//! builders produce them as `serde_json::Value` so both map layers share
//! one ladder definition (see [`crate::health`]) instead of two hand-kept
//! copies.

use serde_json::{json, Value};

use crate::health::{MISSING_STATE_SENTINEL, NO_DATA_COLOR, RUNGS};
use crate::location::{PROP_HYDRO_HEALTH_PCT, PROP_YEARS_WINDOW};

/// `["get", <prop>]` -- read a feature property.
pub fn get(prop: &str) -> Value {
    json!(["get", prop])
}

/// `["feature-state", ["literal", <key>]]` -- read transient per-feature
/// state under a string key.
pub fn feature_state_key(key: &str) -> Value {
    json!(["feature-state", ["literal", key]])
}

/// `["coalesce", ...]` -- first non-null operand.
pub fn coalesce(exprs: Vec<Value>) -> Value {
    let mut arr = vec![json!("coalesce")];
    arr.extend(exprs);
    Value::Array(arr)
}

/// The health ladder as a `case` expression over `input`.
///
/// One `(cmp input threshold) -> color` branch per rung, falling back to
/// the no-data color.
pub fn health_case(input: Value) -> Value {
    let mut arr = vec![json!("case")];
    for rung in &RUNGS {
        arr.push(json!([rung.cmp.op(), input.clone(), rung.threshold]));
        arr.push(json!(rung.color));
    }
    arr.push(json!(NO_DATA_COLOR));
    Value::Array(arr)
}

/// Circle color for the monitoring-location layer, bucketing the
/// feature's own health percentage.
pub fn point_color_expression() -> Value {
    health_case(get(PROP_HYDRO_HEALTH_PCT))
}

/// Fill color for the boundary layer, bucketing the feature-state entry
/// keyed by the string form of the selected window. Boundaries without an
/// entry for that key coalesce to the sentinel and render as no-data.
pub fn boundary_color_expression(selected_years: u32) -> Value {
    health_case(coalesce(vec![
        feature_state_key(&selected_years.to_string()),
        json!(MISSING_STATE_SENTINEL),
    ]))
}

/// Exact-match filter on an integer feature property.
pub fn exact_match_filter(prop: &str, value: u32) -> Value {
    json!(["==", get(prop), value])
}

/// Filter for the location layer: show only points whose rolling-average
/// window equals the selection.
pub fn selected_window_filter(selected_years: u32) -> Value {
    exact_match_filter(PROP_YEARS_WINDOW, selected_years)
}

/// Fill opacity for the boundary layer: boundaries carrying feature state
/// under `key` render at 0.7, the rest fade to 0.2.
pub fn has_state_opacity(key: &str) -> Value {
    json!([
        "case",
        ["boolean", ["to-boolean", ["feature-state", key]]],
        0.7,
        0.2
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_color_expression_matches_the_wire_shape() {
        assert_eq!(
            point_color_expression(),
            json!([
                "case",
                ["<", ["get", "hydroHealthPct"], 50.0], "#E0393D",
                ["<=", ["get", "hydroHealthPct"], 69.0], "#E1AC3E",
                ["<=", ["get", "hydroHealthPct"], 89.0], "#E1E63E",
                ["<=", ["get", "hydroHealthPct"], 109.0], "#6EE53D",
                ["<=", ["get", "hydroHealthPct"], 129.0], "#8AF7E3",
                ["<=", ["get", "hydroHealthPct"], 149.0], "#33B6E8",
                ["<=", ["get", "hydroHealthPct"], 1000.0], "#3539FC",
                "black"
            ])
        );
    }

    #[test]
    fn boundary_expression_keys_feature_state_by_selection_string() {
        let expr = boundary_color_expression(5);
        let expected_input = json!([
            "coalesce",
            ["feature-state", ["literal", "5"]],
            1001.0
        ]);
        // input repeats in every branch condition
        assert_eq!(expr[1][1], expected_input);
        assert_eq!(expr[13][1], expected_input);
    }

    #[test]
    fn point_and_boundary_ladders_are_identical() {
        let point = point_color_expression();
        let boundary = boundary_color_expression(3);
        let point = point.as_array().unwrap();
        let boundary = boundary.as_array().unwrap();
        assert_eq!(point.len(), boundary.len());
        // colors (odd slots after "case") and fallback agree
        for i in (2..point.len() - 1).step_by(2) {
            assert_eq!(point[i], boundary[i]);
        }
        assert_eq!(point.last(), boundary.last());
        // operators and thresholds agree branch by branch
        for i in (1..point.len() - 1).step_by(2) {
            assert_eq!(point[i][0], boundary[i][0]);
            assert_eq!(point[i][2], boundary[i][2]);
        }
    }

    #[test]
    fn filter_is_an_exact_match_on_the_window_property() {
        assert_eq!(
            selected_window_filter(7),
            json!(["==", ["get", "yearsIncludedInAverage"], 7])
        );
    }

    #[test]
    fn opacity_expression_checks_state_presence() {
        assert_eq!(
            has_state_opacity("1"),
            json!([
                "case",
                ["boolean", ["to-boolean", ["feature-state", "1"]]],
                0.7,
                0.2
            ])
        );
    }
}
