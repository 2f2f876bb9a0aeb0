//! Monitoring-location rows and their GeoJSON projection.
//!
//! Rows arrive as JSON with the upstream column names (`loc_name`,
//! `yrs_inc_in_avg`, ...) and are re-keyed to the renderer-facing property
//! names when assembled into a feature collection. Geometry passes through
//! verbatim -- no validation or reprojection happens here.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Renderer-facing property names on point features.
pub const PROP_HYDRO_HEALTH_PCT: &str = "hydroHealthPct";
pub const PROP_YEARS_WINDOW: &str = "yearsIncludedInAverage";

/// GeoJSON geometry fragment, carried verbatim from the input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Value,
}

/// One monitoring location with its precomputed rolling-average health.
///
/// A location appears once per rolling-average window it participates in;
/// the layer filter picks out the rows matching the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringLocation {
    pub loc_name: String,
    pub loc_ndx: i64,
    pub loc_type_name: String,
    pub huc8_name: String,
    pub huc10_name: String,
    pub indicator: String,
    pub median_indicator: Option<f64>,
    pub hydro_health_pct: Option<f64>,
    pub yrs_inc_in_avg: u32,
    pub location_geometry: Geometry,
}

/// Parse the embedded locations asset.
pub fn parse_locations(json_data: &str) -> anyhow::Result<Vec<MonitoringLocation>> {
    let rows: Vec<MonitoringLocation> =
        serde_json::from_str(json_data).context("failed to parse monitoring location rows")?;
    if rows.is_empty() {
        bail!("no monitoring location data available");
    }
    Ok(rows)
}

/// Assemble the GeoJSON FeatureCollection for the locations source.
///
/// The feature id is the row index; properties use the renderer-facing
/// names consumed by the paint expressions, the layer filter, and the
/// popup.
pub fn locations_feature_collection(rows: &[MonitoringLocation]) -> Value {
    let features: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            json!({
                "id": i,
                "type": "Feature",
                "properties": {
                    "description": row.loc_name,
                    "index": row.loc_ndx,
                    "locType": row.loc_type_name,
                    "huc8": row.huc8_name,
                    "huc10": row.huc10_name,
                    "indicator": row.indicator,
                    "medianIndicator": row.median_indicator,
                    "hydroHealthPct": row.hydro_health_pct,
                    "yearsIncludedInAverage": row.yrs_inc_in_avg,
                },
                "geometry": {
                    "type": row.location_geometry.kind,
                    "coordinates": row.location_geometry.coordinates,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Distinct rolling-average windows present in the data, ascending.
/// Drives the years-of-history selector.
pub fn distinct_windows(rows: &[MonitoringLocation]) -> Vec<u32> {
    let mut windows: Vec<u32> = rows.iter().map(|r| r.yrs_inc_in_avg).collect();
    windows.sort_unstable();
    windows.dedup();
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<MonitoringLocation> {
        parse_locations(
            r#"[
                {
                    "loc_name": "Snake River nr Heise",
                    "loc_ndx": 42,
                    "loc_type_name": "Streamflow",
                    "huc8_name": "Upper Henrys",
                    "huc10_name": "Henrys Fork",
                    "indicator": "Streamflow (cfs)",
                    "median_indicator": 1180.5,
                    "hydro_health_pct": 96.4,
                    "yrs_inc_in_avg": 1,
                    "location_geometry": {
                        "type": "Point",
                        "coordinates": [-111.66, 43.61]
                    }
                },
                {
                    "loc_name": "Snake River nr Heise",
                    "loc_ndx": 42,
                    "loc_type_name": "Streamflow",
                    "huc8_name": "Upper Henrys",
                    "huc10_name": "Henrys Fork",
                    "indicator": "Streamflow (cfs)",
                    "median_indicator": null,
                    "hydro_health_pct": null,
                    "yrs_inc_in_avg": 5,
                    "location_geometry": {
                        "type": "Point",
                        "coordinates": [-111.66, 43.61]
                    }
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn features_use_renderer_property_names_and_row_index_ids() {
        let fc = locations_feature_collection(&sample_rows());
        assert_eq!(fc["type"], "FeatureCollection");
        let feature = &fc["features"][0];
        assert_eq!(feature["id"], 0);
        let props = &feature["properties"];
        assert_eq!(props["description"], "Snake River nr Heise");
        assert_eq!(props["index"], 42);
        assert_eq!(props["locType"], "Streamflow");
        assert_eq!(props["huc8"], "Upper Henrys");
        assert_eq!(props["hydroHealthPct"], 96.4);
        assert_eq!(props["yearsIncludedInAverage"], 1);
        assert_eq!(fc["features"][1]["id"], 1);
    }

    #[test]
    fn geometry_is_copied_verbatim() {
        let fc = locations_feature_collection(&sample_rows());
        let geom = &fc["features"][0]["geometry"];
        assert_eq!(geom["type"], "Point");
        assert_eq!(geom["coordinates"], serde_json::json!([-111.66, 43.61]));
    }

    #[test]
    fn missing_health_values_serialize_as_null() {
        let fc = locations_feature_collection(&sample_rows());
        assert!(fc["features"][1]["properties"]["hydroHealthPct"].is_null());
        assert!(fc["features"][1]["properties"]["medianIndicator"].is_null());
    }

    #[test]
    fn distinct_windows_are_sorted_and_deduped() {
        let mut rows = sample_rows();
        rows.extend(sample_rows());
        assert_eq!(distinct_windows(&rows), vec![1, 5]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_locations("[]").is_err());
        assert!(parse_locations("not json").is_err());
    }
}
