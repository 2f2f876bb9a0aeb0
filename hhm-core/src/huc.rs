//! HUC-8 boundary health rows and their feature-state projection.
//!
//! Boundary polygons live in a prebuilt vector tileset; the only thing
//! bound at runtime is transient per-feature state: for each boundary, one
//! `{ "<window>": health_pct }` entry per rolling-average window observed
//! in the data. `FeatureStateMap` makes that accumulation explicit instead
//! of leaving it implicit in renderer mutation order.

use std::collections::BTreeMap;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One (boundary, window) health observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HucHealthRow {
    pub huc8_name: String,
    pub yrs_inc_in_avg: u32,
    pub hydro_health_pct: f64,
}

/// Parse the embedded boundary-health asset.
///
/// CSV with a `huc8_name,yrs_inc_in_avg,hydro_health_pct` header row.
/// Malformed rows are skipped with a warning; an empty result is an error.
pub fn parse_huc_health(csv_data: &str) -> anyhow::Result<Vec<HucHealthRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::warn!("skipping unreadable HUC health row: {err}");
                continue;
            }
        };
        let name = record.get(0).unwrap_or("").trim();
        let window = record.get(1).unwrap_or("").trim().parse::<u32>();
        let pct = record.get(2).unwrap_or("").trim().parse::<f64>();
        match (window, pct) {
            (Ok(window), Ok(pct)) if !name.is_empty() => rows.push(HucHealthRow {
                huc8_name: name.to_string(),
                yrs_inc_in_avg: window,
                hydro_health_pct: pct,
            }),
            _ => log::warn!("skipping malformed HUC health row: {record:?}"),
        }
    }

    if rows.is_empty() {
        bail!("no HUC boundary health data available");
    }
    Ok(rows)
}

/// Accumulated feature state, keyed by boundary name and then by the
/// string form of the rolling-average window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureStateMap {
    states: BTreeMap<String, BTreeMap<String, f64>>,
}

impl FeatureStateMap {
    /// Group rows by boundary. A later row for the same (boundary, window)
    /// pair overwrites the earlier value, matching last-write-wins state
    /// semantics on the renderer side.
    pub fn from_rows(rows: &[HucHealthRow]) -> Self {
        let mut states: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for row in rows {
            states
                .entry(row.huc8_name.clone())
                .or_default()
                .insert(row.yrs_inc_in_avg.to_string(), row.hydro_health_pct);
        }
        Self { states }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Per-boundary state objects ready for `setFeatureState`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.states.iter().map(|(name, windows)| {
            let state: serde_json::Map<String, Value> = windows
                .iter()
                .map(|(window, pct)| (window.clone(), json!(pct)))
                .collect();
            (name.as_str(), Value::Object(state))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
huc8_name,yrs_inc_in_avg,hydro_health_pct
Upper Henrys,1,96.4
Upper Henrys,5,88.2
Lower Henrys,1,104.0
";

    #[test]
    fn parses_well_formed_rows() {
        let rows = parse_huc_health(SAMPLE_CSV).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].huc8_name, "Upper Henrys");
        assert_eq!(rows[1].yrs_inc_in_avg, 5);
        assert_eq!(rows[2].hydro_health_pct, 104.0);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let csv = "\
huc8_name,yrs_inc_in_avg,hydro_health_pct
Upper Henrys,1,96.4
,2,50.0
Lower Henrys,not-a-number,50.0
Lower Henrys,3,
";
        let rows = parse_huc_health(csv).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_huc_health("huc8_name,yrs_inc_in_avg,hydro_health_pct\n").is_err());
    }

    #[test]
    fn one_boundary_accumulates_one_key_per_window() {
        let rows = parse_huc_health(SAMPLE_CSV).unwrap();
        let map = FeatureStateMap::from_rows(&rows);
        assert_eq!(map.len(), 2);

        let states: Vec<(&str, Value)> = map.iter().collect();
        assert_eq!(states[1].0, "Upper Henrys");
        assert_eq!(states[1].1, json!({"1": 96.4, "5": 88.2}));
        assert_eq!(states[0].1, json!({"1": 104.0}));
    }

    #[test]
    fn duplicate_window_keeps_the_last_value() {
        let rows = vec![
            HucHealthRow { huc8_name: "A".into(), yrs_inc_in_avg: 1, hydro_health_pct: 10.0 },
            HucHealthRow { huc8_name: "A".into(), yrs_inc_in_avg: 1, hydro_health_pct: 20.0 },
        ];
        let map = FeatureStateMap::from_rows(&rows);
        let states: Vec<(&str, Value)> = map.iter().collect();
        assert_eq!(states[0].1, json!({"1": 20.0}));
    }
}
