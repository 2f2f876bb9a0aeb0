//! Health-percentage bucket policy.
//!
//! The threshold ladder, bucket colors, and legend labels all live in one
//! static table. The point-layer expression, the boundary-layer expression,
//! and the legend are derived from it, so the three can never drift apart.

/// Comparison operator for a single bucket rung.
///
/// Only the lowest rung uses a strict `<`; every other rung is inclusive.
/// The Mapbox expression operators `"<"` / `"<="` are derived from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Lt,
    Le,
}

impl Cmp {
    /// The Mapbox GL expression operator string.
    pub fn op(self) -> &'static str {
        match self {
            Cmp::Lt => "<",
            Cmp::Le => "<=",
        }
    }

    fn matches(self, value: f64, threshold: f64) -> bool {
        match self {
            Cmp::Lt => value < threshold,
            Cmp::Le => value <= threshold,
        }
    }
}

/// One rung of the bucket ladder: first match wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketRung {
    pub cmp: Cmp,
    pub threshold: f64,
    pub color: &'static str,
    pub label: &'static str,
}

/// The health-percentage ladder, ordered from worst to best.
pub const RUNGS: [BucketRung; 7] = [
    BucketRung { cmp: Cmp::Lt, threshold: 50.0, color: "#E0393D", label: "< 50%" },
    BucketRung { cmp: Cmp::Le, threshold: 69.0, color: "#E1AC3E", label: "50% - 69%" },
    BucketRung { cmp: Cmp::Le, threshold: 89.0, color: "#E1E63E", label: "70% - 89%" },
    BucketRung { cmp: Cmp::Le, threshold: 109.0, color: "#6EE53D", label: "90% - 109%" },
    BucketRung { cmp: Cmp::Le, threshold: 129.0, color: "#8AF7E3", label: "110% - 129%" },
    BucketRung { cmp: Cmp::Le, threshold: 149.0, color: "#33B6E8", label: "130% - 149%" },
    BucketRung { cmp: Cmp::Le, threshold: 1000.0, color: "#3539FC", label: "≥ 150%" },
];

/// Fallback color when a value falls through every rung or is missing.
pub const NO_DATA_COLOR: &str = "black";
pub const NO_DATA_LABEL: &str = "No data";

/// Substituted when a boundary carries no feature-state entry for the
/// selected window key. Must stay strictly above the highest finite
/// threshold so it always classifies as no-data.
pub const MISSING_STATE_SENTINEL: f64 = 1001.0;

/// A single legend row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Classify a health percentage into a `(color, label)` pair.
///
/// Total over all inputs: `None` and values above the top threshold both
/// land in the no-data bucket. Mirrors the renderer-side `case` expression
/// exactly.
pub fn classify(value: Option<f64>) -> (&'static str, &'static str) {
    if let Some(v) = value {
        for rung in &RUNGS {
            if rung.cmp.matches(v, rung.threshold) {
                return (rung.color, rung.label);
            }
        }
    }
    (NO_DATA_COLOR, NO_DATA_LABEL)
}

/// Legend rows in display order: best bucket first, no-data last.
pub fn legend_entries() -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = RUNGS
        .iter()
        .rev()
        .map(|rung| LegendEntry { label: rung.label, color: rung.color })
        .collect();
    entries.push(LegendEntry { label: NO_DATA_LABEL, color: NO_DATA_COLOR });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_classify_onto_the_expected_rungs() {
        assert_eq!(classify(Some(49.0)).0, "#E0393D");
        // 50 is not < 50, so it falls to the inclusive second rung
        assert_eq!(classify(Some(50.0)).0, "#E1AC3E");
        assert_eq!(classify(Some(69.0)).0, "#E1AC3E");
        assert_eq!(classify(Some(70.0)).0, "#E1E63E");
        assert_eq!(classify(Some(109.0)).0, "#6EE53D");
        assert_eq!(classify(Some(150.0)).0, "#3539FC");
        assert_eq!(classify(Some(1000.0)).0, "#3539FC");
    }

    #[test]
    fn out_of_range_and_missing_values_are_no_data() {
        assert_eq!(classify(Some(1001.0)), (NO_DATA_COLOR, NO_DATA_LABEL));
        assert_eq!(classify(None), (NO_DATA_COLOR, NO_DATA_LABEL));
    }

    #[test]
    fn sentinel_exceeds_every_finite_threshold() {
        let top = RUNGS.iter().map(|r| r.threshold).fold(f64::MIN, f64::max);
        assert!(MISSING_STATE_SENTINEL > top);
        assert_eq!(classify(Some(MISSING_STATE_SENTINEL)).0, NO_DATA_COLOR);
    }

    #[test]
    fn rungs_are_ordered_by_threshold() {
        for pair in RUNGS.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }

    #[test]
    fn legend_matches_the_ladder() {
        let entries = legend_entries();
        assert_eq!(entries.len(), RUNGS.len() + 1);
        assert_eq!(entries[0].label, "≥ 150%");
        assert_eq!(entries[0].color, "#3539FC");
        assert_eq!(entries[6].label, "< 50%");
        assert_eq!(entries[6].color, "#E0393D");
        assert_eq!(entries[7], LegendEntry { label: NO_DATA_LABEL, color: NO_DATA_COLOR });
        // every rung color appears exactly once
        for rung in &RUNGS {
            assert_eq!(entries.iter().filter(|e| e.color == rung.color).count(), 1);
        }
    }
}
