//! Weighted complexity score.

use super::Metrics;

/// Metric weights (must sum to 1.0). LOC and join count carry the most
/// weight (30% each) as the dominant drivers of script complexity; table
/// breadth and virtual tables add 10% each, and mutating statements 20%.
pub const W_LOC: f64 = 0.3;
pub const W_JOINS: f64 = 0.3;
pub const W_TABLES: f64 = 0.1;
pub const W_VIRTUAL: f64 = 0.1;
pub const W_DML: f64 = 0.2;

/// Linear weighted sum of the raw metric counts. No normalization and no
/// cap: a long enough script scores past 100.
pub fn complexity_score(m: &Metrics) -> f64 {
    W_LOC * m.loc as f64
        + W_JOINS * m.joins as f64
        + W_TABLES * m.unique_tables as f64
        + W_VIRTUAL * m.virtual_tables as f64
        + W_DML * m.updates_deletes as f64
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
