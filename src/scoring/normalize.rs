use super::PercentileTable;
use crate::types::riasec::{PercentileSet, RawScoreSet};

/// Maps each of the six raw scores through the percentile table. An
/// unreadable score is an unknown score and maps to 0.
pub fn normalize(scores: &RawScoreSet, table: &PercentileTable) -> PercentileSet {
    PercentileSet::from_fn(|t| scores.get(t).map_or(0, |raw| table.lookup(raw, t)))
}
