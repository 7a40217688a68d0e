use crate::types::riasec::{PercentileSet, Trait};
use std::collections::HashMap;

/// Raw score to per-trait percentile lookup, built once from reference rows.
#[derive(Debug, Clone, Default)]
pub struct PercentileTable {
    rows: HashMap<i64, PercentileSet>,
    skipped_rows: usize,
}

impl PercentileTable {
    /// Builds the table from a header and data rows. The first column is the
    /// raw score; remaining columns are keyed by their trait header. Columns
    /// that name no trait are ignored. Rows that do not parse are excluded and
    /// counted in `skipped_rows`.
    pub fn from_rows<I, R>(header: &[String], rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let columns = header
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, name)| Trait::from_header(name).map(|t| (index, t)))
            .collect::<Vec<_>>();

        let mut table = Self::default();
        for row in rows {
            match parse_row(row.as_ref(), &columns) {
                Some((score, percentiles)) => {
                    table.rows.insert(score, percentiles);
                }
                None => table.skipped_rows += 1,
            }
        }
        table
    }

    /// Never fails: unknown scores and traits without a column resolve to 0.
    pub fn lookup(&self, raw_score: i64, t: Trait) -> u8 {
        self.rows
            .get(&raw_score)
            .map(|percentiles| percentiles.get(t))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

fn parse_row(row: &[String], columns: &[(usize, Trait)]) -> Option<(i64, PercentileSet)> {
    let score = parse_integer(row.first()?)?;
    let mut values = [0u8; 6];
    for (index, t) in columns {
        let value = parse_percentile(row.get(*index)?)?;
        values[*t as usize] = value;
    }
    Some((score, PercentileSet::from_fn(|t| values[t as usize])))
}

/// Accepts `12` and `12.0`; rejects `12.5`, text and blanks.
pub fn parse_integer(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }
    let value = cell.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
        .then_some(value as i64)
}

fn parse_percentile(cell: &str) -> Option<u8> {
    let value = cell.trim().parse::<f64>().ok()?;
    (value.is_finite() && (0.0..=100.0).contains(&value)).then(|| value.round() as u8)
}
