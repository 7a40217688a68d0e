use crate::error::{ReportError, Result};
use std::path::Path;

/// A delimited sheet read as untyped text cells.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Finds a column by header, ignoring surrounding whitespace and ASCII case.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.header
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(wanted))
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| ReportError::MissingColumn {
            sheet: self.name.clone(),
            column: name.trim().to_string(),
        })
    }
}

pub fn read_sheet(path: &Path) -> Result<Sheet> {
    if !path.is_file() {
        return Err(ReportError::SheetNotFound(path.display().to_string()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = reader
        .headers()?
        .iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(|cell| cell.to_string()).collect());
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    tracing::debug!(sheet = %name, rows = rows.len(), "read sheet");
    Ok(Sheet { name, header, rows })
}

/// Returns the trimmed cell, or `None` when the cell is blank or absent.
pub fn cell(row: &[String], index: usize) -> Option<String> {
    row.get(index)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
