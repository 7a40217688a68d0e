pub mod sheets;
pub mod text;

use crate::error::{ReportError, Result};
use crate::scoring::percentile::parse_integer;
use crate::scoring::PercentileTable;
use crate::types::catalog::{CareerCatalog, CareerRecord};
use crate::types::config::{
    CatalogColumns, PersonColumns, ReportConfig, CODE_ID_POSITION, CODE_LINK_POSITION,
    WORK_FIELD_ID_POSITION, WORK_LINK_POSITION,
};
use crate::types::report::{Identity, PersonScores};
use crate::types::riasec::{RawScoreSet, Trait};
use sheets::{cell, read_sheet, Sheet};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything read from a workbook directory. Reference tables are
/// read-only once loaded.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub people: Vec<PersonScores>,
    /// People with at least one unreadable trait score.
    pub incomplete_people: usize,
    pub percentiles: PercentileTable,
    pub catalog: CareerCatalog,
    pub introduction: Vec<String>,
    pub descriptions: BTreeMap<Trait, Vec<String>>,
    pub images_dir: PathBuf,
}

impl Workbook {
    pub fn problem_rows(&self) -> usize {
        self.incomplete_people + self.percentiles.skipped_rows()
    }

    /// Absolute path of the theme image, so the link resolves wherever the
    /// report is written.
    pub fn image_for(&self, t: Trait) -> Option<PathBuf> {
        let path = self.images_dir.join(format!("{}.png", t.name()));
        if !path.is_file() {
            return None;
        }
        path.canonicalize().ok()
    }
}

pub fn load_workbook(root: &Path, config: &ReportConfig) -> Result<Workbook> {
    if !root.is_dir() {
        return Err(ReportError::WorkbookNotFound(root.display().to_string()));
    }
    let sheets = &config.sheets;

    let percentile_sheet = read_sheet(&root.join(&sheets.percentiles))?;
    let percentiles = PercentileTable::from_rows(&percentile_sheet.header, &percentile_sheet.rows);
    if percentiles.skipped_rows() > 0 {
        tracing::info!(
            skipped = percentiles.skipped_rows(),
            kept = percentiles.len(),
            "percentile rows excluded"
        );
    }

    let catalog = read_catalog(&read_sheet(&root.join(&sheets.codes))?, &config.catalog)?;
    let (people, incomplete_people) =
        read_people(&read_sheet(&root.join(&sheets.scores))?, &config.columns)?;

    let introduction = text::read_paragraphs(&root.join(&sheets.introduction));
    let descriptions_dir = root.join(&sheets.descriptions_dir);
    let descriptions = Trait::ALL
        .into_iter()
        .map(|t| (t, text::read_description(&descriptions_dir, t)))
        .collect();

    tracing::info!(
        people = people.len(),
        catalog = catalog.len(),
        "workbook loaded"
    );
    Ok(Workbook {
        people,
        incomplete_people,
        percentiles,
        catalog,
        introduction,
        descriptions,
        images_dir: root.join(&sheets.images_dir),
    })
}

fn read_catalog(sheet: &Sheet, columns: &CatalogColumns) -> Result<CareerCatalog> {
    let code_id = linking_column(sheet, columns.code_id.as_deref(), CODE_ID_POSITION)?;
    let code = sheet.require_column(&columns.code)?;
    let work_field_id =
        linking_column(sheet, columns.work_field_id.as_deref(), WORK_FIELD_ID_POSITION)?;
    let code_link = linking_column(sheet, columns.code_link.as_deref(), CODE_LINK_POSITION)?;
    let work_field = sheet.require_column(&columns.work_field)?;
    let job = sheet.require_column(&columns.job)?;
    let job_zone = sheet.require_column(&columns.job_zone)?;
    let work_link = linking_column(sheet, columns.work_link.as_deref(), WORK_LINK_POSITION)?;

    let records = sheet
        .rows
        .iter()
        .map(|row| CareerRecord {
            code_id: cell(row, code_id),
            code: cell(row, code).unwrap_or_default(),
            work_field_id: cell(row, work_field_id),
            code_link: cell(row, code_link),
            work_field: row
                .get(work_field)
                .filter(|value| !value.trim().is_empty())
                .cloned(),
            job: cell(row, job),
            job_zone: cell(row, job_zone),
            work_link: cell(row, work_link),
        })
        .collect();
    Ok(CareerCatalog::new(records))
}

/// Linking columns are positional; their labels vary between exports.
fn linking_column(sheet: &Sheet, header: Option<&str>, position: usize) -> Result<usize> {
    match header {
        Some(name) => sheet.require_column(name),
        None if position < sheet.header.len() => Ok(position),
        None => Err(ReportError::MissingColumn {
            sheet: sheet.name.clone(),
            column: format!("#{position}"),
        }),
    }
}

fn read_people(sheet: &Sheet, columns: &PersonColumns) -> Result<(Vec<PersonScores>, usize)> {
    let name = sheet.require_column(&columns.name)?;
    let roll = sheet.require_column(&columns.roll)?;
    let class = sheet.column(&columns.class);
    let section = sheet.column(&columns.section);
    let mut trait_columns = [0usize; 6];
    for t in Trait::ALL {
        trait_columns[t as usize] = sheet.require_column(t.name())?;
    }

    let mut people = Vec::new();
    let mut incomplete = 0;
    for (line, row) in sheet.rows.iter().enumerate() {
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let identity = Identity {
            name: cell(row, name).unwrap_or_default(),
            roll: cell(row, roll).unwrap_or_default(),
            class: class.and_then(|index| cell(row, index)).unwrap_or_default(),
            section: section.and_then(|index| cell(row, index)).unwrap_or_default(),
        };

        let mut raw = [None; 6];
        let mut unreadable = Vec::new();
        for t in Trait::ALL {
            raw[t as usize] = row.get(trait_columns[t as usize]).and_then(|v| parse_integer(v));
            if raw[t as usize].is_none() {
                unreadable.push(t.name());
            }
        }
        if !unreadable.is_empty() {
            tracing::warn!(
                row = line + 2,
                name = %identity.name,
                columns = %unreadable.join(", "),
                "unreadable scores treated as unknown (percentile 0)"
            );
            incomplete += 1;
        }

        people.push(PersonScores {
            identity,
            raw: RawScoreSet::from_fn(|t| raw[t as usize]),
        });
    }
    Ok((people, incomplete))
}
