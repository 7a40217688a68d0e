use serde::Serialize;

/// One row of the career reference catalog.
///
/// The catalog encodes two relations in one table: `code_link` points at
/// another row's `code_id` (work fields for a code), and `work_link` points
/// at another row's `work_field_id` (jobs for a code).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerRecord {
    pub code_id: Option<String>,
    pub code: String,
    pub work_field_id: Option<String>,
    pub code_link: Option<String>,
    pub work_field: Option<String>,
    pub job: Option<String>,
    pub job_zone: Option<String>,
    pub work_link: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
}

impl CareerCatalog {
    pub fn new(records: Vec<CareerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn find_code(&self, code: &str) -> Option<&CareerRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    pub fn linked_to_code(&self, code_id: &str) -> impl Iterator<Item = &CareerRecord> + '_ {
        let code_id = code_id.to_string();
        self.records
            .iter()
            .filter(move |record| record.code_link.as_deref() == Some(code_id.as_str()))
    }

    pub fn linked_to_work_field(
        &self,
        work_field_id: &str,
    ) -> impl Iterator<Item = &CareerRecord> + '_ {
        let work_field_id = work_field_id.to_string();
        self.records
            .iter()
            .filter(move |record| record.work_link.as_deref() == Some(work_field_id.as_str()))
    }
}
