use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("workbook directory does not exist: {0}")]
    WorkbookNotFound(String),

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("sheet {sheet} is missing column: {column}")]
    MissingColumn { sheet: String, column: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
