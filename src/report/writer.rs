use super::OutputFormat;
use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `<workbook>/<output>.<ext>` unless an explicit path was given.
pub fn output_path(
    workbook: &Path,
    output: &str,
    explicit: Option<&Path>,
    format: OutputFormat,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => workbook.join(format!("{output}.{}", format.extension())),
    }
}

pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ReportError::Io)?;
    }
    fs::write(path, content).map_err(ReportError::Io)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_path_defaults_into_workbook() {
        let path = output_path(Path::new("wb"), "class_9", None, OutputFormat::Json);
        assert_eq!(path, Path::new("wb").join("class_9.json"));

        let explicit = output_path(
            Path::new("wb"),
            "class_9",
            Some(Path::new("out/report.md")),
            OutputFormat::Md,
        );
        assert_eq!(explicit, PathBuf::from("out/report.md"));
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("nested/reports/out.md");
        write_report(&path, "# Report\n").expect("report should write");
        assert_eq!(
            fs::read_to_string(&path).expect("report should read"),
            "# Report\n"
        );
    }
}
