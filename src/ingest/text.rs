use crate::types::riasec::Trait;
use std::path::Path;

/// Non-blank lines of a text sheet, or empty when the file is absent.
pub fn read_paragraphs(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => {
            tracing::warn!(path = %path.display(), "text sheet not found");
            Vec::new()
        }
    }
}

/// Reads `<dir>/<Trait>.txt`. The first line is the theme title and is
/// dropped, as are stray numeric lines.
pub fn read_description(dir: &Path, t: Trait) -> Vec<String> {
    read_paragraphs(&dir.join(format!("{}.txt", t.name())))
        .into_iter()
        .filter(|line| line.parse::<f64>().is_err())
        .skip(1)
        .collect()
}
