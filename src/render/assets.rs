use crate::render::html::STYLESHEET_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const STYLESHEET: &str = include_str!("marginalia.css");

/// Writes the bundled stylesheet into the output directory, creating it if
/// needed. Returns the path written.
pub fn write_stylesheet(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let path = output_dir.join(STYLESHEET_NAME);
    fs::write(&path, STYLESHEET)
        .with_context(|| format!("Failed to write stylesheet: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_stylesheet_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("docs").join("nested");

        let path = write_stylesheet(&output).unwrap();

        assert!(path.ends_with(STYLESHEET_NAME));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("table.sections"));
    }
}
