use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expands glob patterns into file paths. A bare directory expands
/// recursively; a malformed pattern is an error, not a silent skip.
pub fn expand_paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        if !pattern.contains('*') && !pattern.contains('?') && !pattern.contains('[') {
            let path = PathBuf::from(pattern);
            if path.is_dir() {
                paths.extend(expand_paths(&[format!("{pattern}/**/*")])?);
                continue;
            }
        }

        let entries =
            glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        paths.extend(entries.flatten().filter(|entry| entry.is_file()));
    }
    Ok(paths)
}
