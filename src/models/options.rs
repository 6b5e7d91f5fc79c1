use std::path::PathBuf;

/// Settings for one documentation run, resolved from the command line and
/// the optional config file (flags win).
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Directory the generated site is written into.
    pub output_dir: PathBuf,
    /// Title for the index page; per-file pages use the file name.
    pub title: Option<String>,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            title: None,
            dry_run: false,
            verbose: false,
        }
    }
}
