use clap::Parser;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line interface for the marginalia tool
#[derive(Parser, Debug)]
#[command(
    name = "marginalia",
    version,
    about = "Generate literate-programming documentation from source files."
)]
pub struct Cli {
    /// Files, directories, or glob patterns to document
    pub paths: Vec<String>,

    /// Output directory for the generated site (default: docs)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Title for the index page
    #[arg(short, long)]
    pub title: Option<String>,

    /// Number of worker threads (defaults to the CPU count)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Perform a dry run (don't write any files)
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Disable .gitignore file processing
    #[arg(long = "no-gitignore", default_value_t = false)]
    pub no_gitignore: bool,

    /// Path to a marginalia.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print each generated page
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Creates a gitignore matcher for the given directory
pub fn create_gitignore_matcher(base_dir: &Path) -> Gitignore {
    let mut builder = GitignoreBuilder::new(base_dir);

    let local_gitignore = base_dir.join(".gitignore");
    if local_gitignore.exists() {
        builder.add(&local_gitignore);
    }

    builder.build().unwrap_or_else(|_| Gitignore::empty())
}

/// Collect files to process, respecting .gitignore rules unless disabled
pub fn collect_files(paths: &[PathBuf], respect_gitignore: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let gitignore = if respect_gitignore {
                create_gitignore_matcher(path)
            } else {
                Gitignore::empty()
            };
            walk_dir(path, &gitignore, &mut files, respect_gitignore);
        }
    }

    files
}

fn walk_dir(dir: &Path, gitignore: &Gitignore, files: &mut Vec<PathBuf>, respect_gitignore: bool) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            // Hidden entries (.git and friends) are never documented
            if path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }
            if let Ok(relative_path) = path.strip_prefix(dir) {
                if !respect_gitignore
                    || !gitignore.matched(relative_path, path.is_dir()).is_ignore()
                {
                    if path.is_dir() {
                        walk_dir(&path, gitignore, files, respect_gitignore);
                    } else if path.is_file() {
                        files.push(path);
                    }
                }
            }
        }
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Cli {
    Cli::parse()
}
