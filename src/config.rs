use crate::cli::Cli;
use crate::languages::config::LanguageConfig;
use crate::languages::registry::LanguageRegistry;
use crate::models::options::ProcessOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "marginalia.toml";

/// Optional project configuration (`marginalia.toml`). Everything here is a
/// default that command-line flags override.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output directory for the generated site
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Title for the index page
    #[serde(default)]
    pub title: Option<String>,

    /// Custom language definitions, keyed by language name. These are
    /// registered on top of the built-ins and may take over extensions.
    #[serde(default)]
    pub languages: BTreeMap<String, CustomLanguage>,
}

/// Comment-syntax markers for a language defined in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomLanguage {
    /// File extensions for this language
    pub extensions: Vec<String>,

    /// Marker that begins a single-line comment
    pub line_comment: String,

    /// Start/end marker pair for multi-line comments
    #[serde(default)]
    pub block_comment: Option<(String, String)>,

    /// Doc-comment marker whose lines are dropped entirely
    #[serde(default)]
    pub doc_comment: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Looks for `marginalia.toml` in the given directory.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::load(&candidate).map(Some);
        }
        Ok(None)
    }

    /// Resolves the run options: command-line flags win over config values,
    /// config values win over the built-in defaults.
    pub fn resolve_options(&self, args: &Cli) -> ProcessOptions {
        ProcessOptions {
            output_dir: args
                .output
                .clone()
                .or_else(|| self.output.clone())
                .unwrap_or_else(|| PathBuf::from("docs")),
            title: args.title.clone().or_else(|| self.title.clone()),
            dry_run: args.dry_run,
            verbose: args.verbose,
        }
    }

    pub fn apply_to_registry(&self, registry: &mut LanguageRegistry) {
        for (name, custom) in &self.languages {
            registry.register_language(LanguageConfig::new(
                name,
                custom.extensions.iter().map(String::as_str).collect(),
                &custom.line_comment,
                custom
                    .block_comment
                    .as_ref()
                    .map(|(start, end)| (start.as_str(), end.as_str())),
                custom.doc_comment.as_deref(),
            ));
        }
    }
}
