use crate::languages::config::LanguageConfig;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Maps file extensions (and a few well-known file names) to language
/// comment-syntax rules. Built once at startup and shared read-only by all
/// workers.
pub struct LanguageRegistry {
    languages: HashMap<String, Arc<LanguageConfig>>,
    extension_map: HashMap<String, String>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        };

        registry.register_default_languages();
        registry
    }

    fn register_default_languages(&mut self) {
        let configs = vec![
            LanguageConfig::rust(),
            LanguageConfig::c(),
            LanguageConfig::cpp(),
            LanguageConfig::go(),
            LanguageConfig::java(),
            LanguageConfig::javascript(),
            LanguageConfig::typescript(),
            LanguageConfig::python(),
            LanguageConfig::ruby(),
            LanguageConfig::shell(),
            LanguageConfig::haskell(),
            LanguageConfig::lua(),
            LanguageConfig::sql(),
            LanguageConfig::toml(),
            LanguageConfig::yaml(),
            LanguageConfig::elixir(),
            LanguageConfig::php(),
            LanguageConfig::swift(),
            LanguageConfig::make(),
        ];

        for config in configs {
            self.register_language(config);
        }
    }

    /// Later registrations win: a custom language claiming an extension
    /// already held by a built-in takes it over.
    pub fn register_language(&mut self, config: LanguageConfig) {
        let config = Arc::new(config);
        let name_lower = config.name.to_lowercase();

        for extension in &config.extensions {
            let normalized_ext = extension.trim_start_matches('.').to_lowercase();
            self.extension_map.insert(normalized_ext, name_lower.clone());
        }

        self.languages.insert(name_lower, config);
    }

    pub fn detect_language(&self, file_path: &Path) -> Option<&LanguageConfig> {
        let language_name = self.detect_language_name(file_path)?;
        self.languages.get(language_name).map(Arc::as_ref)
    }

    fn detect_language_name(&self, file_path: &Path) -> Option<&str> {
        let file_name = file_path.file_name()?.to_str()?;

        match file_name {
            "Makefile" | "makefile" | "GNUmakefile" => return Some("make"),
            "bashrc" | ".bashrc" | "zshrc" | ".zshrc" | "zshenv" | ".zshenv" => {
                return Some("shell");
            }
            _ => {}
        }

        let extension = file_path.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&extension).map(String::as_str)
    }

    pub fn detect_language_by_extension(&self, extension: &str) -> Option<&LanguageConfig> {
        let normalized_ext = extension.trim_start_matches('.').to_lowercase();
        let language_name = self.extension_map.get(&normalized_ext)?;
        self.languages.get(language_name).map(Arc::as_ref)
    }

    /// Every extension the registry will accept, sorted for stable output.
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.extension_map.keys().cloned().collect();
        extensions.sort();
        extensions
    }
}
