// Marginalia - a literate-programming documentation generator
// Re-export public modules and types

pub mod cli;
pub mod config;
pub mod languages;
pub mod models;
pub mod output;
pub mod processor;
pub mod render;
pub mod segment;
pub mod utils;

// Re-export main types for convenience
pub use languages::config::LanguageConfig;
pub use languages::registry::LanguageRegistry;
pub use models::options::ProcessOptions;
pub use models::section::Section;
pub use output::generator::PageEntry;
pub use processor::{GeneratedPage, Processor};
pub use segment::classifier::{ClassifierState, LineKind, classify};
pub use segment::segmenter::segment;
pub use utils::path::expand_paths;
