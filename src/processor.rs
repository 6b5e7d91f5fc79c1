use crate::languages::registry::LanguageRegistry;
use crate::models::options::ProcessOptions;
use crate::output::generator::{self, PageEntry};
use crate::render::html::{self, NavEntry};
use crate::segment::segmenter::segment;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Per-file pipeline: read, look up the language, segment, render, assemble
/// the page. Holds no per-file state, so one instance is shared read-only
/// across the worker pool.
pub struct Processor {
    registry: LanguageRegistry,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self {
            registry: LanguageRegistry::new(),
        }
    }

    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Generates the page for one source file. Callers pre-filter to known
    /// extensions; hitting an unknown one here is still reported as an error
    /// rather than a panic.
    pub fn process_file(
        &self,
        entry: &PageEntry,
        options: &ProcessOptions,
        manifest: &[PageEntry],
    ) -> Result<GeneratedPage> {
        let content = fs::read_to_string(&entry.source)
            .with_context(|| format!("Failed to read file: {}", entry.source.display()))?;

        let config = self
            .registry
            .detect_language(&entry.source)
            .with_context(|| format!("Unsupported file type: {}", entry.source.display()))?;

        let sections = segment(config, content.lines());
        let rendered = html::render_sections(&sections, &config.name);

        let root = generator::path_to_root(&entry.dest_rel);
        let nav = nav_entries(manifest);
        let title = page_title(&entry.source, options);
        let page_html = html::render_page(&title, &rendered, &nav, &root);

        Ok(GeneratedPage {
            entry: entry.clone(),
            sections: sections.len(),
            html: page_html,
        })
    }

    /// Renders the navigation index over the whole manifest.
    pub fn render_index(&self, options: &ProcessOptions, manifest: &[PageEntry]) -> String {
        let title = options.title.as_deref().unwrap_or("Documentation");
        html::render_index(title, &nav_entries(manifest))
    }
}

fn page_title(source: &Path, options: &ProcessOptions) -> String {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    match &options.title {
        Some(title) => format!("{name} - {title}"),
        None => name,
    }
}

fn nav_entries(manifest: &[PageEntry]) -> Vec<NavEntry> {
    manifest
        .iter()
        .map(|page| NavEntry {
            label: page.source.display().to_string(),
            href: generator::href(&page.dest_rel),
        })
        .collect()
}

/// A fully rendered page, ready to be written.
#[derive(Debug)]
pub struct GeneratedPage {
    pub entry: PageEntry,
    pub sections: usize,
    pub html: String,
}

/// Writes generated pages to disk, or narrates what it would do under
/// `--dry-run`.
pub struct OutputWriter {
    dry_run: bool,
    verbose: bool,
}

impl OutputWriter {
    pub fn new(dry_run: bool, verbose: bool) -> Self {
        Self { dry_run, verbose }
    }

    pub fn write_page(&self, page: &GeneratedPage, output_dir: &Path) -> Result<()> {
        let destination = output_dir.join(&page.entry.dest_rel);

        if self.dry_run {
            println!(
                "[DRY RUN] Would write: {} ({} section(s))",
                destination.display(),
                page.sections
            );
            return Ok(());
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }

        fs::write(&destination, &page.html)
            .with_context(|| format!("Failed to write page: {}", destination.display()))?;

        if self.verbose {
            println!(
                "{} -> {} ({} section(s))",
                page.entry.source.display(),
                destination.display(),
                page.sections
            );
        }

        Ok(())
    }

    pub fn write_index(&self, index_html: &str, output_dir: &Path) -> Result<()> {
        let destination = output_dir.join("index.html");

        if self.dry_run {
            println!("[DRY RUN] Would write: {}", destination.display());
            return Ok(());
        }

        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;
        fs::write(&destination, index_html)
            .with_context(|| format!("Failed to write index: {}", destination.display()))?;
        Ok(())
    }

    pub fn print_summary(&self, total_files: usize, failed_files: usize) {
        let prefix = if self.dry_run { "[DRY RUN] " } else { "" };
        if failed_files == 0 {
            println!("{prefix}Summary: {total_files} file(s) documented");
        } else {
            println!(
                "{prefix}Summary: {} file(s) documented, {} failed",
                total_files - failed_files,
                failed_files
            );
        }
    }
}
