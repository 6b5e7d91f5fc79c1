use anyhow::{Context, Result};
use marginalia::cli::{Cli, collect_files, parse_args};
use marginalia::config::Config;
use marginalia::languages::registry::LanguageRegistry;
use marginalia::output::generator::plan_pages;
use marginalia::processor::{OutputWriter, Processor};
use marginalia::render::assets;
use marginalia::utils::path::expand_paths;
use rayon::prelude::*;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args();

    let config = load_config(&args)?;
    let mut registry = LanguageRegistry::new();
    config.apply_to_registry(&mut registry);
    let processor = Processor::with_registry(registry);

    let options = config.resolve_options(&args);

    if options.verbose {
        println!(
            "Supported extensions: {}",
            processor.registry().supported_extensions().join(", ")
        );
    }

    let sources = gather_sources(&args, processor.registry())?;
    if sources.is_empty() {
        eprintln!("No documentable files found matching the provided paths.");
        return Ok(());
    }

    let entries = plan_pages(&sources);
    println!("Documenting {} file(s)...", entries.len());
    if options.dry_run {
        println!("Dry run mode - no files will be written");
    }

    let jobs = args.jobs.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build worker pool")?;

    let results: Vec<_> = pool.install(|| {
        entries
            .par_iter()
            .map(|entry| processor.process_file(entry, &options, &entries))
            .collect()
    });

    let writer = OutputWriter::new(options.dry_run, options.verbose);
    let mut failed = 0usize;
    for (entry, result) in entries.iter().zip(results) {
        match result {
            Ok(page) => writer.write_page(&page, &options.output_dir)?,
            Err(err) => {
                eprintln!("Error processing {}: {err:#}", entry.source.display());
                failed += 1;
            }
        }
    }

    let index_html = processor.render_index(&options, &entries);
    writer.write_index(&index_html, &options.output_dir)?;
    if !options.dry_run {
        assets::write_stylesheet(&options.output_dir)?;
    }

    writer.print_summary(entries.len(), failed);

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// `--config` wins; otherwise the config file is discovered in the target
/// directory (the first positional path that is one, falling back to the
/// current directory).
fn load_config(args: &Cli) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path),
        None => {
            let target = args
                .paths
                .iter()
                .map(PathBuf::from)
                .find(|path| path.is_dir())
                .unwrap_or_else(|| PathBuf::from("."));
            Ok(Config::discover(&target)?.unwrap_or_default())
        }
    }
}

/// Expands the positional arguments (globs expand directly, plain paths walk
/// with gitignore rules) and keeps only files the registry recognizes.
fn gather_sources(args: &Cli, registry: &LanguageRegistry) -> Result<Vec<PathBuf>> {
    let raw: Vec<String> = if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths.clone()
    };

    let mut candidates = Vec::new();
    for pattern in &raw {
        let is_glob = pattern.contains('*') || pattern.contains('?') || pattern.contains('[');
        if is_glob {
            candidates.extend(expand_paths(std::slice::from_ref(pattern))?);
        } else {
            candidates.extend(collect_files(
                &[PathBuf::from(pattern)],
                !args.no_gitignore,
            ));
        }
    }

    candidates.sort();
    candidates.dedup();

    let (known, skipped): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|path| registry.detect_language(path).is_some());

    if args.verbose {
        for path in &skipped {
            eprintln!("Skipping (no language rule): {}", path.display());
        }
    }

    Ok(known)
}
