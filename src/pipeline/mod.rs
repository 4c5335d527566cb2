
use crate::catalog::{open_catalog, AssetProvider};
use crate::config::DumperConfig;
use crate::decompiler::{Decompile, ExternalDecompiler};
use crate::dump::DumpBuffer;
use crate::extract::{ExtractSummary, Extractor};
use crate::filter::LanguageFilter;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a complete extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Entries that passed the language filter
    pub matched: usize,
    pub summary: ExtractSummary,
    pub dump_path: PathBuf,
}

/// Open the archive, decompile every matching message file, write the dump
pub fn run(config: &DumperConfig) -> Result<RunReport> {
    info!(
        "Using folder: {} ({})",
        config.archive_dir.display(),
        config.profile.name
    );

    let catalog = open_catalog(
        config.catalog_kind,
        &config.archive_dir,
        &config.profile.aes_key,
    )
    .with_context(|| {
        format!(
            "Failed to open archive folder {}",
            config.archive_dir.display()
        )
    })?;

    let decompiler =
        ExternalDecompiler::new(&config.compiler_path, config.profile.decompiler.clone())
            .launcher(config.launcher.clone())
            .output_mode(config.output_mode);

    run_with(config, catalog.as_ref(), &decompiler)
}

/// Same as [`run`] with the catalog and decompiler supplied by the caller
pub fn run_with(
    config: &DumperConfig,
    catalog: &dyn AssetProvider,
    decompiler: &dyn Decompile,
) -> Result<RunReport> {
    config
        .check_output_location()
        .context("Refusing to extract into the archive folder")?;

    // Select message scripts for the requested language
    let filter = LanguageFilter::new(&config.profile, config.language.as_deref());
    let matched = filter.apply(catalog.entries());
    info!(
        "Found {} matching files out of {} ({}).",
        matched.len(),
        catalog.file_count(),
        if filter.is_default_language() {
            "default language"
        } else {
            config.language.as_deref().unwrap_or_default()
        }
    );

    // Extract and decompile one by one
    let mut dump = DumpBuffer::new(config.profile.dump_header.clone());
    let summary = Extractor::new(catalog, decompiler, &config.output_dir).run(&matched, &mut dump);
    if dump.is_empty() {
        warn!("No message text was collected, the dump only holds the header");
    }

    // Write the dump once
    let dump_path = dump
        .write_to(&config.output_dir, &config.profile.dump_file_name)
        .context("Failed to write message dump")?;

    info!(
        "Done: {} processed, {} dumped, {} skipped, {} failed",
        summary.total(),
        summary.collected,
        summary.skipped,
        summary.failed
    );

    Ok(RunReport {
        matched: matched.len(),
        summary,
        dump_path,
    })
}
