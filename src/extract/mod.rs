mod error;


pub use error::ExtractError;

use crate::catalog::{AssetProvider, CatalogEntry};
use crate::decompiler::{Decompile, DecompileOutputs};
use crate::dump::DumpBuffer;
use crate::security::PathSanitizer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Result of pushing one catalog entry through the decompiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Text was produced
    Collected { relative_path: String, text: String },
    /// The compiler ran but left no text behind
    Skipped { reason: String },
    /// Extraction or the compiler run itself failed
    Failed { reason: String },
}

/// Tally of a finished extraction loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub collected: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ExtractSummary {
    pub fn total(&self) -> usize {
        self.collected + self.skipped + self.failed
    }
}

/// Extracts entries into the output folder and decompiles them one by one
pub struct Extractor<'a> {
    catalog: &'a dyn AssetProvider,
    decompiler: &'a dyn Decompile,
    output_dir: &'a Path,
}

impl<'a> Extractor<'a> {
    pub fn new(
        catalog: &'a dyn AssetProvider,
        decompiler: &'a dyn Decompile,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            catalog,
            decompiler,
            output_dir,
        }
    }

    /// Process every entry in order, appending collected text to `dump`.
    ///
    /// A failing entry is logged and never stops the loop.
    pub fn run(&self, entries: &[&CatalogEntry], dump: &mut DumpBuffer) -> ExtractSummary {
        let mut summary = ExtractSummary::default();

        for (i, entry) in entries.iter().enumerate() {
            info!(
                "[{}/{}] Processing: {}",
                i + 1,
                entries.len(),
                entry.virtual_path
            );

            match self.process_entry(entry) {
                EntryOutcome::Collected {
                    relative_path,
                    text,
                } => {
                    dump.push(relative_path, text);
                    summary.collected += 1;
                }
                EntryOutcome::Skipped { reason } => {
                    warn!("{}", reason);
                    summary.skipped += 1;
                }
                EntryOutcome::Failed { reason } => {
                    error!("Failed to extract {}: {}", entry.virtual_path, reason);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Extract, decompile and collect a single entry.
    ///
    /// The extracted file and all compiler outputs are removed afterwards,
    /// whatever the outcome.
    pub fn process_entry(&self, entry: &CatalogEntry) -> EntryOutcome {
        let save_path = match self.save_path(entry) {
            Ok(path) => path,
            Err(e) => {
                return EntryOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        let outputs = DecompileOutputs::for_input(&save_path);

        // Decompile and classify
        let outcome = match self.extract_and_decompile(entry, &save_path, &outputs) {
            Ok(Some(text)) => EntryOutcome::Collected {
                relative_path: self.relative_path(&save_path),
                text,
            },
            Ok(None) => EntryOutcome::Skipped {
                reason: format!("Decompiled file not found: {}", outputs.text.display()),
            },
            Err(e) => EntryOutcome::Failed {
                reason: e.to_string(),
            },
        };

        // Always remove the temporary files
        cleanup(&save_path, &outputs);
        outcome
    }

    /// Host path the entry is written to, rooted at the output folder
    pub fn save_path(&self, entry: &CatalogEntry) -> Result<PathBuf, ExtractError> {
        Ok(PathSanitizer::host_path(
            self.output_dir,
            &entry.virtual_path,
        )?)
    }

    fn extract_and_decompile(
        &self,
        entry: &CatalogEntry,
        save_path: &Path,
        outputs: &DecompileOutputs,
    ) -> Result<Option<String>, ExtractError> {
        // Materialize the asset on disk
        let bytes = self.catalog.read(entry)?;

        if let Some(parent) = save_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(save_path, bytes).map_err(|source| ExtractError::Write {
            path: save_path.to_path_buf(),
            source,
        })?;

        // Leftovers from an interrupted run must not be mistaken for output
        remove_outputs(outputs);
        self.decompiler.decompile(save_path)?;

        // Collect the text
        if !outputs.text.is_file() {
            return Ok(None);
        }

        let raw = fs::read(&outputs.text).map_err(|source| ExtractError::ReadOutput {
            path: outputs.text.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&raw);
        Ok(Some(text.trim_start_matches('\u{feff}').to_string()))
    }

    fn relative_path(&self, save_path: &Path) -> String {
        save_path
            .strip_prefix(self.output_dir)
            .unwrap_or(save_path)
            .display()
            .to_string()
    }
}

fn remove_outputs(outputs: &DecompileOutputs) {
    for path in outputs.paths() {
        let _ = fs::remove_file(path);
    }
}

fn cleanup(save_path: &Path, outputs: &DecompileOutputs) {
    let _ = fs::remove_file(save_path);
    remove_outputs(outputs);
}
