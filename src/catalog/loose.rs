use super::{AssetProvider, CatalogEntry, CatalogError, EntryHandle};
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Catalog over an already unpacked asset tree
pub struct LooseCatalog {
    entries: Vec<CatalogEntry>,
}

impl LooseCatalog {
    /// Index every regular file below `dir`, in sorted walk order
    pub fn open(dir: &Path) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();

        for dir_entry in WalkDir::new(dir).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(|source| CatalogError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            if !dir_entry.file_type().is_file() {
                continue;
            }

            let relative = dir_entry.path().strip_prefix(dir).unwrap_or(dir_entry.path());
            let parts: Option<Vec<&str>> = relative.iter().map(|part| part.to_str()).collect();
            let Some(parts) = parts else {
                warn!("Skipping non UTF-8 path {}", dir_entry.path().display());
                continue;
            };

            entries.push(CatalogEntry {
                virtual_path: parts.join("/"),
                handle: EntryHandle::Loose(dir_entry.into_path()),
            });
        }

        info!("Indexed {} loose files in {}", entries.len(), dir.display());
        Ok(Self { entries })
    }
}

impl AssetProvider for LooseCatalog {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn read(&self, entry: &CatalogEntry) -> Result<Vec<u8>, CatalogError> {
        let EntryHandle::Loose(path) = &entry.handle else {
            return Err(CatalogError::ForeignEntry(entry.virtual_path.clone()));
        };
        std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })
    }
}
