use super::{AssetProvider, CatalogEntry, CatalogError, EntryHandle};
use crate::security::PathSanitizer;

/// Immutable in-memory catalog with arena-backed file storage
pub struct MemoryCatalog {
    /// Single contiguous blob containing all file data
    arena: Vec<u8>,
    /// Entries in insertion order
    entries: Vec<CatalogEntry>,
}

/// Mutable builder for constructing a memory catalog
#[derive(Default)]
pub struct MemoryCatalogBuilder {
    arena: Vec<u8>,
    entries: Vec<CatalogEntry>,
}

impl MemoryCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file to the arena
    pub fn add_file(&mut self, raw_path: &str, data: &[u8]) -> Result<(), CatalogError> {
        let virtual_path = PathSanitizer::sanitize(raw_path)?;

        let offset = self.arena.len();
        self.arena.extend_from_slice(data);

        self.entries.push(CatalogEntry {
            virtual_path,
            handle: EntryHandle::Arena {
                offset,
                length: data.len(),
            },
        });

        Ok(())
    }

    /// Chaining form of [`add_file`](Self::add_file)
    pub fn with_file(mut self, raw_path: &str, data: &[u8]) -> Result<Self, CatalogError> {
        self.add_file(raw_path, data)?;
        Ok(self)
    }

    pub fn build(self) -> MemoryCatalog {
        MemoryCatalog {
            arena: self.arena,
            entries: self.entries,
        }
    }
}

impl AssetProvider for MemoryCatalog {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn read(&self, entry: &CatalogEntry) -> Result<Vec<u8>, CatalogError> {
        match entry.handle {
            EntryHandle::Arena { offset, length } if offset + length <= self.arena.len() => {
                Ok(self.arena[offset..offset + length].to_vec())
            }
            _ => Err(CatalogError::ForeignEntry(entry.virtual_path.clone())),
        }
    }
}
