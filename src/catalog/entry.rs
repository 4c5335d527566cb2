use std::path::PathBuf;

/// A single file inside an asset catalog
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Normalized virtual path (e.g., "P3R/Content/Xrd777/BMD_Test.uasset")
    pub virtual_path: String,
    pub(crate) handle: EntryHandle,
}

/// Provider-specific location of an entry's bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryHandle {
    Pak { container: usize, name: String },
    Loose(PathBuf),
    Arena { offset: usize, length: usize },
}

impl CatalogEntry {
    /// Final path segment
    pub fn file_name(&self) -> &str {
        self.virtual_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.virtual_path)
    }
}
