mod entry;
mod error;
mod key;
mod loose;
mod memory;
mod pak;


pub use entry::CatalogEntry;
pub(crate) use entry::EntryHandle;
pub use error::CatalogError;
pub use key::parse_aes_key;
pub use loose::LooseCatalog;
pub use memory::{MemoryCatalog, MemoryCatalogBuilder};
pub use pak::PakCatalog;

use crate::config::CatalogKind;
use std::path::Path;

/// Read access to the files of an opened asset archive
pub trait AssetProvider {
    /// All entries, in enumeration order
    fn entries(&self) -> &[CatalogEntry];

    /// Materialize an entry's raw bytes
    fn read(&self, entry: &CatalogEntry) -> Result<Vec<u8>, CatalogError>;

    fn file_count(&self) -> usize {
        self.entries().len()
    }
}

/// Open the archive directory with the provider matching `kind`.
///
/// The key is only used by encrypted containers.
pub fn open_catalog(
    kind: CatalogKind,
    dir: &Path,
    aes_key: &str,
) -> Result<Box<dyn AssetProvider>, CatalogError> {
    Ok(match kind {
        CatalogKind::Pak => Box::new(PakCatalog::open(dir, aes_key)?),
        CatalogKind::Loose => Box::new(LooseCatalog::open(dir)?),
    })
}
