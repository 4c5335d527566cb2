use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid AES key: {0}")]
    InvalidKey(String),

    #[error("No .pak containers found in {}", .0.display())]
    NoContainers(PathBuf),

    #[error(
        "{} only holds IoStore containers (.utoc/.ucas); unpack them (e.g. with retoc or FModel) and rerun with --loose",
        .0.display()
    )]
    IoStoreOnly(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to open container {}: {source}", path.display())]
    Container {
        path: PathBuf,
        #[source]
        source: repak::Error,
    },

    #[error("Failed to extract {path}: {source}")]
    Extract {
        path: String,
        #[source]
        source: repak::Error,
    },

    #[error("Invalid path in archive: {0}")]
    InvalidPath(String),

    #[error("Entry does not belong to this catalog: {0}")]
    ForeignEntry(String),
}
