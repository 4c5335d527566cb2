use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{what} path is empty")]
    EmptyPath { what: &'static str },

    #[error("{what} not found or not a file: {}", path.display())]
    FileNotFound { what: &'static str, path: PathBuf },

    #[error("{what} not found or not a directory: {}", path.display())]
    DirectoryNotFound { what: &'static str, path: PathBuf },

    #[error("Failed to resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Output folder {} is inside the loose archive folder {}",
        output.display(),
        archive.display()
    )]
    OutputInsideArchive { output: PathBuf, archive: PathBuf },

    #[error("Failed to read profile {}: {source}", path.display())]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile {}: {source}", path.display())]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
