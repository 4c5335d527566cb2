use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecompileError {
    #[error("Failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
