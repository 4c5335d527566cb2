mod error;
mod process;


pub use error::DecompileError;
pub use process::ExternalDecompiler;

use std::path::{Path, PathBuf};

/// Suffix the compiler appends to the stem of an unwrapped asset
pub const UNWRAPPED_SUFFIX: &str = "_unwrapped";

/// What happens to the compiler's stdout/stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Child writes straight to this console
    #[default]
    Inherit,
    /// Child output is collected and echoed after it exits
    Capture,
}

/// Turns a message-script binary on disk into text next to it
pub trait Decompile {
    /// Decompile `input`, blocking until the tool exits.
    ///
    /// `Ok` only means the tool ran; whether it produced anything is
    /// checked through [`DecompileOutputs`].
    fn decompile(&self, input: &Path) -> Result<(), DecompileError>;
}

/// Files the compiler leaves next to its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompileOutputs {
    /// `<stem>_unwrapped.bmd.msg`, the decompiled text
    pub text: PathBuf,
    /// `<stem>_unwrapped.bmd`, the unwrapped binary
    pub binary: PathBuf,
    /// `<stem>_unwrapped.bmd.msg.h`, the generated header
    pub header: PathBuf,
}

impl DecompileOutputs {
    pub fn for_input(input: &Path) -> Self {
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sibling = |ext: &str| dir.join(format!("{}{}{}", stem, UNWRAPPED_SUFFIX, ext));

        Self {
            text: sibling(".bmd.msg"),
            binary: sibling(".bmd"),
            header: sibling(".bmd.msg.h"),
        }
    }

    pub fn paths(&self) -> [&Path; 3] {
        [
            self.text.as_path(),
            self.binary.as_path(),
            self.header.as_path(),
        ]
    }
}
