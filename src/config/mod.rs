mod error;
mod profile;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use profile::{DecompilerFlags, GameProfile};

use crate::decompiler::OutputMode;
use std::path::{Path, PathBuf};

pub const COMPILER: &str = "Compiler";
pub const ARCHIVE_DIR: &str = "Archive folder";
pub const OUTPUT_DIR: &str = "Output folder";

/// How the archive directory is read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogKind {
    /// Encrypted `.pak` containers at the top of the directory
    #[default]
    Pak,
    /// An already unpacked directory tree
    Loose,
}

/// Validated settings for one extraction run
#[derive(Debug, Clone)]
pub struct DumperConfig {
    pub compiler_path: PathBuf,
    pub archive_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Normalized language code, `None` for the default language
    pub language: Option<String>,
    pub catalog_kind: CatalogKind,
    pub output_mode: OutputMode,
    /// Program the compiler is run through (e.g. `wine`)
    pub launcher: Option<PathBuf>,
    pub profile: GameProfile,
}

impl DumperConfig {
    /// Validate the three required paths in order and build a config.
    ///
    /// The first invalid path is reported.
    pub fn new(
        compiler_path: impl Into<PathBuf>,
        archive_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let compiler_path = compiler_path.into();
        let archive_dir = archive_dir.into();
        let output_dir = output_dir.into();

        validate_file(COMPILER, &compiler_path)?;
        validate_dir(ARCHIVE_DIR, &archive_dir)?;
        validate_dir(OUTPUT_DIR, &output_dir)?;

        Ok(Self {
            compiler_path,
            archive_dir,
            output_dir,
            language: None,
            catalog_kind: CatalogKind::default(),
            output_mode: OutputMode::default(),
            launcher: None,
            profile: GameProfile::default(),
        })
    }

    pub fn language(mut self, code: Option<&str>) -> Self {
        self.language = normalize_language(code);
        self
    }

    pub fn catalog_kind(mut self, kind: CatalogKind) -> Self {
        self.catalog_kind = kind;
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn launcher(mut self, launcher: Option<PathBuf>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn profile(mut self, profile: GameProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Reject an output folder equal to or nested in a loose archive tree.
    ///
    /// Extracted files and compiler outputs are written and removed below
    /// the output folder, so it must never overlap the source assets.
    pub fn check_output_location(&self) -> Result<(), ConfigError> {
        if self.catalog_kind != CatalogKind::Loose {
            return Ok(());
        }

        let resolve = |path: &Path| {
            path.canonicalize().map_err(|source| ConfigError::Resolve {
                path: path.to_path_buf(),
                source,
            })
        };
        let archive = resolve(&self.archive_dir)?;
        let output = resolve(&self.output_dir)?;

        if output.starts_with(&archive) {
            return Err(ConfigError::OutputInsideArchive { output, archive });
        }
        Ok(())
    }
}

/// Require `path` to name an existing regular file
pub fn validate_file(what: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { what });
    }
    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            what,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Require `path` to name an existing directory
pub fn validate_dir(what: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { what });
    }
    if !path.is_dir() {
        return Err(ConfigError::DirectoryNotFound {
            what,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Trim and lowercase a language code. Blank means the default language.
pub fn normalize_language(code: Option<&str>) -> Option<String> {
    code.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
}
