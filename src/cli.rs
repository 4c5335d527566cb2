use crate::config::{CatalogKind, ConfigError, DumperConfig, GameProfile};
use crate::decompiler::OutputMode;
use crate::session::{SessionOptions, SessionState};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Dump Persona 3 Reload message scripts into a single text file",
    after_help = "Run without arguments to configure the paths from an interactive menu."
)]
pub struct Cli {
    /// Path to AtlusScriptCompiler.exe
    #[arg(value_name = "COMPILER")]
    pub compiler: Option<PathBuf>,

    /// The game's Paks folder
    #[arg(value_name = "ARCHIVE_DIR")]
    pub archive_dir: Option<PathBuf>,

    /// Folder the dump (and temporary files) are written to
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Language code such as `en`; omit for the default (Japanese) assets
    #[arg(value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// JSON game profile overriding the built-in Persona 3 Reload one
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Treat ARCHIVE_DIR as an already unpacked asset tree
    #[arg(long)]
    pub loose: bool,

    /// Capture the compiler's output and echo it after each file
    #[arg(long)]
    pub capture_output: bool,

    /// Run the compiler through this program (e.g. `wine` or `dotnet`)
    #[arg(long, value_name = "PROGRAM")]
    pub launcher: Option<PathBuf>,
}

/// How the tool was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// All three paths given on the command line
    Batch,
    /// Paths come from the interactive menu
    Interactive,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.compiler.is_some() && self.archive_dir.is_some() && self.output_dir.is_some() {
            Mode::Batch
        } else {
            Mode::Interactive
        }
    }

    pub fn load_profile(&self) -> Result<GameProfile, ConfigError> {
        match &self.profile {
            Some(path) => GameProfile::load(path),
            None => Ok(GameProfile::default()),
        }
    }

    fn catalog_kind(&self) -> CatalogKind {
        if self.loose {
            CatalogKind::Loose
        } else {
            CatalogKind::Pak
        }
    }

    /// Validated config for batch mode. The first bad path is an error.
    pub fn batch_config(&self, profile: GameProfile) -> Result<DumperConfig, ConfigError> {
        let empty = PathBuf::new();
        let config = DumperConfig::new(
            self.compiler.as_ref().unwrap_or(&empty),
            self.archive_dir.as_ref().unwrap_or(&empty),
            self.output_dir.as_ref().unwrap_or(&empty),
        )?;

        let output_mode = if self.capture_output {
            OutputMode::Capture
        } else {
            OutputMode::Inherit
        };

        let config = config
            .language(self.language.as_deref())
            .catalog_kind(self.catalog_kind())
            .output_mode(output_mode)
            .launcher(self.launcher.clone())
            .profile(profile);
        config.check_output_location()?;
        Ok(config)
    }

    /// Menu settings, pre-filled with any paths given on the command line
    pub fn session_options(&self, profile: GameProfile) -> SessionOptions {
        SessionOptions {
            profile,
            catalog_kind: self.catalog_kind(),
            launcher: self.launcher.clone(),
            initial: SessionState {
                compiler_path: self.compiler.clone(),
                archive_dir: self.archive_dir.clone(),
                output_dir: self.output_dir.clone(),
                language: crate::config::normalize_language(self.language.as_deref()),
            },
        }
    }
}
