// Public API exports
pub mod catalog;
pub mod cli;
pub mod config;
pub mod decompiler;
pub mod dump;
pub mod extract;
pub mod filter;
pub mod menu;
pub mod pipeline;
pub mod security;
pub mod session;

// Re-export main types for convenience
pub use catalog::{AssetProvider, CatalogEntry, CatalogError, open_catalog};
pub use security::PathSanitizer;

pub use config::{CatalogKind, ConfigError, DumperConfig, GameProfile};

pub use decompiler::{Decompile, DecompileError, ExternalDecompiler, OutputMode};

pub use dump::{DumpBuffer, DumpError};

pub use extract::{EntryOutcome, ExtractSummary, Extractor};

pub use filter::LanguageFilter;

pub use pipeline::RunReport;
