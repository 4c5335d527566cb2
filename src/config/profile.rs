use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Title-specific constants for one game's message assets.
///
/// The default is Persona 3 Reload. Any field missing from a profile file
/// falls back to that default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameProfile {
    /// Display name, only used in log output
    pub name: String,
    /// AES-256 key for the pak containers, hex with optional `0x` prefix
    pub aes_key: String,
    /// Path marker that every default-language asset contains
    pub default_include_marker: String,
    /// Path marker that excludes an asset from the default language
    pub default_exclude_marker: String,
    /// Root folder of the per-language folders (`<root>/<code>`)
    pub localization_root: String,
    /// File name prefix of message-script binaries
    pub file_prefix: String,
    /// Name of the dump written into the output directory
    pub dump_file_name: String,
    /// Text written at the top of the dump
    pub dump_header: String,
    pub decompiler: DecompilerFlags,
}

/// Format flags handed to the external compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompilerFlags {
    pub in_format: String,
    pub library: String,
    pub encoding: String,
    pub out_format: String,
}

impl Default for GameProfile {
    fn default() -> Self {
        Self {
            name: "Persona 3 Reload".to_string(),
            aes_key: "0x92BADFE2921B376069D3DE8541696D230BA06B5E4320084DD34A26D117D2FFEE"
                .to_string(),
            default_include_marker: "Xrd777".to_string(),
            default_exclude_marker: "L10N".to_string(),
            localization_root: "L10N".to_string(),
            file_prefix: "BMD".to_string(),
            dump_file_name: "P3RMessageDump.txt".to_string(),
            dump_header: "P3R Message DUMP:\n\n".to_string(),
            decompiler: DecompilerFlags::default(),
        }
    }
}

impl Default for DecompilerFlags {
    fn default() -> Self {
        Self {
            in_format: "MessageScriptBinary".to_string(),
            library: "P3RE".to_string(),
            encoding: "UTF-8".to_string(),
            out_format: "V1RE".to_string(),
        }
    }
}

impl GameProfile {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text).map_err(|source| ConfigError::ProfileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
