
use crate::catalog::CatalogEntry;
use crate::config::GameProfile;

/// Selects the message-script binaries of one language
#[derive(Debug, Clone)]
pub struct LanguageFilter {
    /// `None` selects the default language
    localization_folder: Option<String>,
    include_marker: String,
    exclude_marker: String,
    file_prefix: String,
}

impl LanguageFilter {
    /// Build a filter for `language`. Blank codes select the default
    /// language, other codes are trimmed and lowercased.
    pub fn new(profile: &GameProfile, language: Option<&str>) -> Self {
        let localization_folder = crate::config::normalize_language(language)
            .map(|code| format!("{}/{}", profile.localization_root, code));

        Self {
            localization_folder,
            include_marker: profile.default_include_marker.clone(),
            exclude_marker: profile.default_exclude_marker.clone(),
            file_prefix: profile.file_prefix.clone(),
        }
    }

    pub fn is_default_language(&self) -> bool {
        self.localization_folder.is_none()
    }

    /// Whether a single virtual path is selected
    pub fn matches(&self, path: &str) -> bool {
        let matches_language = match &self.localization_folder {
            None => !path.contains(&self.exclude_marker) && path.contains(&self.include_marker),
            Some(folder) => path.contains(folder.as_str()),
        };

        let file_name = path.rsplit('/').next().unwrap_or(path);
        matches_language && file_name.starts_with(&self.file_prefix)
    }

    /// Selected entries, in catalog order
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        entries
            .iter()
            .filter(|entry| self.matches(&entry.virtual_path))
            .collect()
    }
}
