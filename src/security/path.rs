use crate::catalog::CatalogError;
use std::path::{Component, Path, PathBuf};

pub struct PathSanitizer;

impl PathSanitizer {
    /// Normalize a virtual path taken from an asset container.
    ///
    /// Rejects:
    /// - Directory traversal (../)
    /// - Absolute paths (/Game, C:\)
    /// - Paths with no usable components
    ///
    /// Backslashes are treated as separators. Returns the components joined
    /// with forward slashes.
    pub fn sanitize(raw_path: &str) -> Result<String, CatalogError> {
        if raw_path.is_empty() {
            return Err(CatalogError::InvalidPath("Empty path".to_string()));
        }

        let unified = raw_path.replace('\\', "/");
        let mut components = Vec::new();

        if unified.starts_with('/') {
            return Err(CatalogError::InvalidPath(format!(
                "Absolute path not allowed: {}",
                raw_path
            )));
        }

        for component in Path::new(&unified).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(CatalogError::InvalidPath(format!(
                        "Absolute path not allowed: {}",
                        raw_path
                    )));
                }
                Component::ParentDir => {
                    return Err(CatalogError::InvalidPath(format!(
                        "Parent directory traversal not allowed: {}",
                        raw_path
                    )));
                }
                Component::CurDir => continue,
                Component::Normal(part) => {
                    let part_str = part.to_str().ok_or_else(|| {
                        CatalogError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", part))
                    })?;
                    // Drive letters survive `components()` on non-Windows hosts
                    if part_str.ends_with(':') {
                        return Err(CatalogError::InvalidPath(format!(
                            "Absolute path not allowed: {}",
                            raw_path
                        )));
                    }
                    components.push(part_str);
                }
            }
        }

        if components.is_empty() {
            return Err(CatalogError::InvalidPath(format!(
                "No valid components: {}",
                raw_path
            )));
        }

        Ok(components.join("/"))
    }

    /// Map a virtual path onto the host filesystem below `root`
    pub fn host_path(root: &Path, raw_path: &str) -> Result<PathBuf, CatalogError> {
        let virtual_path = Self::sanitize(raw_path)?;
        Ok(virtual_path
            .split('/')
            .fold(root.to_path_buf(), |path, part| path.join(part)))
    }
}
