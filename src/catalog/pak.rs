use super::key::parse_aes_key;
use super::{AssetProvider, CatalogEntry, CatalogError, EntryHandle};
use crate::security::PathSanitizer;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Catalog over the encrypted `.pak` containers of a game's `Paks` folder
pub struct PakCatalog {
    containers: Vec<PakContainer>,
    entries: Vec<CatalogEntry>,
}

struct PakContainer {
    path: PathBuf,
    pak: repak::PakReader,
}

impl PakCatalog {
    /// Open every `.pak` at the top level of `dir` with the given key.
    ///
    /// Containers are mounted in file name order. When two containers
    /// provide the same path (compared case-insensitively) the later one
    /// wins but the entry keeps its first position.
    pub fn open(dir: &Path, aes_key: &str) -> Result<Self, CatalogError> {
        let key = parse_aes_key(aes_key)?;

        // Locate containers
        let container_paths = find_containers(dir, PAK_EXTENSION)?;
        let io_store = find_containers(dir, IO_STORE_EXTENSION)?;
        if container_paths.is_empty() {
            if io_store.is_empty() {
                return Err(CatalogError::NoContainers(dir.to_path_buf()));
            }
            return Err(CatalogError::IoStoreOnly(dir.to_path_buf()));
        }
        if !io_store.is_empty() {
            warn!(
                "Skipping {} IoStore containers (.utoc/.ucas) in {}; assets stored there are not listed. \
                 Unpack them (e.g. with retoc or FModel) and rerun with --loose to include them.",
                io_store.len(),
                dir.display()
            );
        }

        let mut containers = Vec::with_capacity(container_paths.len());
        let mut entries: Vec<CatalogEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (container, path) in container_paths.into_iter().enumerate() {
            // Read the container index
            let file = File::open(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            let pak = repak::PakBuilder::new()
                .key(key.clone())
                .reader(&mut BufReader::new(file))
                .map_err(|source| CatalogError::Container {
                    path: path.clone(),
                    source,
                })?;

            let mount = mount_prefix(pak.mount_point());
            let names = pak.files();
            debug!(
                "Mounted {} ({} files at '{}')",
                path.display(),
                names.len(),
                mount
            );

            // Later containers override earlier paths in place
            for name in names {
                let virtual_path = match PathSanitizer::sanitize(&format!("{}{}", mount, name)) {
                    Ok(p) => p,
                    Err(e) => {
                        warn!("Skipping entry in {}: {}", path.display(), e);
                        continue;
                    }
                };

                let entry = CatalogEntry {
                    virtual_path,
                    handle: EntryHandle::Pak { container, name },
                };

                match index.get(&entry.virtual_path.to_lowercase()) {
                    Some(&pos) => entries[pos] = entry,
                    None => {
                        index.insert(entry.virtual_path.to_lowercase(), entries.len());
                        entries.push(entry);
                    }
                }
            }

            containers.push(PakContainer { path, pak });
        }

        info!(
            "Opened {} containers with {} files",
            containers.len(),
            entries.len()
        );

        Ok(Self {
            containers,
            entries,
        })
    }
}

impl AssetProvider for PakCatalog {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn read(&self, entry: &CatalogEntry) -> Result<Vec<u8>, CatalogError> {
        let EntryHandle::Pak { container, name } = &entry.handle else {
            return Err(CatalogError::ForeignEntry(entry.virtual_path.clone()));
        };
        let container = self
            .containers
            .get(*container)
            .ok_or_else(|| CatalogError::ForeignEntry(entry.virtual_path.clone()))?;

        let file = File::open(&container.path).map_err(|source| CatalogError::Io {
            path: container.path.clone(),
            source,
        })?;

        container
            .pak
            .get(name, &mut BufReader::new(file))
            .map_err(|source| CatalogError::Extract {
                path: entry.virtual_path.clone(),
                source,
            })
    }
}

pub(crate) const PAK_EXTENSION: &str = "pak";
pub(crate) const IO_STORE_EXTENSION: &str = "utoc";

/// Files with `extension` directly inside `dir`, sorted by file name
pub(crate) fn find_containers(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for dir_entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = dir_entry.map_err(io_err)?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Turn a container mount point such as `../../../P3R/Content/` into a
/// relative prefix (`P3R/Content/`)
pub(crate) fn mount_prefix(mount_point: &str) -> String {
    let mut rest = mount_point.replace('\\', "/");
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped.to_string();
    }
    let rest = rest.trim_start_matches('/');

    if rest.is_empty() || rest.ends_with('/') {
        rest.to_string()
    } else {
        format!("{}/", rest)
    }
}
