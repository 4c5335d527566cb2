
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Failed to write dump {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One decompiled file in the dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRecord {
    /// Path of the extracted asset relative to the output folder
    pub relative_path: String,
    pub text: String,
}

/// Append-only collection of decompiled text
#[derive(Debug, Clone)]
pub struct DumpBuffer {
    header: String,
    records: Vec<DumpRecord>,
}

impl DumpBuffer {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, relative_path: impl Into<String>, text: impl Into<String>) {
        self.records.push(DumpRecord {
            relative_path: relative_path.into(),
            text: text.into(),
        });
    }

    pub fn records(&self) -> &[DumpRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header, then per record: path line, text, blank line
    pub fn render(&self) -> String {
        let body: usize = self
            .records
            .iter()
            .map(|r| r.relative_path.len() + r.text.len() + 3)
            .sum();

        let mut out = String::with_capacity(self.header.len() + body);
        out.push_str(&self.header);
        for record in &self.records {
            out.push_str(&record.relative_path);
            out.push('\n');
            out.push_str(&record.text);
            out.push('\n');
            out.push('\n');
        }
        out
    }

    /// Write the rendered dump to `dir/file_name`, replacing any old dump
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf, DumpError> {
        let path = dir.join(file_name);
        std::fs::write(&path, self.render()).map_err(|source| DumpError::Write {
            path: path.clone(),
            source,
        })?;

        info!("Dump saved to: {} ({} files)", path.display(), self.len());
        Ok(path)
    }
}
