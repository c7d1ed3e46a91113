//! Checklist document store implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use ticklist_core::{Error, Result};

/// A checklist visible in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    /// Checklist name (filename minus the `.json` extension).
    pub name: String,
    /// On-disk filename.
    pub filename: String,
}

/// On-disk store for checklist documents.
///
/// Documents are opaque [`serde_json::Value`]s; the store neither
/// validates nor interprets their shape. Key order is preserved on
/// both read and write.
#[derive(Clone, Debug)]
pub struct ChecklistStore {
    root: PathBuf,
}

impl ChecklistStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate every checklist in the store, sorted by name.
    ///
    /// A missing root directory is an empty catalog, never an error.
    pub fn list(&self) -> Result<Vec<ChecklistEntry>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut checklists = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let (Some(stem), Some(file_name)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.file_name().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            checklists.push(ChecklistEntry {
                name: stem.to_string(),
                filename: file_name.to_string(),
            });
        }

        checklists.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(checklists)
    }

    /// Load the document stored under `name`, exactly as saved.
    pub fn get(&self, name: &str) -> Result<serde_json::Value> {
        let path = self.safe_path(name)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ChecklistNotFound {
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Overwrite (or create) the document stored under `name`.
    ///
    /// The write goes to a temporary file in the same directory and is
    /// renamed into place, so concurrent saves resolve last-writer-wins
    /// with no interleaved bytes.
    pub fn save(&self, name: &str, document: &serde_json::Value) -> Result<()> {
        let path = self.safe_path(name)?;
        let dir = path.parent().ok_or_else(|| Error::invalid_name(name))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&serde_json::to_vec_pretty(document)?)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!(checklist = name, path = %path.display(), "checklist saved");
        Ok(())
    }

    /// Resolve `name` to a path confined inside the store root.
    ///
    /// The candidate path is canonicalized and its resolved form must
    /// remain strictly inside the canonicalized root. Any resolution
    /// failure (dangling traversal, permission fault) is reported as
    /// an invalid name rather than surfaced raw.
    fn safe_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(Error::invalid_name(name));
        }

        let root = self
            .root
            .canonicalize()
            .map_err(|_| Error::invalid_name(name))?;
        let candidate = self.root.join(format!("{name}.json"));

        // The file may not exist yet, so canonicalize the parent and
        // re-attach the final component.
        let resolved = if candidate.exists() {
            candidate.canonicalize()
        } else {
            let parent = candidate.parent().ok_or_else(|| Error::invalid_name(name))?;
            let file_name = candidate
                .file_name()
                .ok_or_else(|| Error::invalid_name(name))?
                .to_os_string();
            parent.canonicalize().map(|p| p.join(file_name))
        }
        .map_err(|_| Error::invalid_name(name))?;

        if resolved.starts_with(&root) && resolved != root {
            Ok(resolved)
        } else {
            Err(Error::invalid_name(name))
        }
    }
}
