//! In-memory line buffers for target files.
//!
//! A [`Workspace`] loads each target file once, lets rules rewrite individual
//! lines, and writes dirty files back at the end of the run. Edits made by an
//! earlier diagnostic are visible to every later diagnostic on the same file.

use crate::error::FixError;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One file's contents as an ordered list of lines.
///
/// Line terminators (`\n` or `\r\n`) are kept apart from the line body so
/// rules only ever see the body, and a rewrite keeps the original ending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    lines: Vec<(String, &'static str)>,
    dirty: bool,
}

impl SourceFile {
    /// Splits `content` into lines. A missing final newline is preserved.
    pub fn from_text(content: &str) -> Self {
        let lines = content
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(body) = raw.strip_suffix("\r\n") {
                    (body.to_string(), "\r\n")
                } else if let Some(body) = raw.strip_suffix('\n') {
                    (body.to_string(), "\n")
                } else {
                    (raw.to_string(), "")
                }
            })
            .collect();
        SourceFile {
            lines,
            dirty: false,
        }
    }

    pub fn read(path: &Path) -> Result<Self, FixError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixError::io(path, e))?;
        Ok(SourceFile::from_text(&content))
    }

    /// Body of the line at 0-based `index`, without its terminator.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|(body, _)| body.as_str())
    }

    /// Replaces the body of the line at `index`, keeping its terminator.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn replace_line(&mut self, index: usize, body: String) -> bool {
        match self.lines.get_mut(index) {
            Some(slot) => {
                if slot.0 != body {
                    slot.0 = body;
                    self.dirty = true;
                }
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Joins the lines back into file text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (body, ending) in &self.lines {
            out.push_str(body);
            out.push_str(ending);
        }
        out
    }

    /// Overwrites `path` with the rendered contents.
    ///
    /// The text is written to a temporary file in the same directory and
    /// then persisted over `path`, so a failed write never leaves a
    /// truncated file behind. `path` must not be a symlink: the rename
    /// would replace the link itself. [`Workspace`] only writes canonical
    /// paths.
    pub fn write(&self, path: &Path) -> Result<(), FixError> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FixError::io(path, e))?;
        tmp.write_all(self.render().as_bytes())
            .map_err(|e| FixError::io(path, e))?;
        if let Ok(meta) = std::fs::metadata(path) {
            // Keep the original mode; NamedTempFile is created 0600.
            if let Err(e) = std::fs::set_permissions(tmp.path(), meta.permissions()) {
                tracing::warn!(path = %path.display(), error = %e, "could not copy file mode");
            }
        }
        tmp.persist(path).map_err(|e| FixError::io(path, e.error))?;
        Ok(())
    }
}

/// The set of target files touched during one run.
#[derive(Debug, Default)]
pub struct Workspace {
    root: Option<PathBuf>,
    files: HashMap<PathBuf, SourceFile>,
    /// Resolved path to buffer key, for every file opened so far.
    keys: HashMap<PathBuf, PathBuf>,
}

impl Workspace {
    /// Creates a workspace. Relative diagnostic paths are resolved against
    /// `root` when given, otherwise against the current directory.
    pub fn new(root: Option<PathBuf>) -> Self {
        Workspace {
            root,
            files: HashMap::new(),
            keys: HashMap::new(),
        }
    }

    /// Resolves a path as reported by the linter.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Buffer key for `path`: the canonical form of the resolved path, so
    /// every spelling of a file (relative, absolute, `..`, symlink) shares
    /// one buffer. Falls back to the resolved path when the file cannot be
    /// canonicalized, in which case reading it fails anyway. A path that
    /// was already opened keeps its key even if the file later disappears.
    pub fn key(&self, path: &Path) -> PathBuf {
        let resolved = self.resolve(path);
        if let Some(key) = self.keys.get(&resolved) {
            return key.clone();
        }
        std::fs::canonicalize(&resolved).unwrap_or(resolved)
    }

    /// Returns the buffer for `path`, reading it from disk on first use.
    ///
    /// A failed read is not cached, so a later diagnostic retries.
    pub fn open(&mut self, path: &Path) -> Result<&mut SourceFile, FixError> {
        let key = self.key(path);
        if !self.files.contains_key(&key) {
            let file = SourceFile::read(&key)?;
            self.files.insert(key.clone(), file);
        }
        let resolved = self.resolve(path);
        self.keys.insert(resolved, key.clone());
        self.files
            .get_mut(&key)
            .ok_or_else(|| FixError::io(&key, std::io::ErrorKind::NotFound.into()))
    }

    /// Canonical paths of every buffer with pending edits, sorted.
    pub fn dirty_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|(_, f)| f.is_dirty())
            .map(|(p, _)| p.clone())
            .collect();
        paths.sort();
        paths
    }

    /// Writes every dirty buffer back to disk.
    ///
    /// Returns the paths written and the failures, each keyed by canonical
    /// path (see [`Workspace::key`]). One failed file does not prevent the
    /// others from being written.
    pub fn flush(&mut self) -> (Vec<PathBuf>, Vec<(PathBuf, FixError)>) {
        let mut written = Vec::new();
        let mut failed = Vec::new();
        for path in self.dirty_paths() {
            let Some(file) = self.files.get_mut(&path) else {
                continue;
            };
            match file.write(&path) {
                Ok(()) => {
                    file.dirty = false;
                    tracing::debug!(path = %path.display(), "wrote fixed file");
                    written.push(path);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to write file");
                    failed.push((path, e));
                }
            }
        }
        (written, failed)
    }
}
