use std::path::{Path, PathBuf};

/// Ordered path history from the storage root to the open directory.
///
/// The last element is the directory currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationStack {
    paths: Vec<PathBuf>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` as the new current directory.
    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Removes and returns the current directory.
    pub fn pop(&mut self) -> Option<PathBuf> {
        self.paths.pop()
    }

    /// Returns the directory currently shown, if any was opened.
    pub fn current(&self) -> Option<&Path> {
        self.paths.last().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
