use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::entry::Entry;

/// Directory enumeration boundary used by the navigator.
///
/// Production uses [`LocalFileSystem`], while tests inject
/// `MockFileSystem` to describe a tree without touching disk.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Lists every child of `path`, hidden ones included.
    ///
    /// Returns `None` when the directory cannot be enumerated. An empty
    /// directory returns `Some` with no entries.
    fn list_entries(&self, path: &Path) -> Option<Vec<Entry>>;

    /// Returns whether `path` currently resolves to a directory.
    fn is_directory(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_entries(&self, path: &Path) -> Option<Vec<Entry>> {
        let read_dir = match fs::read_dir(path) {
            Ok(read_dir) => read_dir,
            Err(error) => {
                debug!(path = %path.display(), %error, "directory enumeration failed");

                return None;
            }
        };

        let entries = read_dir
            .filter_map(Result::ok)
            .map(|dir_entry| {
                let entry_path = dir_entry.path();
                // Follows symlinks so a link to a directory is enterable.
                let is_dir = entry_path.is_dir();

                Entry::new(entry_path, is_dir)
            })
            .collect();

        Some(entries)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
