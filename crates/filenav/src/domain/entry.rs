use std::path::{Path, PathBuf};

/// Leading character that marks a file or directory as hidden.
pub const HIDDEN_MARKER: char = '.';

/// One file or directory captured at listing time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Final path segment shown to the user.
    pub name: String,
    /// Absolute path of the entry.
    pub path: PathBuf,
}

impl Entry {
    /// Creates an entry snapshot and derives its display name from `path`.
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = entry_name(&path);

        Self { is_dir, name, path }
    }

    /// Returns whether the entry name starts with [`HIDDEN_MARKER`].
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with(HIDDEN_MARKER)
    }
}

/// Returns the final segment of `path`, or the whole path for roots such as
/// `/` that have no file name.
fn entry_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Visible entries of one directory, sorted by name.
///
/// A listing is produced fresh on every directory entry and is never edited
/// in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    /// Builds a listing from raw directory entries.
    ///
    /// Hidden entries are dropped and the rest are ordered by case-sensitive
    /// name comparison.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut entries: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| !entry.is_hidden())
            .collect();
        entries.sort_by(|first, second| first.name.cmp(&second.name));

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Counts the entries of `entries` that would survive listing filters.
pub fn visible_count(entries: &[Entry]) -> usize {
    entries.iter().filter(|entry| !entry.is_hidden()).count()
}
