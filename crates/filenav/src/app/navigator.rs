//! Directory-navigation state machine.
//!
//! [`Navigator`] owns the back-stack of opened directories and the view that
//! is currently shown. Every transition runs through one access and mount
//! check in [`Navigator::open_directory`]; the only exception is entering a
//! directory that has no visible children from the listing, which pushes
//! directly and shows the empty-directory message.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::access::AccessState;
use crate::domain::entry::{Entry, Listing, visible_count};
use crate::domain::issue::NavigationIssue;
use crate::domain::navigation::NavigationStack;
use crate::infra::access::AccessGate;
use crate::infra::filesystem::FileSystem;
use crate::infra::mount::MountOracle;

/// Caller-visible result of one navigator operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// A new [`Listing`] is available through [`Navigator::view`].
    RenderListing,
    /// A message should be shown. Transient issues leave the view as it was.
    RenderMessage(NavigationIssue),
    /// Access must be requested before the pending directory can be listed.
    ///
    /// Resume with [`Navigator::on_access_result`] once the flow resolves.
    AccessPending,
    /// The user is at the top level and must confirm leaving the app.
    ConfirmExit,
    /// Nothing visible changed.
    Unchanged,
}

/// What the content area shows right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NavView {
    /// Nothing has been listed yet.
    #[default]
    Blank,
    Listing(Listing),
    Message(NavigationIssue),
}

/// Back-stack and current view of the storage browser.
pub struct Navigator {
    access_gate: Arc<dyn AccessGate>,
    access_state: AccessState,
    displayed_path: Option<PathBuf>,
    file_system: Arc<dyn FileSystem>,
    mount_oracle: Arc<dyn MountOracle>,
    pending_path: Option<PathBuf>,
    stack: NavigationStack,
    storage_root: PathBuf,
    view: NavView,
}

impl Navigator {
    /// Creates an idle navigator rooted at `storage_root`.
    ///
    /// Call [`Navigator::start`] to list the root.
    pub fn new(
        storage_root: PathBuf,
        file_system: Arc<dyn FileSystem>,
        mount_oracle: Arc<dyn MountOracle>,
        access_gate: Arc<dyn AccessGate>,
    ) -> Self {
        Self {
            access_gate,
            access_state: AccessState::Unknown,
            displayed_path: None,
            file_system,
            mount_oracle,
            pending_path: None,
            stack: NavigationStack::new(),
            storage_root,
            view: NavView::Blank,
        }
    }

    /// Opens the storage root.
    pub fn start(&mut self) -> NavOutcome {
        let storage_root = self.storage_root.clone();

        self.open_directory(Some(storage_root))
    }

    /// Lists `path` and makes it the current directory.
    ///
    /// `None` means there is nothing to retry after a denied request and
    /// yields [`NavigationIssue::PathUnavailable`]. The stack grows by one
    /// only when the directory was enumerated, including when it has no
    /// visible entries.
    pub fn open_directory(&mut self, path: Option<PathBuf>) -> NavOutcome {
        let Some(directory) = path else {
            return self.show_message(NavigationIssue::PathUnavailable);
        };

        self.access_state = self.access_gate.check_access();
        if !self.access_state.is_granted() {
            return self.defer_until_access(directory);
        }

        let mount_state = self.mount_oracle.mount_state();
        if !mount_state.is_readable() {
            warn!(%mount_state, path = %directory.display(), "storage is not readable");

            return self.show_message(NavigationIssue::MountUnavailable);
        }

        let entries = if self.file_system.is_directory(&directory) {
            self.file_system.list_entries(&directory)
        } else {
            None
        };
        let Some(entries) = entries else {
            warn!(path = %directory.display(), "directory could not be enumerated");

            return self.show_message(NavigationIssue::EnumerationFailed);
        };

        let listing = Listing::from_entries(entries);
        debug!(
            path = %directory.display(),
            visible_entries = listing.len(),
            depth = self.stack.len() + 1,
            "opened directory"
        );
        self.enter(directory);
        if listing.is_empty() {
            return self.show_message(NavigationIssue::EmptyDirectory);
        }

        self.view = NavView::Listing(listing);

        NavOutcome::RenderListing
    }

    /// Reacts to the user picking `entry` from the rendered listing.
    ///
    /// With no listing on screen the selection only re-requests access for
    /// the storage root when access is missing.
    pub fn select_entry(&mut self, entry: Option<Entry>) -> NavOutcome {
        if self.listing().is_none() {
            self.access_state = self.access_gate.check_access();
            if self.access_state.is_granted() {
                return NavOutcome::Unchanged;
            }

            let storage_root = self.storage_root.clone();

            return self.defer_until_access(storage_root);
        }

        let Some(entry) = entry else {
            return NavOutcome::Unchanged;
        };

        if !entry.is_dir {
            debug!(path = %entry.path.display(), "file selected");

            return NavOutcome::RenderMessage(NavigationIssue::NotADirectory);
        }

        let visible_children = self
            .file_system
            .list_entries(&entry.path)
            .map(|children| visible_count(&children));
        if visible_children == Some(0) {
            debug!(path = %entry.path.display(), "entered empty directory");
            self.enter(entry.path);

            return self.show_message(NavigationIssue::EmptyDirectory);
        }

        self.open_directory(Some(entry.path))
    }

    /// Selects the row at `index` of the current listing.
    pub fn select_index(&mut self, index: usize) -> NavOutcome {
        let entry = self.listing().and_then(|listing| listing.get(index)).cloned();

        self.select_entry(entry)
    }

    /// Moves one level up, re-reading the parent directory from disk.
    ///
    /// At the top level the stack is left alone and exit confirmation is
    /// requested instead.
    pub fn go_back(&mut self) -> NavOutcome {
        if self.stack.len() <= 1 {
            return NavOutcome::ConfirmExit;
        }

        let left = self.stack.pop();
        let parent = self.stack.pop();
        debug!(
            left = ?left,
            parent = ?parent,
            "navigating to parent directory"
        );

        let outcome = self.open_directory(parent.clone());
        match outcome {
            // A failed re-open keeps the parent current so the stack and the
            // displayed path still agree with the message on screen.
            NavOutcome::RenderMessage(_) if self.stack.current() != parent.as_deref() => {
                if let Some(parent) = parent {
                    self.enter(parent);
                }
            }
            NavOutcome::AccessPending => {
                self.displayed_path = self.stack.current().map(Path::to_path_buf);
            }
            _ => {}
        }

        outcome
    }

    /// Resumes the operation that was waiting on the access flow.
    pub fn on_access_result(&mut self, granted: bool) -> NavOutcome {
        let pending_path = self.pending_path.take();
        info!(granted, pending = ?pending_path, "storage access resolved");

        if granted {
            self.access_state = AccessState::Granted;

            return self.open_directory(pending_path);
        }

        self.access_state = AccessState::Denied;
        self.displayed_path = None;
        self.view = NavView::Message(NavigationIssue::PathUnavailable);

        NavOutcome::RenderMessage(NavigationIssue::AccessDenied)
    }

    pub fn access_state(&self) -> AccessState {
        self.access_state
    }

    /// Returns the path shown above the listing.
    pub fn displayed_path(&self) -> Option<&Path> {
        self.displayed_path.as_deref()
    }

    /// Returns the rendered listing when one is on screen.
    pub fn listing(&self) -> Option<&Listing> {
        match &self.view {
            NavView::Listing(listing) => Some(listing),
            NavView::Blank | NavView::Message(_) => None,
        }
    }

    /// Returns the directory waiting on the access flow.
    #[cfg(test)]
    pub(crate) fn pending_path(&self) -> Option<&Path> {
        self.pending_path.as_deref()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    pub fn view(&self) -> &NavView {
        &self.view
    }

    /// Records `directory` as the current one and shows its path.
    fn enter(&mut self, directory: PathBuf) {
        self.displayed_path = Some(directory.clone());
        self.stack.push(directory);
    }

    /// Remembers `directory` for the access flow. A previous pending path is
    /// overwritten.
    fn defer_until_access(&mut self, directory: PathBuf) -> NavOutcome {
        debug!(
            path = %directory.display(),
            access_state = %self.access_state,
            "listing deferred until access is granted"
        );
        self.pending_path = Some(directory);

        NavOutcome::AccessPending
    }

    fn show_message(&mut self, issue: NavigationIssue) -> NavOutcome {
        self.view = NavView::Message(issue);

        NavOutcome::RenderMessage(issue)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::domain::access::MountState;
    use crate::infra::access::MockAccessGate;
    use crate::infra::filesystem::MockFileSystem;
    use crate::infra::mount::MockMountOracle;

    const ROOT: &str = "/storage";

    fn dir(path: &str) -> Entry {
        Entry::new(PathBuf::from(path), true)
    }

    fn file(path: &str) -> Entry {
        Entry::new(PathBuf::from(path), false)
    }

    /// Builds a filesystem mock that serves `tree` and treats every listed
    /// key as a directory.
    fn tree_file_system(tree: Vec<(&str, Vec<Entry>)>) -> MockFileSystem {
        let tree: HashMap<PathBuf, Vec<Entry>> = tree
            .into_iter()
            .map(|(path, entries)| (PathBuf::from(path), entries))
            .collect();
        let directories = tree.clone();
        let mut file_system = MockFileSystem::new();
        file_system
            .expect_list_entries()
            .returning(move |path| tree.get(path).cloned());
        file_system
            .expect_is_directory()
            .returning(move |path| directories.contains_key(path));

        file_system
    }

    fn granted_gate() -> MockAccessGate {
        let mut access_gate = MockAccessGate::new();
        access_gate
            .expect_check_access()
            .return_const(AccessState::Granted);

        access_gate
    }

    fn mounted_oracle() -> MockMountOracle {
        let mut mount_oracle = MockMountOracle::new();
        mount_oracle
            .expect_mount_state()
            .return_const(MountState::MountedWritable);

        mount_oracle
    }

    fn navigator(
        file_system: MockFileSystem,
        mount_oracle: MockMountOracle,
        access_gate: MockAccessGate,
    ) -> Navigator {
        Navigator::new(
            PathBuf::from(ROOT),
            Arc::new(file_system),
            Arc::new(mount_oracle),
            Arc::new(access_gate),
        )
    }

    fn sample_tree() -> Vec<(&'static str, Vec<Entry>)> {
        vec![
            (
                ROOT,
                vec![
                    dir("/storage/Photos"),
                    dir("/storage/Empty"),
                    file("/storage/notes.txt"),
                    dir("/storage/.thumbnails"),
                ],
            ),
            (
                "/storage/Photos",
                vec![file("/storage/Photos/b.jpg"), file("/storage/Photos/a.jpg")],
            ),
            ("/storage/Empty", vec![file("/storage/Empty/.nomedia")]),
        ]
    }

    fn listing_names(navigator: &Navigator) -> Vec<String> {
        navigator
            .listing()
            .map(|listing| {
                listing
                    .entries()
                    .iter()
                    .map(|entry| entry.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn select_named(navigator: &mut Navigator, name: &str) -> NavOutcome {
        let entry = navigator
            .listing()
            .and_then(|listing| listing.entries().iter().find(|entry| entry.name == name))
            .cloned();

        navigator.select_entry(entry)
    }

    #[test]
    fn test_start_lists_root_without_hidden_entries() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );

        // Act
        let outcome = navigator.start();

        // Assert
        assert_eq!(outcome, NavOutcome::RenderListing);
        assert_eq!(listing_names(&navigator), vec!["Empty", "Photos", "notes.txt"]);
        assert_eq!(navigator.stack().paths(), &[PathBuf::from(ROOT)]);
        assert_eq!(navigator.displayed_path(), Some(Path::new(ROOT)));
    }

    #[test]
    fn test_select_directory_lists_sorted_children_and_pushes() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();

        // Act
        let outcome = select_named(&mut navigator, "Photos");

        // Assert
        assert_eq!(outcome, NavOutcome::RenderListing);
        assert_eq!(listing_names(&navigator), vec!["a.jpg", "b.jpg"]);
        assert_eq!(
            navigator.stack().paths(),
            &[PathBuf::from(ROOT), PathBuf::from("/storage/Photos")]
        );
    }

    #[test]
    fn test_select_empty_directory_pushes_without_fresh_checks() {
        // Arrange
        let mut access_gate = MockAccessGate::new();
        access_gate
            .expect_check_access()
            .times(1)
            .return_const(AccessState::Granted);
        let mut mount_oracle = MockMountOracle::new();
        mount_oracle
            .expect_mount_state()
            .times(1)
            .return_const(MountState::MountedWritable);
        let mut navigator =
            navigator(tree_file_system(sample_tree()), mount_oracle, access_gate);
        navigator.start();

        // Act
        let outcome = select_named(&mut navigator, "Empty");

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::EmptyDirectory)
        );
        assert_eq!(
            navigator.view(),
            &NavView::Message(NavigationIssue::EmptyDirectory)
        );
        assert_eq!(navigator.stack().len(), 2);
        assert_eq!(navigator.displayed_path(), Some(Path::new("/storage/Empty")));
    }

    #[test]
    fn test_select_file_reports_not_a_directory_without_changes() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();
        let view_before = navigator.view().clone();

        // Act
        let outcome = select_named(&mut navigator, "notes.txt");

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::NotADirectory)
        );
        assert_eq!(navigator.view(), &view_before);
        assert_eq!(navigator.stack().len(), 1);
    }

    #[test]
    fn test_select_index_out_of_range_is_unchanged() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();

        // Act
        let outcome = navigator.select_index(42);

        // Assert
        assert_eq!(outcome, NavOutcome::Unchanged);
        assert_eq!(navigator.stack().len(), 1);
    }

    #[test]
    fn test_go_back_at_root_requests_exit_and_keeps_stack() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();

        // Act
        let outcome = navigator.go_back();

        // Assert
        assert_eq!(outcome, NavOutcome::ConfirmExit);
        assert_eq!(navigator.stack().paths(), &[PathBuf::from(ROOT)]);
    }

    #[test]
    fn test_go_back_before_any_listing_requests_exit() {
        // Arrange
        let mut navigator = navigator(
            MockFileSystem::new(),
            MockMountOracle::new(),
            MockAccessGate::new(),
        );

        // Act
        let outcome = navigator.go_back();

        // Assert
        assert_eq!(outcome, NavOutcome::ConfirmExit);
        assert!(navigator.stack().is_empty());
    }

    #[test]
    fn test_go_back_reopens_parent_and_shrinks_stack() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();
        select_named(&mut navigator, "Photos");

        // Act
        let outcome = navigator.go_back();

        // Assert
        assert_eq!(outcome, NavOutcome::RenderListing);
        assert_eq!(navigator.stack().paths(), &[PathBuf::from(ROOT)]);
        assert_eq!(listing_names(&navigator), vec!["Empty", "Photos", "notes.txt"]);
        assert_eq!(navigator.displayed_path(), Some(Path::new(ROOT)));
    }

    #[test]
    fn test_go_back_from_empty_directory_returns_to_parent_listing() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();
        select_named(&mut navigator, "Empty");

        // Act
        let outcome = navigator.go_back();

        // Assert
        assert_eq!(outcome, NavOutcome::RenderListing);
        assert_eq!(navigator.stack().len(), 1);
    }

    #[test]
    fn test_go_back_rereads_parent_from_disk() {
        // Arrange
        let reads_second_version = Arc::new(AtomicBool::new(false));
        let reads_second_version_in_mock = Arc::clone(&reads_second_version);
        let mut file_system = MockFileSystem::new();
        file_system.expect_is_directory().return_const(true);
        file_system.expect_list_entries().returning(move |path| {
            if path == Path::new(ROOT) {
                if reads_second_version_in_mock.load(Ordering::SeqCst) {
                    return Some(vec![dir("/storage/Music"), dir("/storage/Photos")]);
                }

                return Some(vec![dir("/storage/Photos")]);
            }

            Some(vec![file("/storage/Photos/a.jpg")])
        });
        let mut navigator = navigator(file_system, mounted_oracle(), granted_gate());
        navigator.start();
        select_named(&mut navigator, "Photos");
        reads_second_version.store(true, Ordering::SeqCst);

        // Act
        navigator.go_back();

        // Assert
        assert_eq!(listing_names(&navigator), vec!["Music", "Photos"]);
    }

    #[test]
    fn test_go_back_keeps_parent_current_when_it_cannot_be_reopened() {
        // Arrange
        let photos_unlistable = Arc::new(AtomicBool::new(false));
        let photos_unlistable_in_mock = Arc::clone(&photos_unlistable);
        let mut file_system = MockFileSystem::new();
        file_system.expect_is_directory().return_const(true);
        file_system.expect_list_entries().returning(move |path| {
            if path == Path::new(ROOT) {
                return Some(vec![dir("/storage/Photos")]);
            }
            if path == Path::new("/storage/Photos") {
                if photos_unlistable_in_mock.load(Ordering::SeqCst) {
                    return None;
                }

                return Some(vec![dir("/storage/Photos/Raw")]);
            }

            Some(vec![file("/storage/Photos/Raw/a.dng")])
        });
        let mut navigator = navigator(file_system, mounted_oracle(), granted_gate());
        navigator.start();
        select_named(&mut navigator, "Photos");
        select_named(&mut navigator, "Raw");
        photos_unlistable.store(true, Ordering::SeqCst);

        // Act
        let outcome = navigator.go_back();

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::EnumerationFailed)
        );
        assert_eq!(
            navigator.stack().paths(),
            &[PathBuf::from(ROOT), PathBuf::from("/storage/Photos")]
        );
        assert_eq!(
            navigator.displayed_path(),
            Some(Path::new("/storage/Photos"))
        );
        assert_eq!(
            navigator.view(),
            &NavView::Message(NavigationIssue::EnumerationFailed)
        );
    }

    #[test]
    fn test_go_back_waiting_for_access_shows_remaining_top() {
        // Arrange
        let access_revoked = Arc::new(AtomicBool::new(false));
        let access_revoked_in_mock = Arc::clone(&access_revoked);
        let mut access_gate = MockAccessGate::new();
        access_gate.expect_check_access().returning(move || {
            if access_revoked_in_mock.load(Ordering::SeqCst) {
                AccessState::Denied
            } else {
                AccessState::Granted
            }
        });
        let mut navigator = navigator(
            tree_file_system(vec![
                (ROOT, vec![dir("/storage/Photos")]),
                ("/storage/Photos", vec![dir("/storage/Photos/Raw")]),
                ("/storage/Photos/Raw", vec![file("/storage/Photos/Raw/a.dng")]),
            ]),
            mounted_oracle(),
            access_gate,
        );
        navigator.start();
        select_named(&mut navigator, "Photos");
        select_named(&mut navigator, "Raw");
        access_revoked.store(true, Ordering::SeqCst);

        // Act
        let outcome = navigator.go_back();

        // Assert
        assert_eq!(outcome, NavOutcome::AccessPending);
        assert_eq!(navigator.pending_path(), Some(Path::new("/storage/Photos")));
        assert_eq!(navigator.stack().paths(), &[PathBuf::from(ROOT)]);
        assert_eq!(navigator.displayed_path(), Some(Path::new(ROOT)));
    }

    #[test]
    fn test_open_absent_path_reports_unavailable_without_push() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );
        navigator.start();

        // Act
        let outcome = navigator.open_directory(None);

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::PathUnavailable)
        );
        assert_eq!(navigator.stack().len(), 1);
        assert!(navigator.listing().is_none());
    }

    #[test]
    fn test_open_without_access_defers_and_keeps_stack() {
        // Arrange
        let mut access_gate = MockAccessGate::new();
        access_gate
            .expect_check_access()
            .return_const(AccessState::Unknown);
        let mut navigator =
            navigator(MockFileSystem::new(), MockMountOracle::new(), access_gate);

        // Act
        let outcome = navigator.start();

        // Assert
        assert_eq!(outcome, NavOutcome::AccessPending);
        assert_eq!(navigator.pending_path(), Some(Path::new(ROOT)));
        assert!(navigator.stack().is_empty());
        assert_eq!(navigator.view(), &NavView::Blank);
    }

    #[test]
    fn test_access_denied_clears_view_and_path() {
        // Arrange
        let mut access_gate = MockAccessGate::new();
        access_gate
            .expect_check_access()
            .return_const(AccessState::Denied);
        let mut navigator =
            navigator(MockFileSystem::new(), MockMountOracle::new(), access_gate);
        let pending_outcome = navigator.open_directory(Some(PathBuf::from("/storage/DCIM")));

        // Act
        let outcome = navigator.on_access_result(false);

        // Assert
        assert_eq!(pending_outcome, NavOutcome::AccessPending);
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::AccessDenied)
        );
        assert_eq!(
            navigator.view(),
            &NavView::Message(NavigationIssue::PathUnavailable)
        );
        assert!(navigator.stack().is_empty());
        assert_eq!(navigator.displayed_path(), None);
        assert_eq!(navigator.pending_path(), None);
        assert_eq!(navigator.access_state(), AccessState::Denied);
    }

    #[test]
    fn test_access_granted_opens_pending_directory() {
        // Arrange
        let is_granted = Arc::new(AtomicBool::new(false));
        let is_granted_in_mock = Arc::clone(&is_granted);
        let mut access_gate = MockAccessGate::new();
        access_gate.expect_check_access().returning(move || {
            if is_granted_in_mock.load(Ordering::SeqCst) {
                AccessState::Granted
            } else {
                AccessState::Unknown
            }
        });
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            access_gate,
        );
        navigator.start();
        is_granted.store(true, Ordering::SeqCst);

        // Act
        let outcome = navigator.on_access_result(true);

        // Assert
        assert_eq!(outcome, NavOutcome::RenderListing);
        assert_eq!(navigator.access_state(), AccessState::Granted);
        assert_eq!(navigator.stack().paths(), &[PathBuf::from(ROOT)]);
        assert_eq!(navigator.pending_path(), None);
    }

    #[test]
    fn test_pending_path_is_overwritten_by_newer_request() {
        // Arrange
        let mut access_gate = MockAccessGate::new();
        access_gate
            .expect_check_access()
            .return_const(AccessState::Unknown);
        let mut navigator =
            navigator(MockFileSystem::new(), MockMountOracle::new(), access_gate);
        navigator.open_directory(Some(PathBuf::from("/storage/A")));

        // Act
        navigator.open_directory(Some(PathBuf::from("/storage/B")));

        // Assert
        assert_eq!(navigator.pending_path(), Some(Path::new("/storage/B")));
    }

    #[test]
    fn test_select_without_listing_requests_access_for_root() {
        // Arrange
        let mut access_gate = MockAccessGate::new();
        access_gate
            .expect_check_access()
            .return_const(AccessState::Denied);
        let mut navigator =
            navigator(MockFileSystem::new(), MockMountOracle::new(), access_gate);
        navigator.open_directory(Some(PathBuf::from("/storage/DCIM")));
        navigator.on_access_result(false);

        // Act
        let outcome = navigator.select_entry(None);

        // Assert
        assert_eq!(outcome, NavOutcome::AccessPending);
        assert_eq!(navigator.pending_path(), Some(Path::new(ROOT)));
    }

    #[test]
    fn test_select_without_listing_is_noop_when_access_granted() {
        // Arrange
        let mut mount_oracle = MockMountOracle::new();
        mount_oracle
            .expect_mount_state()
            .return_const(MountState::Other);
        let mut navigator = navigator(MockFileSystem::new(), mount_oracle, granted_gate());
        navigator.start();

        // Act
        let outcome = navigator.select_entry(None);

        // Assert
        assert_eq!(outcome, NavOutcome::Unchanged);
        assert_eq!(navigator.pending_path(), None);
    }

    #[test]
    fn test_unmounted_storage_reports_message_without_push() {
        // Arrange
        let mut mount_oracle = MockMountOracle::new();
        mount_oracle
            .expect_mount_state()
            .return_const(MountState::Other);
        let mut file_system = MockFileSystem::new();
        file_system.expect_list_entries().never();
        let mut navigator = navigator(file_system, mount_oracle, granted_gate());

        // Act
        let outcome = navigator.start();

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::MountUnavailable)
        );
        assert!(navigator.stack().is_empty());
    }

    #[test]
    fn test_read_only_storage_is_listed() {
        // Arrange
        let mut mount_oracle = MockMountOracle::new();
        mount_oracle
            .expect_mount_state()
            .return_const(MountState::MountedReadOnly);
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mount_oracle,
            granted_gate(),
        );

        // Act
        let outcome = navigator.start();

        // Assert
        assert_eq!(outcome, NavOutcome::RenderListing);
    }

    #[test]
    fn test_enumeration_failure_reports_message_without_push() {
        // Arrange
        let mut file_system = MockFileSystem::new();
        file_system.expect_is_directory().return_const(true);
        file_system.expect_list_entries().returning(|_| None);
        let mut navigator = navigator(file_system, mounted_oracle(), granted_gate());

        // Act
        let outcome = navigator.start();

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::EnumerationFailed)
        );
        assert!(navigator.stack().is_empty());
        assert_eq!(navigator.displayed_path(), None);
    }

    #[test]
    fn test_missing_path_reports_enumeration_failure() {
        // Arrange
        let mut file_system = MockFileSystem::new();
        file_system.expect_is_directory().return_const(false);
        file_system.expect_list_entries().never();
        let mut navigator = navigator(file_system, mounted_oracle(), granted_gate());

        // Act
        let outcome = navigator.open_directory(Some(PathBuf::from("/storage/missing")));

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::EnumerationFailed)
        );
        assert!(navigator.stack().is_empty());
    }

    #[test]
    fn test_open_directory_with_only_hidden_entries_pushes_and_reports_empty() {
        // Arrange
        let mut navigator = navigator(
            tree_file_system(sample_tree()),
            mounted_oracle(),
            granted_gate(),
        );

        // Act
        let outcome = navigator.open_directory(Some(PathBuf::from("/storage/Empty")));

        // Assert
        assert_eq!(
            outcome,
            NavOutcome::RenderMessage(NavigationIssue::EmptyDirectory)
        );
        assert_eq!(navigator.stack().len(), 1);
    }

    #[test]
    fn test_storage_root_is_kept() {
        // Arrange & Act
        let navigator = navigator(
            MockFileSystem::new(),
            MockMountOracle::new(),
            MockAccessGate::new(),
        );

        // Assert
        assert_eq!(navigator.storage_root(), Path::new(ROOT));
        assert_eq!(navigator.access_state(), AccessState::Unknown);
    }
}
