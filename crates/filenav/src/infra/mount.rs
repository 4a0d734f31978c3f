use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::domain::access::MountState;

/// Reports whether the storage volume can currently be read.
#[cfg_attr(test, mockall::automock)]
pub trait MountOracle: Send + Sync {
    fn mount_state(&self) -> MountState;
}

/// [`MountOracle`] that inspects the storage root on the local filesystem.
///
/// A missing root is reported as [`MountState::Other`]; a root without write
/// permission bits as [`MountState::MountedReadOnly`].
pub struct LocalMountOracle {
    root: PathBuf,
}

impl LocalMountOracle {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl MountOracle for LocalMountOracle {
    fn mount_state(&self) -> MountState {
        match fs::metadata(&self.root) {
            Ok(metadata) if metadata.permissions().readonly() => MountState::MountedReadOnly,
            Ok(_) => MountState::MountedWritable,
            Err(error) => {
                warn!(root = %self.root.display(), %error, "storage root is unavailable");

                MountState::Other
            }
        }
    }
}
