use std::fmt;

/// Cached outcome of the storage read-permission check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessState {
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl AccessState {
    pub fn is_granted(self) -> bool {
        self == AccessState::Granted
    }

    /// Returns the user-facing label shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            AccessState::Unknown => "unknown",
            AccessState::Granted => "granted",
            AccessState::Denied => "denied",
        }
    }
}

impl fmt::Display for AccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Availability of the storage volume that backs the browsed tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountState {
    MountedWritable,
    MountedReadOnly,
    Other,
}

impl MountState {
    /// Returns whether directories on the volume can be listed.
    pub fn is_readable(self) -> bool {
        matches!(self, MountState::MountedWritable | MountState::MountedReadOnly)
    }
}

impl fmt::Display for MountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MountState::MountedWritable => "mounted",
            MountState::MountedReadOnly => "mounted_read_only",
            MountState::Other => "unavailable",
        };

        f.write_str(label)
    }
}
