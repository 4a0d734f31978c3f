use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A directory row marker (▸).
    Directory,
    /// A file row marker (·).
    File,
    /// A lock symbol (⊘) shown while access is missing.
    Locked,
    /// A spinner symbol frame.
    Spinner(usize),
    /// A warning symbol (!).
    Warn,
}

impl Icon {
    /// Returns a `Spinner` icon with the frame index calculated based on
    /// current time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner((now / 100) as usize)
    }

    /// Returns the row icon for a directory or file entry.
    pub fn for_entry(is_dir: bool) -> Self {
        if is_dir { Icon::Directory } else { Icon::File }
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Directory => "▸",
            Icon::File => "·",
            Icon::Locked => "⊘",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
            Icon::Warn => "!",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        // Arrange & Act & Assert
        assert_eq!(Icon::Directory.as_str(), "▸");
        assert_eq!(Icon::File.as_str(), "·");
        assert_eq!(Icon::Locked.as_str(), "⊘");
        assert_eq!(Icon::Warn.as_str(), "!");
    }

    #[test]
    fn test_for_entry() {
        // Arrange & Act & Assert
        assert_eq!(Icon::for_entry(true), Icon::Directory);
        assert_eq!(Icon::for_entry(false), Icon::File);
    }

    #[test]
    fn test_current_spinner() {
        // Arrange & Act
        let icon = Icon::current_spinner();

        // Assert
        assert!(matches!(icon, Icon::Spinner(_)));
        assert!(SPINNER_FRAMES.contains(&icon.as_str()));
    }

    #[test]
    fn test_display_matches_as_str() {
        // Arrange & Act & Assert
        assert_eq!(Icon::Spinner(12).to_string(), SPINNER_FRAMES[2]);
    }
}
