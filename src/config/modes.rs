//! Duplicate removal mode definitions.

use std::fmt;

/// How detected duplicates are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    /// Send duplicates to the recycle bin (default).
    #[default]
    Trash,
    /// Remove duplicates permanently.
    Permanent,
    /// Move duplicates into a quarantine folder.
    Quarantine,
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteMode::Trash => write!(f, "trash"),
            DeleteMode::Permanent => write!(f, "permanent"),
            DeleteMode::Quarantine => write!(f, "quarantine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_mode_display() {
        assert_eq!(DeleteMode::Trash.to_string(), "trash");
        assert_eq!(DeleteMode::Permanent.to_string(), "permanent");
        assert_eq!(DeleteMode::Quarantine.to_string(), "quarantine");
        assert_eq!(DeleteMode::default(), DeleteMode::Trash);
    }
}
