//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DeleteMode};

/// Folder deduplicator and hash renamer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "hashnamer",
    version,
    about = "Deduplicate folders by content and rename files to their hash",
    long_about = "Fingerprints every file in each folder with MD5, removes duplicates \
                  (keeping the first file found) and renames the rest to \
                  <HASH><extension>.\n\n\
                  Folders are processed one at a time and are not recursed into."
)]
pub struct Args {
    /// Folders to work on, processed in order.
    /// If none are valid you will be asked for one.
    pub folders: Vec<String>,

    /// What to do with duplicates.
    #[arg(long, value_enum, default_value_t = DeleteModeArg::Trash)]
    pub delete_mode: DeleteModeArg,

    /// Folder that receives duplicates in quarantine mode.
    #[arg(long)]
    pub quarantine_dir: Option<PathBuf>,

    /// Trust matching fingerprints without comparing file bytes.
    #[arg(long)]
    pub no_verify: bool,

    /// Hide per-file messages and the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI delete mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeleteModeArg {
    /// Send duplicates to the recycle bin.
    Trash,
    /// Delete duplicates permanently.
    Permanent,
    /// Move duplicates into --quarantine-dir.
    Quarantine,
}

impl From<DeleteModeArg> for DeleteMode {
    fn from(arg: DeleteModeArg) -> Self {
        match arg {
            DeleteModeArg::Trash => DeleteMode::Trash,
            DeleteModeArg::Permanent => DeleteMode::Permanent,
            DeleteModeArg::Quarantine => DeleteMode::Quarantine,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        config.folders = self.folders;
        config.delete_mode = self.delete_mode.into();

        if let Some(dir) = self.quarantine_dir {
            config.quarantine_dir = Some(dir);
        }

        // Boolean flags (only override if set to non-default)
        if self.no_verify {
            config.verify_duplicates = false;
        }

        if self.quiet {
            config.quiet = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hashnamer", "/a", "/b"]).unwrap();
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.folders, vec!["/a".to_string(), "/b".to_string()]);
        assert_eq!(config.delete_mode, DeleteMode::Trash);
        assert!(config.verify_duplicates);
        assert!(!config.quiet);
        assert_eq!(config.quarantine_dir, None);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "hashnamer",
            "--delete-mode",
            "quarantine",
            "--quarantine-dir",
            "/q",
            "--no-verify",
            "-q",
            "/a",
        ])
        .unwrap();
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.delete_mode, DeleteMode::Quarantine);
        assert_eq!(config.quarantine_dir, Some(PathBuf::from("/q")));
        assert!(!config.verify_duplicates);
        assert!(config.quiet);
    }

    #[test]
    fn test_no_folders_is_allowed() {
        let args = Args::try_parse_from(["hashnamer"]).unwrap();
        assert!(args.folders.is_empty());
    }

    #[test]
    fn test_unknown_delete_mode_rejected() {
        assert!(Args::try_parse_from(["hashnamer", "--delete-mode", "shred"]).is_err());
    }
}
