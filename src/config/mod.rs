//! Configuration management

use crate::scanner::TraversalMode;
use crate::types::SyncError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "treesync",
    version,
    about = "Synchronize a target directory tree with a source"
)]
pub struct Cli {
    /// Source directory path
    #[arg(long)]
    pub source: PathBuf,

    /// Target directory path
    #[arg(long)]
    pub target: PathBuf,

    /// Delete files present in target but missing in source
    #[arg(long)]
    pub delete_missing: bool,

    /// Compare every descendant file instead of top-level files only
    #[arg(long)]
    pub deep: bool,

    /// Show the planned actions without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Global configuration for treesync
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Target directory
    pub target: PathBuf,

    /// Whether files present only in the target are reported for removal
    pub delete_missing: bool,

    /// Shallow (top-level only) or deep (fully recursive) traversal
    pub traversal: TraversalMode,

    /// Dry run (show planned actions, don't execute)
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            target: PathBuf::new(),
            delete_missing: false,
            traversal: TraversalMode::Shallow,
            dry_run: false,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), SyncError> {
        if !self.source.is_dir() {
            return Err(SyncError::Config(format!(
                "source path is not a directory: {}",
                self.source.display()
            )));
        }

        if self.source == self.target {
            return Err(SyncError::Config(
                "source and target cannot be the same".to_string(),
            ));
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, SyncError> {
        let config = Config {
            source: std::path::absolute(&cli.source)?,
            target: std::path::absolute(&cli.target)?,
            delete_missing: cli.delete_missing,
            traversal: if cli.deep {
                TraversalMode::Deep
            } else {
                TraversalMode::Shallow
            },
            dry_run: cli.dry_run,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_missing_source_fails() {
        let config = Config {
            source: PathBuf::from("/definitely/not/there"),
            target: PathBuf::from("/tmp"),
            ..Config::default()
        };

        let err = config.validate().expect_err("missing source should fail");
        assert!(matches!(err, SyncError::Config(_)));
    }

    #[test]
    fn test_validate_same_source_and_target_fails() {
        let dir = TempDir::new().expect("create temp dir");
        let config = Config {
            source: dir.path().to_path_buf(),
            target: dir.path().to_path_buf(),
            ..Config::default()
        };

        let err = config.validate().expect_err("identical roots should fail");
        assert!(err.to_string().contains("cannot be the same"));
    }

    #[test]
    fn test_try_from_cli_maps_deep_flag() {
        let src = TempDir::new().expect("create src temp dir");
        let tgt = TempDir::new().expect("create tgt temp dir");

        let cli = Cli {
            source: src.path().to_path_buf(),
            target: tgt.path().to_path_buf(),
            delete_missing: true,
            deep: true,
            dry_run: false,
        };

        let config = Config::try_from(cli).expect("conversion should succeed");
        assert_eq!(config.traversal, TraversalMode::Deep);
        assert!(config.delete_missing);
        assert!(config.source.is_absolute());
        assert!(config.target.is_absolute());
    }

    #[test]
    fn test_try_from_cli_defaults_to_shallow() {
        let src = TempDir::new().expect("create src temp dir");
        let tgt = TempDir::new().expect("create tgt temp dir");

        let cli = Cli {
            source: src.path().to_path_buf(),
            target: tgt.path().to_path_buf(),
            delete_missing: false,
            deep: false,
            dry_run: false,
        };

        let config = Config::try_from(cli).expect("conversion should succeed");
        assert_eq!(config.traversal, TraversalMode::Shallow);
    }

    #[test]
    fn test_cli_parses_flags() {
        use clap::Parser;

        let cli = Cli::parse_from([
            "treesync",
            "--source",
            "/a",
            "--target",
            "/b",
            "--delete-missing",
            "--deep",
            "--dry-run",
        ]);

        assert_eq!(cli.source, PathBuf::from("/a"));
        assert_eq!(cli.target, PathBuf::from("/b"));
        assert!(cli.delete_missing);
        assert!(cli.deep);
        assert!(cli.dry_run);
    }
}
