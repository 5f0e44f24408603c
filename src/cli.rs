//! Command-line argument parsing for the workspace
//!
//! Supports:
//! - Loading config from an explicit path
//! - Overriding grid settings for one session
//! - Starting with an empty canvas

use clap::Parser;
use std::path::PathBuf;

use crate::config::WorkspaceConfig;

/// A dockable panel workspace
#[derive(Parser, Debug, Default)]
#[command(name = "paneldock", version, about = "A dockable panel workspace")]
pub struct CliArgs {
    /// Config file to load instead of ~/.config/paneldock/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grid size in pixels
    #[arg(short, long, value_name = "PX")]
    pub grid_size: Option<u32>,

    /// Disable snapping to the grid at the end of a drag or resize
    #[arg(long)]
    pub no_snap: bool,

    /// Draw grid dots on the canvas
    #[arg(long)]
    pub show_grid: bool,

    /// Start with no panels (ignore configured panels)
    #[arg(short = 'e', long)]
    pub empty: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Effective workspace config after CLI overrides
    pub workspace: WorkspaceConfig,
}

impl CliArgs {
    /// Load the workspace config and apply CLI overrides on top of it
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let workspace = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(format!("Config file not found: {}", path.display()));
                }
                WorkspaceConfig::load_from(path)
            }
            None => WorkspaceConfig::load(),
        };
        Ok(StartupConfig {
            workspace: self.apply(workspace)?,
        })
    }

    /// Apply overrides to an already loaded config
    pub fn apply(&self, mut config: WorkspaceConfig) -> Result<WorkspaceConfig, String> {
        if let Some(grid_size) = self.grid_size {
            if grid_size == 0 {
                return Err("--grid-size must be greater than zero".to_string());
            }
            config.grid_size = grid_size;
        }
        if self.no_snap {
            config.snap_to_grid = false;
        }
        if self.show_grid {
            config.show_grid = true;
        }
        if self.empty {
            config.panels.clear();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let config = CliArgs::default().apply(WorkspaceConfig::default()).unwrap();
        assert_eq!(config, WorkspaceConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let args = CliArgs {
            grid_size: Some(8),
            no_snap: true,
            show_grid: true,
            empty: true,
            ..Default::default()
        };
        let config = args.apply(WorkspaceConfig::default()).unwrap();
        assert_eq!(config.grid_size, 8);
        assert!(!config.snap_to_grid);
        assert!(config.show_grid);
        assert!(config.panels.is_empty());
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        let args = CliArgs {
            grid_size: Some(0),
            ..Default::default()
        };
        assert!(args.apply(WorkspaceConfig::default()).is_err());
    }

    #[test]
    fn test_missing_config_path_is_error() {
        let args = CliArgs {
            config: Some(PathBuf::from("/definitely/not/here/config.yaml")),
            ..Default::default()
        };
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from(["paneldock", "--grid-size", "10", "--no-snap", "-e"]);
        assert_eq!(args.grid_size, Some(10));
        assert!(args.no_snap);
        assert!(args.empty);
        assert!(!args.show_grid);
    }
}
