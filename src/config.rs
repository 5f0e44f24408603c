//! Workspace configuration
//!
//! Stores grid defaults, sizing limits, theme selection and the initial
//! panel set in `~/.config/paneldock/config.yaml`. Every field has a
//! default so a partial (or missing) file still yields a usable workspace.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{LayoutSettings, MinSize, PanelConfig, PanelRect, WidgetKind};

/// Workspace configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Snap granularity in pixels
    pub grid_size: u32,
    /// Snap panel geometry to the grid at the end of a gesture
    pub snap_to_grid: bool,
    /// Draw grid dots on the canvas
    pub show_grid: bool,
    pub min_panel_width: f32,
    pub min_panel_height: f32,
    /// Theme id (e.g. "default-dark", "default-light")
    pub theme: String,
    /// TTF/OTF font used for panel titles; titles are omitted when unset or unreadable
    pub font_path: Option<PathBuf>,
    /// Panels created when the workspace opens
    pub panels: Vec<PanelConfig>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        let settings = LayoutSettings::default();
        Self {
            grid_size: settings.grid_size,
            snap_to_grid: settings.snap_to_grid,
            show_grid: settings.is_grid_visible,
            min_panel_width: settings.min_size.width,
            min_panel_height: settings.min_size.height,
            theme: "default-dark".to_string(),
            font_path: None,
            panels: default_panels(),
        }
    }
}

/// Starter layout: a graph explorer with a timeseries chart beside it
pub fn default_panels() -> Vec<PanelConfig> {
    vec![
        PanelConfig::new(
            WidgetKind::GraphExplorer,
            PanelRect::new(50.0, 50.0, 800.0, 600.0),
        )
        .with_title("Entity Graph")
        .with_subtitle("Address clusters"),
        PanelConfig::new(
            WidgetKind::TimeseriesChart,
            PanelRect::new(900.0, 50.0, 400.0, 300.0),
        )
        .with_title("Transaction Volume")
        .with_props(serde_json::json!({
            "series": [12, 18, 9, 22, 30, 26, 41, 38, 35, 44, 52, 47]
        })),
    ]
}

impl WorkspaceConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and sanitize a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let mut config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.sanitize();
        Ok(config)
    }

    /// Replace out-of-range values with their defaults
    fn sanitize(&mut self) {
        let defaults = LayoutSettings::default();
        if self.grid_size == 0 {
            tracing::warn!("grid_size must be positive, using {}", defaults.grid_size);
            self.grid_size = defaults.grid_size;
        }
        if self.min_panel_width.is_nan() || self.min_panel_width <= 0.0 {
            self.min_panel_width = defaults.min_size.width;
        }
        if self.min_panel_height.is_nan() || self.min_panel_height <= 0.0 {
            self.min_panel_height = defaults.min_size.height;
        }
    }

    /// Save config to a file, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Grid and sizing settings for a fresh `LayoutState`
    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            grid_size: self.grid_size,
            snap_to_grid: self.snap_to_grid,
            is_grid_visible: self.show_grid,
            min_size: MinSize {
                width: self.min_panel_width,
                height: self.min_panel_height,
            },
        }
    }
}
