//! Theme system for the workspace
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/paneldock/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub canvas: CanvasThemeData,
    pub panel: PanelThemeData,
    #[serde(default)]
    pub widget: WidgetThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasThemeData {
    pub background: String,
    pub grid_dot: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    pub border: String,
    pub border_active: String,
    pub title_bar_background: String,
    pub title_foreground: String,
    #[serde(default)]
    pub subtitle_foreground: Option<String>,
    pub close_button: String,
    pub resize_grip: String,
    #[serde(default)]
    pub drag_shadow: Option<String>,
}

/// Widget colors (all optional)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WidgetThemeData {
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub muted: Option<String>,
    #[serde(default)]
    pub placeholder_background: Option<String>,
    #[serde(default)]
    pub placeholder_foreground: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub canvas: CanvasTheme,
    pub panel: PanelTheme,
    pub widget: WidgetTheme,
}

/// Canvas colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasTheme {
    pub background: Color,
    pub grid_dot: Color,
}

/// Panel chrome colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
    /// Border of the panel being dragged or resized
    pub border_active: Color,
    pub title_bar_background: Color,
    pub title_foreground: Color,
    pub subtitle_foreground: Color,
    pub close_button: Color,
    pub resize_grip: Color,
    /// Translucent shadow under the panel being dragged
    pub drag_shadow: Color,
}

/// Colors handed to widgets
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetTheme {
    pub accent: Color,
    pub muted: Color,
    pub placeholder_background: Color,
    pub placeholder_foreground: Color,
}

impl WidgetTheme {
    pub fn default_dark() -> Self {
        Self {
            accent: Color::rgb(0x3D, 0x8B, 0xFD),
            muted: Color::rgb(0x59, 0x60, 0x6C),
            placeholder_background: Color::rgb(0x1B, 0x1E, 0x23),
            placeholder_foreground: Color::rgb(0x6B, 0x72, 0x80),
        }
    }
}

fn optional_color(value: &Option<String>, fallback: Color) -> Result<Color, String> {
    Ok(value
        .as_ref()
        .map(|s| Color::from_hex(s))
        .transpose()?
        .unwrap_or(fallback))
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let panel = &data.ui.panel;
        let widget = &data.ui.widget;
        let widget_defaults = WidgetTheme::default_dark();

        Ok(Theme {
            name: data.name,
            canvas: CanvasTheme {
                background: Color::from_hex(&data.ui.canvas.background)?,
                grid_dot: Color::from_hex(&data.ui.canvas.grid_dot)?,
            },
            panel: PanelTheme {
                background: Color::from_hex(&panel.background)?,
                border: Color::from_hex(&panel.border)?,
                border_active: Color::from_hex(&panel.border_active)?,
                title_bar_background: Color::from_hex(&panel.title_bar_background)?,
                title_foreground: Color::from_hex(&panel.title_foreground)?,
                subtitle_foreground: optional_color(
                    &panel.subtitle_foreground,
                    Color::rgb(0x8A, 0x91, 0x9E),
                )?,
                close_button: Color::from_hex(&panel.close_button)?,
                resize_grip: Color::from_hex(&panel.resize_grip)?,
                drag_shadow: optional_color(&panel.drag_shadow, Color::rgba(0, 0, 0, 0x60))?,
            },
            widget: WidgetTheme {
                accent: optional_color(&widget.accent, widget_defaults.accent)?,
                muted: optional_color(&widget.muted, widget_defaults.muted)?,
                placeholder_background: optional_color(
                    &widget.placeholder_background,
                    widget_defaults.placeholder_background,
                )?,
                placeholder_foreground: optional_color(
                    &widget.placeholder_foreground,
                    widget_defaults.placeholder_foreground,
                )?,
            },
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Default Dark".to_string(),
                canvas: CanvasTheme {
                    background: Color::rgb(0x16, 0x18, 0x1D),
                    grid_dot: Color::rgb(0x2C, 0x31, 0x3A),
                },
                panel: PanelTheme {
                    background: Color::rgb(0x1F, 0x22, 0x28),
                    border: Color::rgb(0x30, 0x35, 0x3F),
                    border_active: Color::rgb(0x3D, 0x8B, 0xFD),
                    title_bar_background: Color::rgb(0x26, 0x2A, 0x31),
                    title_foreground: Color::rgb(0xE6, 0xE6, 0xE6),
                    subtitle_foreground: Color::rgb(0x8A, 0x91, 0x9E),
                    close_button: Color::rgb(0xC0, 0x56, 0x5B),
                    resize_grip: Color::rgb(0x59, 0x60, 0x6C),
                    drag_shadow: Color::rgba(0, 0, 0, 0x60),
                },
                widget: WidgetTheme::default_dark(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
