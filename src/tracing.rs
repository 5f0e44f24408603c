//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! gesture and layout state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=paneldock::update::gesture=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/paneldock/logs/paneldock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::collections::HashSet;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{LayoutState, MinSize, PanelId, PanelRect};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/paneldock/logs/paneldock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "paneldock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel geometry and stacking for diffing
#[derive(Debug, Clone)]
pub struct LayoutDigest {
    pub min_size: MinSize,
    pub panels: Vec<PanelDigest>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelDigest {
    pub id: PanelId,
    pub rect: PanelRect,
    pub z_index: u32,
}

impl LayoutDigest {
    pub fn from_layout(layout: &LayoutState) -> Self {
        Self {
            min_size: layout.min_size(),
            panels: layout
                .panels()
                .iter()
                .map(|p| PanelDigest {
                    id: p.id,
                    rect: p.rect,
                    z_index: p.z_index,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two digests
    pub fn diff(&self, other: &LayoutDigest) -> Option<String> {
        let mut changes = Vec::new();

        for before in &self.panels {
            match other.panels.iter().find(|p| p.id == before.id) {
                None => changes.push(format!("{}: removed", before.id)),
                Some(after) => {
                    if before.rect != after.rect {
                        changes.push(format!(
                            "{}: ({},{} {}x{}) → ({},{} {}x{})",
                            before.id,
                            before.rect.x,
                            before.rect.y,
                            before.rect.width,
                            before.rect.height,
                            after.rect.x,
                            after.rect.y,
                            after.rect.width,
                            after.rect.height
                        ));
                    }
                    if before.z_index != after.z_index {
                        changes.push(format!(
                            "{}: z {} → {}",
                            before.id, before.z_index, after.z_index
                        ));
                    }
                }
            }
        }

        for after in &other.panels {
            if !self.panels.iter().any(|p| p.id == after.id) {
                changes.push(format!("{}: added (z {})", after.id, after.z_index));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Panic with context if the layout invariants do not hold
    pub fn assert_invariants(&self, context: &str) {
        let mut seen = HashSet::new();
        for panel in &self.panels {
            assert!(
                seen.insert(panel.id),
                "[{}] duplicate panel id {}",
                context,
                panel.id
            );
            assert!(
                panel.rect.width >= self.min_size.width
                    && panel.rect.height >= self.min_size.height,
                "[{}] panel {} below minimum size: {}x{}",
                context,
                panel.id,
                panel.rect.width,
                panel.rect.height
            );
        }
    }
}
