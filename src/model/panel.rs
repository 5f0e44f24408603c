//! Panel records - one placed, interactive widget instance on the canvas

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a panel
///
/// Assigned by the layout store at creation and never reused. Displays and
/// parses as `p<N>` (e.g. `p1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl FromStr for PanelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('p')
            .and_then(|n| n.parse::<u64>().ok())
            .map(PanelId)
            .ok_or_else(|| format!("Invalid panel id '{}'", s))
    }
}

impl From<PanelId> for String {
    fn from(id: PanelId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PanelId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Tag identifying which widget to mount inside a panel
///
/// Known widgets get their own variant; anything else round-trips through
/// `Custom` so the set stays open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetKind {
    GraphExplorer,
    TimeseriesChart,
    GeoMap,
    FlowSankey,
    DataTable,
    Custom(String),
}

impl WidgetKind {
    /// Stable string tag used in config files
    pub fn tag(&self) -> &str {
        match self {
            WidgetKind::GraphExplorer => "graph-explorer",
            WidgetKind::TimeseriesChart => "timeseries-chart",
            WidgetKind::GeoMap => "geo-map",
            WidgetKind::FlowSankey => "flow-sankey",
            WidgetKind::DataTable => "data-table",
            WidgetKind::Custom(tag) => tag,
        }
    }

    /// Human-readable name for palettes and default titles
    pub fn display_name(&self) -> &str {
        match self {
            WidgetKind::GraphExplorer => "Graph Explorer",
            WidgetKind::TimeseriesChart => "Timeseries",
            WidgetKind::GeoMap => "Map",
            WidgetKind::FlowSankey => "Flows",
            WidgetKind::DataTable => "Table",
            WidgetKind::Custom(tag) => tag,
        }
    }

    /// All built-in kinds, in palette order
    pub fn builtin() -> [WidgetKind; 5] {
        [
            WidgetKind::GraphExplorer,
            WidgetKind::TimeseriesChart,
            WidgetKind::GeoMap,
            WidgetKind::FlowSankey,
            WidgetKind::DataTable,
        ]
    }
}

impl From<&str> for WidgetKind {
    fn from(tag: &str) -> Self {
        match tag {
            "graph-explorer" => WidgetKind::GraphExplorer,
            "timeseries-chart" => WidgetKind::TimeseriesChart,
            "geo-map" => WidgetKind::GeoMap,
            "flow-sankey" => WidgetKind::FlowSankey,
            "data-table" => WidgetKind::DataTable,
            other => WidgetKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for WidgetKind {
    fn from(tag: String) -> Self {
        WidgetKind::from(tag.as_str())
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Panel placement in canvas pixel units
///
/// `x`/`y` are unbounded (the canvas scrolls); size is floored by the store.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Same rect moved by `(-dx, -dy)`, for converting canvas to screen space
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x - dx, self.y - dy, self.width, self.height)
    }
}

/// Minimum panel dimensions enforced on every size change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinSize {
    pub width: f32,
    pub height: f32,
}

impl Default for MinSize {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 80.0,
        }
    }
}

impl MinSize {
    #[inline]
    pub fn clamp_width(&self, width: f32) -> f32 {
        width.max(self.width)
    }

    #[inline]
    pub fn clamp_height(&self, height: f32) -> f32 {
        height.max(self.height)
    }
}

/// One placed widget instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub rect: PanelRect,
    pub is_draggable: bool,
    pub is_resizable: bool,
    pub z_index: u32,
    /// Passed through to the widget untouched
    #[serde(default)]
    pub props: serde_json::Value,
}

/// Everything needed to create a panel except the id and stacking order
///
/// Also the on-disk shape of an initial panel in `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub rect: PanelRect,
    #[serde(default = "default_true")]
    pub is_draggable: bool,
    #[serde(default = "default_true")]
    pub is_resizable: bool,
    #[serde(default)]
    pub props: serde_json::Value,
}

fn default_true() -> bool {
    true
}

impl PanelConfig {
    /// A draggable, resizable panel titled after its widget kind
    pub fn new(kind: WidgetKind, rect: PanelRect) -> Self {
        Self {
            title: kind.display_name().to_string(),
            kind,
            subtitle: None,
            rect,
            is_draggable: true,
            is_resizable: true,
            props: serde_json::Value::Null,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_props(mut self, props: serde_json::Value) -> Self {
        self.props = props;
        self
    }

    pub fn locked(mut self) -> Self {
        self.is_draggable = false;
        self.is_resizable = false;
        self
    }
}

/// Partial update merged into an existing panel
///
/// `None` fields are left untouched. `subtitle: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelPatch {
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub is_draggable: Option<bool>,
    pub is_resizable: Option<bool>,
    pub props: Option<serde_json::Value>,
}

impl PanelPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn rect(rect: PanelRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn props(props: serde_json::Value) -> Self {
        Self {
            props: Some(props),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
