//! View module - rendering the model into a window surface
//!
//! Contains the Renderer struct, which owns the softbuffer surface, the
//! back buffer and the optional title font.

pub mod canvas;
pub mod chrome;
pub mod frame;
pub mod hit_test;

pub use canvas::render_canvas;
pub use chrome::{resize_handle_at, PanelChrome, RESIZE_BORDER, TITLE_BAR_HEIGHT};
pub use frame::{Frame, TextPainter};
pub use hit_test::{
    cursor_for_gesture, cursor_for_hit, hit_test_canvas, CursorShape, EventResult, HitTarget,
    Point,
};

use anyhow::Result;
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;
use winit::window::Window;

use crate::model::AppModel;
use crate::widgets::WidgetRegistry;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Base UI font size before DPI scaling
const FONT_SIZE: f32 = 13.0;

/// A loaded font with its metrics at the UI size
struct LoadedFont {
    font: Font,
    font_size: f32,
    line_metrics: LineMetrics,
}

/// Load a TTF/OTF font from disk
pub fn load_font(path: &Path) -> Result<Font> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read font {}: {}", path.display(), e))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", path.display(), e))
}

pub struct Renderer {
    font: Option<LoadedFont>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer.
    /// Softbuffer doesn't guarantee buffer contents are preserved between frames,
    /// so we draw into our own buffer and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    glyph_cache: GlyphCache,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    /// Create a renderer for `window`
    ///
    /// `font` is optional; without it panels render without titles.
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Option<Font>,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        // Explicitly resize the surface to match window dimensions
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font = font.and_then(|font| {
            let font_size = FONT_SIZE * scale_factor as f32;
            match font.horizontal_line_metrics(font_size) {
                Some(line_metrics) => Some(LoadedFont {
                    font,
                    font_size,
                    line_metrics,
                }),
                None => {
                    tracing::warn!("Font has no horizontal line metrics, titles disabled");
                    None
                }
            }
        });

        let buffer_size = (width as usize) * (height as usize);

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; buffer_size],
            width,
            height,
            glyph_cache: HashMap::new(),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render the model and present it
    pub fn render(&mut self, model: &AppModel, registry: &WidgetRegistry) -> Result<()> {
        let (want_w, want_h) = (
            model.viewport.width.max(1.0) as u32,
            model.viewport.height.max(1.0) as u32,
        );
        if self.width != want_w || self.height != want_h {
            self.width = want_w;
            self.height = want_h;
            self.back_buffer
                .resize((self.width as usize) * (self.height as usize), 0);
            self.surface
                .resize(non_zero(self.width), non_zero(self.height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            match &self.font {
                Some(loaded) => {
                    let line_height = loaded.line_metrics.new_line_size.ceil() as usize;
                    let mut painter = TextPainter::new(
                        &loaded.font,
                        &mut self.glyph_cache,
                        loaded.font_size,
                        loaded.line_metrics.ascent,
                        line_height,
                    );
                    render_canvas(&mut frame, model, registry, Some(&mut painter));
                }
                None => render_canvas(&mut frame, model, registry, None),
            }
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        if buffer.len() == self.back_buffer.len() {
            buffer.copy_from_slice(&self.back_buffer);
        } else {
            tracing::debug!(
                surface = buffer.len(),
                back = self.back_buffer.len(),
                "Surface size mismatch, skipping copy"
            );
        }
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}
