//! Application handler and window management

use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use paneldock::cli::StartupConfig;
use paneldock::commands::Cmd;
use paneldock::messages::{AppMsg, GestureMsg, Msg};
use paneldock::model::AppModel;
use paneldock::update::update;
use paneldock::view::{load_font, CursorShape, Point, Renderer};
use paneldock::widgets::WidgetRegistry;

use super::input::handle_key;
use super::mouse::{handle_mouse_move, handle_mouse_press, handle_mouse_release};

/// Pixels scrolled per wheel "line"
const LINE_SCROLL_PX: f32 = 40.0;

pub struct App {
    model: AppModel,
    registry: WidgetRegistry,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    cursor: CursorShape,
    font_path: Option<std::path::PathBuf>,
    quit_requested: bool,
}

fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Default => CursorIcon::Default,
        CursorShape::Pointer => CursorIcon::Pointer,
        CursorShape::Grab => CursorIcon::Grab,
        CursorShape::Grabbing => CursorIcon::Grabbing,
        CursorShape::ResizeNorthSouth => CursorIcon::NsResize,
        CursorShape::ResizeEastWest => CursorIcon::EwResize,
        CursorShape::ResizeNorthEastSouthWest => CursorIcon::NeswResize,
        CursorShape::ResizeNorthWestSouthEast => CursorIcon::NwseResize,
    }
}

impl App {
    pub fn new(window_width: u32, window_height: u32, startup_config: StartupConfig) -> Self {
        let workspace = startup_config.workspace;
        let model = AppModel::new(&workspace, window_width, window_height);

        Self {
            model,
            registry: WidgetRegistry::default(),
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            cursor: CursorShape::Default,
            font_path: workspace.font_path,
            quit_requested: false,
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let font = match &self.font_path {
            Some(path) => match load_font(path) {
                Ok(font) => Some(font),
                Err(e) => {
                    tracing::warn!("{}, panel titles disabled", e);
                    None
                }
            },
            None => {
                tracing::info!("No font_path configured, panel titles disabled");
                None
            }
        };

        let renderer = Renderer::new(window, context, font)?;
        let (width, height) = renderer.dimensions();
        update(&mut self.model, Msg::App(AppMsg::Resize(width, height)));

        self.renderer = Some(renderer);
        Ok(())
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("paneldock")
            .with_inner_size(LogicalSize::new(1280, 800));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        self.init_renderer(Rc::clone(&window), &context)?;
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        if shape == self.cursor {
            return;
        }
        self.cursor = shape;
        if let Some(window) = &self.window {
            window.set_cursor(cursor_icon(shape));
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                handle_key(
                    &mut self.model,
                    &event.logical_key,
                    self.modifiers.control_key(),
                    self.modifiers.super_key(),
                )
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                let (cmd, cursor) =
                    handle_mouse_move(&mut self.model, Point::new(position.x, position.y));
                self.set_cursor(cursor);
                cmd
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.mouse_position?;
                let pt = Point::new(x, y);
                match state {
                    ElementState::Pressed => handle_mouse_press(&mut self.model, pt, *button)
                        .cmd()
                        .copied(),
                    ElementState::Released => {
                        handle_mouse_release(&mut self.model, pt, *button)
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (-x * LINE_SCROLL_PX, -y * LINE_SCROLL_PX),
                    MouseScrollDelta::PixelDelta(pos) => (-pos.x as f32, -pos.y as f32),
                };
                // Shift turns vertical wheel motion into horizontal scrolling
                let (dx, dy) = if self.modifiers.shift_key() && dx == 0.0 {
                    (dy, 0.0)
                } else {
                    (dx, dy)
                };
                update(&mut self.model, Msg::App(AppMsg::Scroll { dx, dy }))
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                update(&mut self.model, Msg::Gesture(GestureMsg::Cancel))
            }
            WindowEvent::Focused(false) => {
                update(&mut self.model, Msg::Gesture(GestureMsg::Cancel))
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model, &self.registry)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.is_quit() {
            self.quit_requested = true;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                tracing::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = match &self.window {
            Some(window) if window_id == window.id() && !should_exit => {
                match self.handle_event(&event) {
                    Some(cmd) => {
                        let needs_redraw = cmd.needs_redraw();
                        self.process_cmd(cmd);
                        needs_redraw
                    }
                    None => false,
                }
            }
            _ => false,
        };

        if should_exit || self.quit_requested {
            tracing::info!("Exiting");
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
