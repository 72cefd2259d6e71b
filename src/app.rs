//! Windowed application runner
//!
//! [`Session`] owns everything that changes frame to frame and can be driven
//! without a window. [`run`] wraps it in a winit event loop: one tick and one
//! rendered frame per redraw, paced at the configured frame rate.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::renderer::{Canvas, Frame, LabelFont, RenderState, draw_scene};
use crate::settings::{Mode, Settings};
use crate::sim::{self, Color, ShapeEdit, SimEvent, SimState, TickInput};
use crate::ui::{ShapeEditor, UiKey, WidgetsDemo};

/// Panel drawn over the scene
#[derive(Debug, Clone)]
pub enum Overlay {
    None,
    Editor(ShapeEditor),
    Widgets(WidgetsDemo),
}

impl Overlay {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Simulation => Overlay::None,
            Mode::Editor => Overlay::Editor(ShapeEditor::new()),
            Mode::Widgets => Overlay::Widgets(WidgetsDemo::new()),
        }
    }
}

/// Simulation plus the variant's panel
pub struct Session {
    pub mode: Mode,
    pub settings: Settings,
    pub state: SimState,
    pub overlay: Overlay,
    /// Edits queued by the panel for the next tick
    pending: Vec<ShapeEdit>,
}

impl Session {
    pub fn new(mode: Mode, settings: Settings, state: SimState) -> Self {
        Self {
            mode,
            settings,
            state,
            overlay: Overlay::for_mode(mode),
            pending: Vec::new(),
        }
    }

    /// Route a key to the panel
    pub fn key(&mut self, key: UiKey) {
        match &mut self.overlay {
            Overlay::None => {}
            Overlay::Editor(editor) => {
                if let Some(edit) = editor.handle(key, &self.state.shapes) {
                    self.pending.push(edit);
                }
            }
            Overlay::Widgets(demo) => demo.handle(key),
        }
    }

    pub fn pending_edits(&self) -> &[ShapeEdit] {
        &self.pending
    }

    /// Run one tick with the queued edits
    pub fn step(&mut self) -> Vec<SimEvent> {
        let input = TickInput {
            edits: std::mem::take(&mut self.pending),
        };
        if !self.mode.has_shapes() {
            return Vec::new();
        }
        sim::tick(&mut self.state, &input)
    }

    pub fn background(&self) -> Color {
        self.settings.background_for(self.mode)
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.state.canvas()
    }

    /// Draw the scene and panel for the current state
    pub fn draw(&self, canvas: &mut impl Canvas) {
        if self.mode.has_shapes() {
            draw_scene(&self.state, &self.settings, canvas);
        }
        match &self.overlay {
            Overlay::None => {}
            Overlay::Editor(editor) => editor.draw(&self.state, canvas),
            Overlay::Widgets(demo) => demo.draw(canvas),
        }
    }
}

/// Map a pressed key to panel navigation
pub fn ui_key(key: &Key, shift: bool) -> Option<UiKey> {
    match key {
        Key::Named(NamedKey::Tab) if shift => Some(UiKey::Prev),
        Key::Named(NamedKey::Tab) => Some(UiKey::Next),
        Key::Named(NamedKey::ArrowUp) => Some(UiKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(UiKey::Down),
        Key::Named(NamedKey::ArrowLeft) => Some(UiKey::Left),
        Key::Named(NamedKey::ArrowRight) => Some(UiKey::Right),
        Key::Named(NamedKey::Enter | NamedKey::Space) => Some(UiKey::Activate),
        _ => None,
    }
}

/// Open the window and run until it is closed
pub fn run(session: Session, font: LabelFont) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let frame_time = Duration::from_secs_f64(1.0 / session.settings.effective_frame_rate() as f64);

    let mut app = App {
        session,
        font,
        window: WindowState::Pending,
        init_error: None,
        frame_time,
        next_frame: Instant::now(),
        shift: false,
    };

    event_loop.run_app(&mut app).context("event loop failed")?;

    if let Some(err) = app.init_error {
        return Err(err);
    }
    log::info!("Window closed after {} ticks", app.session.state.time_ticks);
    Ok(())
}

/// Winit only allows creating windows once resumed
enum WindowState {
    Pending,
    Running {
        window: Arc<Window>,
        renderer: RenderState,
    },
}

struct App {
    session: Session,
    font: LabelFont,
    window: WindowState,
    init_error: Option<anyhow::Error>,
    frame_time: Duration,
    next_frame: Instant,
    shift: bool,
}

impl App {
    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<WindowState> {
        let canvas = self.session.canvas_size();
        let attrs = WindowAttributes::default()
            .with_title(self.session.settings.title_for(self.session.mode))
            .with_inner_size(PhysicalSize::new(canvas.x as u32, canvas.y as u32));

        let window = Arc::new(event_loop.create_window(attrs).context("failed to create window")?);
        let renderer = pollster::block_on(RenderState::new(window.clone(), canvas))
            .context("failed to initialize renderer")?;
        log::info!(
            "Opened {}x{} window ({})",
            canvas.x,
            canvas.y,
            self.session.mode.as_str()
        );
        window.request_redraw();
        Ok(WindowState::Running { window, renderer })
    }

    fn on_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        if event.state != ElementState::Pressed {
            return;
        }
        if event.logical_key == Key::Named(NamedKey::Escape) {
            event_loop.exit();
            return;
        }
        if let Some(key) = ui_key(&event.logical_key, self.shift) {
            self.session.key(key);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if matches!(self.window, WindowState::Running { .. }) {
            return;
        }
        match self.create_window(event_loop) {
            Ok(state) => {
                self.window = state;
                self.next_frame = Instant::now();
            }
            Err(err) => {
                log::error!("{err:#}");
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event, event_loop),
            WindowEvent::Resized(size) => {
                if let WindowState::Running { renderer, .. } = &mut self.window {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let WindowState::Running { window, renderer } = &mut self.window else {
                    return;
                };

                self.session.step();

                let mut frame = Frame::new(&mut self.font);
                self.session.draw(&mut frame);

                match renderer.render(&frame.vertices, self.session.background()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = window.inner_size();
                        renderer.resize(size.width, size.height);
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        event_loop.exit();
                    }
                    Err(err) => log::warn!("Surface error during render: {err}"),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let WindowState::Running { window, .. } = &self.window else {
            return;
        };
        let now = Instant::now();
        if now >= self.next_frame {
            window.request_redraw();
            self.next_frame = now + self.frame_time;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingCanvas;
    use crate::sim::{EditChange, Shape};

    fn session(mode: Mode) -> Session {
        let shapes = vec![Shape::rectangle(
            "R",
            Vec2::new(10.0, 10.0),
            Vec2::new(1.0, 0.0),
            Color::WHITE,
            Vec2::splat(20.0),
        )];
        Session::new(mode, Settings::default(), SimState::new(200, 200, shapes))
    }

    #[test]
    fn test_keys_map_to_navigation() {
        assert_eq!(ui_key(&Key::Named(NamedKey::Tab), false), Some(UiKey::Next));
        assert_eq!(ui_key(&Key::Named(NamedKey::Tab), true), Some(UiKey::Prev));
        assert_eq!(ui_key(&Key::Named(NamedKey::Space), false), Some(UiKey::Activate));
        assert_eq!(ui_key(&Key::Character("a".into()), false), None);
    }

    #[test]
    fn test_editor_edit_applies_next_step() {
        let mut session = session(Mode::Editor);
        session.key(UiKey::Right);
        assert_eq!(session.pending_edits().len(), 1);
        assert_eq!(
            session.pending_edits()[0].change,
            EditChange::Velocity(Vec2::new(1.5, 0.0))
        );

        session.step();
        assert!(session.pending_edits().is_empty());
        assert_eq!(session.state.shapes[0].vel.x, 1.5);
        assert_eq!(session.state.shapes[0].pos.x, 11.5);
    }

    #[test]
    fn test_simulation_ignores_keys() {
        let mut session = session(Mode::Simulation);
        session.key(UiKey::Right);
        assert!(session.pending_edits().is_empty());
        session.step();
        assert_eq!(session.state.shapes[0].pos.x, 11.0);
    }

    #[test]
    fn test_widgets_mode_draws_no_shapes() {
        let mut session = session(Mode::Widgets);
        session.step();
        assert_eq!(session.state.time_ticks, 0);

        let mut canvas = RecordingCanvas::new(8.0, 16.0);
        session.draw(&mut canvas);
        assert!(canvas.texts().contains(&"Control Panel"));
        assert!(!canvas.texts().contains(&"R"));
        assert_eq!(session.background(), Color::DARK_GRAY);
    }

    #[test]
    fn test_editor_draws_scene_then_panel() {
        let session = session(Mode::Editor);
        let mut canvas = RecordingCanvas::new(8.0, 16.0);
        session.draw(&mut canvas);
        let texts = canvas.texts();
        let label = texts.iter().position(|t| *t == "R").unwrap();
        let title = texts.iter().position(|t| *t == "Shape Editor").unwrap();
        assert!(label < title);
    }
}
