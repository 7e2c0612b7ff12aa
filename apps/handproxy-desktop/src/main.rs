use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use handproxy_device::NullBackend;
use handproxy_scene::Scene;
use handproxy_sim::{SimInput, SimKey};
use handproxy_tools::TrackerInspector;
use handproxy_tracker::{HandProxyTracker, TrackerConfig};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "handproxy-desktop", about = "Desktop harness for handproxy")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Tracker configuration file (YAML)
    #[arg(long)]
    config: Option<String>,
}

/// Application state: the tracker, its scene, and this tick's input snapshot.
struct AppState {
    scene: Scene,
    tracker: HandProxyTracker,
    backend: NullBackend,
    input: SimInput,
    last_frame: Instant,
    last_report: Instant,
}

impl AppState {
    fn new(config: TrackerConfig) -> Result<Self> {
        let mut scene = Scene::new();
        let tracker = HandProxyTracker::attach(&mut scene, config)?;
        Ok(Self {
            scene,
            tracker,
            // No headset on the desktop path; the fallback does the driving.
            backend: NullBackend::new(),
            input: SimInput::new(),
            last_frame: Instant::now(),
            last_report: Instant::now(),
        })
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.tracker
            .update(&self.backend, &mut self.scene, Some(&self.input), dt);
        // Pointer deltas are per-tick; start accumulating the next one.
        self.input.take_pointer_delta();

        if (now - self.last_report).as_secs_f32() >= 1.0 {
            self.last_report = now;
            let summary = TrackerInspector::summary(&self.tracker, &self.scene);
            tracing::info!("\n{summary}");
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(sim_key) = map_key(key) {
            self.input.set_key(sim_key, pressed);
            return;
        }
        if pressed && key == KeyCode::KeyH {
            let invisible = !self.tracker.is_invisible();
            self.tracker.set_invisible(&mut self.scene, invisible);
        }
    }
}

fn map_key(key: KeyCode) -> Option<SimKey> {
    match key {
        KeyCode::KeyW => Some(SimKey::KeyW),
        KeyCode::KeyA => Some(SimKey::KeyA),
        KeyCode::KeyS => Some(SimKey::KeyS),
        KeyCode::KeyD => Some(SimKey::KeyD),
        KeyCode::KeyQ => Some(SimKey::KeyQ),
        KeyCode::KeyE => Some(SimKey::KeyE),
        KeyCode::ArrowUp => Some(SimKey::ArrowUp),
        KeyCode::ArrowDown => Some(SimKey::ArrowDown),
        KeyCode::ArrowLeft => Some(SimKey::ArrowLeft),
        KeyCode::ArrowRight => Some(SimKey::ArrowRight),
        KeyCode::PageUp => Some(SimKey::PageUp),
        KeyCode::PageDown => Some(SimKey::PageDown),
        _ => None,
    }
}

struct App {
    state: AppState,
    window: Option<Window>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("handproxy")
            .with_inner_size(PhysicalSize::new(640u32, 360));
        let window = event_loop.create_window(attrs).expect("create window");
        self.window = Some(window);
        tracing::info!("WASD/QE left hand, arrows/PgUp/PgDn right hand, mouse buttons rotate, H hides");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let held = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.state.input.primary_held = held,
                    MouseButton::Right => self.state.input.secondary_held = held,
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => {
                self.state.tick();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.input.pointer_delta += Vec2::new(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };

    tracing::info!("handproxy-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        state: AppState::new(config)?,
        window: None,
    };
    event_loop.run_app(&mut app)?;

    Ok(())
}
