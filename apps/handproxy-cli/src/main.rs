use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use handproxy_common::HandRole;
use handproxy_device::{NullBackend, ScriptedBackend, TrackingNode};
use handproxy_scene::Scene;
use handproxy_sim::{SimInput, SimKey};
use handproxy_tools::TrackerInspector;
use handproxy_tracker::{HandProxyTracker, TrackerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "handproxy-cli", about = "CLI demos for handproxy")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Tracker configuration file (YAML)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and effective configuration
    Info,
    /// Run a scripted device session: connect, track, disconnect, re-resolve
    Track {
        /// Number of ticks to run
        #[arg(short, long, default_value = "120")]
        ticks: u32,
    },
    /// Run a headless keyboard simulation and report displacement
    Simulate {
        /// Number of ticks to run
        #[arg(short, long, default_value = "60")]
        ticks: u32,
        /// Movement speed in units per second
        #[arg(short, long, default_value = "1.0")]
        speed: f32,
    },
}

const DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("handproxy-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("proxy_scale: {}", config.proxy_scale);
            println!("simulate: {}", config.simulate);
            println!("sim_move_speed: {}", config.sim_move_speed);
            println!("sim_rotate_speed: {}", config.sim_rotate_speed);
            println!("exclusive_sim: {}", config.exclusive_sim);
        }
        Commands::Track { ticks } => {
            println!("Scripted tracking session: {ticks} ticks at {DT:.4}s");

            let mut scene = Scene::new();
            let mut tracker = HandProxyTracker::attach(&mut scene, config)?;
            let mut backend = ScriptedBackend::new();
            let device = backend.connect(TrackingNode::LeftHand);

            let half = ticks / 2;
            for tick in 0..ticks {
                // Sweep the controller along +X; rotation appears later so
                // early ticks exercise the partial-pose path.
                let t = tick as f32 * DT;
                backend.set_position(device, Some(Vec3::new(t, 1.2, 0.0)));
                if tick > ticks / 4 {
                    backend.set_rotation(device, Some(Quat::from_axis_angle(Vec3::Y, t)));
                }

                // Simulated disconnect at the halfway point; the very next
                // tick re-resolves onto the replacement.
                if tick == half {
                    backend.disconnect(device);
                    let replacement = backend.connect(TrackingNode::LeftHand);
                    backend.set_position(replacement, Some(Vec3::new(0.0, 1.2, -1.0)));
                    println!("tick {tick}: disconnected device#{}", device.0);
                }

                tracker.update(&backend, &mut scene, None, DT);
                if tick % 30 == 0 || tick == half + 1 {
                    println!("tick {tick}:");
                    println!("{}", TrackerInspector::summary(&tracker, &scene));
                }
            }

            tracker.detach(&mut scene);
            println!("detached; scene objects remaining: {}", scene.object_count());
        }
        Commands::Simulate { ticks, speed } => {
            let duration = ticks as f32 * DT;
            println!("Headless simulation: hold 'D' for {duration:.2}s at {speed} u/s");

            let mut scene = Scene::new();
            let config = TrackerConfig {
                sim_move_speed: speed,
                ..config
            };
            let mut tracker = HandProxyTracker::attach(&mut scene, config)?;
            let backend = NullBackend::new();

            let mut input = SimInput::new();
            input.press(SimKey::KeyD);
            for _ in 0..ticks {
                tracker.update(&backend, &mut scene, Some(&input), DT);
            }

            let pos = scene
                .get(tracker.visual(HandRole::Left))
                .map(|obj| obj.transform.position)
                .unwrap_or_default();
            println!("left visual at ({:.4}, {:.4}, {:.4})", pos.x, pos.y, pos.z);
            println!("expected displacement: {:.4}", speed * duration);
        }
    }

    Ok(())
}
