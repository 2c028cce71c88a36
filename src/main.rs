//! Grid snake main entry point.
//!
//! A grid-based snake game built on:
//! - **bevy_ecs** for the entity-component-system substrate
//! - **crossterm** for the terminal frontend
//!
//! # Main Loop
//!
//! 1. Initialize logging, configuration, the ECS world, and the arena
//! 2. Spawn the input thread feeding the crossbeam input bridge
//! 3. Run the tick schedule in fixed order: input pump, render pass,
//!    movement and collision, fruit lifecycle
//! 4. Flush the draw buffer to the terminal and pace to the target FPS
//! 5. Exit when a quit signal was observed
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::prelude::*;
use clap::Parser;

use gridsnake::game::{self, LevelLayout};
use gridsnake::platform::{self, TerminalSession};
use gridsnake::resources::drawbuffer::DrawBuffer;
use gridsnake::resources::framecontext::FrameContext;
use gridsnake::resources::gameconfig::GameConfig;
use gridsnake::resources::input::{InputBridge, InputQueue};
use gridsnake::resources::runstate::RunState;
use gridsnake::systems::fruit::fruit_lifecycle_system;
use gridsnake::systems::input::pump_input_system;
use gridsnake::systems::movement::move_player_system;
use gridsnake::systems::render::render_system;

/// Grid snake on a bevy_ecs simulation core.
#[derive(Parser)]
#[command(version, about = "Grid snake on a bevy_ecs simulation core")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON level layout adding interior walls.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Run N ticks without a terminal, then exit.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default config: {}", e);
    }

    let layout = match &cli.level {
        Some(path) => match LevelLayout::load_from_file(path) {
            Ok(layout) => Some(layout),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => None,
    };
    if let Some(layout) = &layout {
        config.grid_width = layout.grid_width;
        config.grid_height = layout.grid_height;
    }

    let (tx, rx) = crossbeam_channel::unbounded();

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(config.clone());
    world.insert_resource(FrameContext::default());
    world.insert_resource(DrawBuffer::default());
    world.insert_resource(InputQueue::default());
    world.insert_resource(InputBridge::new(rx));
    world.insert_resource(RunState::default());

    game::setup_map(&mut world, layout.as_ref());

    // Fixed per-tick order; deferred commands apply between systems.
    let mut update = Schedule::default();
    update.add_systems(
        (
            pump_input_system,
            render_system,
            move_player_system,
            fruit_lifecycle_system,
        )
            .chain(),
    );

    if let Some(ticks) = cli.headless {
        // No input thread in headless mode; the bridge just stays empty.
        drop(tx);
        for _ in 0..ticks {
            update.run(&mut world);
            if world.resource::<RunState>().quit {
                break;
            }
        }
        log::info!("headless run of {} ticks done", ticks);
        return;
    }

    // --------------- Terminal session + main loop ---------------
    let mut session = TerminalSession::enter().expect("Failed to initialize terminal");
    let _input_thread = platform::spawn_input_thread(tx);
    let frame = Duration::from_secs_f32(1.0 / config.target_fps.max(1) as f32);

    loop {
        update.run(&mut world);
        if world.resource::<RunState>().quit {
            break;
        }
        if let Err(e) = session.present(world.resource::<DrawBuffer>()) {
            log::error!("terminal write failed: {}", e);
            break;
        }
        std::thread::sleep(frame);
    }

    drop(session);
    log::info!("quit signal observed, exiting");
}
