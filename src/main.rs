//! Headless driver that spawns one umbrella and walks it to a target.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use brolly::{
    init_logging, SetUmbrellaDestination, SpawnUmbrella, Umbrella, UmbrellaMode, UmbrellaPlugin,
    UmbrellaSettings,
};
use clap::Parser;
use log::info;

/// Simulate an umbrella chasing a target
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Use ping-pong easing and the canopy silhouette
    #[arg(long)]
    ping_pong: bool,
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of 60 Hz ticks to simulate
    #[arg(long, default_value_t = 240)]
    ticks: u32,
    /// Target x coordinate
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    target_x: f32,
    /// Target y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    target_y: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match &args.config {
        Some(path) => UmbrellaSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => UmbrellaSettings::default(),
    };
    let mode = if args.ping_pong {
        UmbrellaMode::PingPong
    } else {
        settings.mode
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .insert_resource(settings)
        .add_plugins(UmbrellaPlugin);

    app.world_mut().trigger(SpawnUmbrella {
        mode: Some(mode),
        position: Vec2::ZERO,
    });
    app.world_mut().flush();
    let umbrella = app
        .world_mut()
        .query_filtered::<Entity, With<Umbrella>>()
        .iter(app.world())
        .next()
        .context("umbrella was not spawned")?;

    app.world_mut().trigger(SetUmbrellaDestination {
        umbrella,
        target: Vec2::new(args.target_x, args.target_y),
    });

    for tick in 1..=args.ticks {
        app.update();
        if tick % 30 == 0 {
            log_state(&app, umbrella, tick)?;
        }
    }
    log_state(&app, umbrella, args.ticks)
}

fn log_state(app: &App, umbrella: Entity, tick: u32) -> Result<()> {
    let actor = app
        .world()
        .get::<Umbrella>(umbrella)
        .context("umbrella disappeared")?;
    info!(
        "tick {tick}: position {} destination {} velocity {} easing {:.3}",
        actor.position(),
        actor.destination(),
        actor.velocity(),
        actor.easing()
    );
    Ok(())
}
