//! `trigon`: headless driver for the triangle geometry core.
//!
//! Every subcommand prints JSON on stdout. Logs go to stderr.


use std::time::Instant;

use canvas::config::{ConfigError, DiagramConfig};
use canvas::construction::CommitStyle;
use canvas::hinge::Hinge;
use canvas::input::Arm;
use canvas::{DiagramCore, ModuleId};
use clap::{Parser, Subcommand};
use kernel::{Point, Triangle, Vertex, derived_metrics};
use sequencer::choreography::Scene;
use sequencer::{ProofMode, Sequencer, SequencerConfig, SequencerError};
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid point {0:?}; expected X,Y")]
    InvalidPoint(String),
    #[error("module `{0}` has no guided construction")]
    NotConstruction(ModuleId),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("animation failed: {0}")]
    Sequencer(#[from] SequencerError),
    #[error("animation state channel closed before the timeline finished")]
    ChannelClosed,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "trigon", about = "Triangle geometry core: metrics, constructions, hinge and proof timelines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derived metrics for a triangle.
    Metrics {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, default_value = "200,50")]
        a: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, default_value = "100,300")]
        b: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, default_value = "300,300")]
        c: Point,
    },
    /// Run a construction module's full click script and print the reveal.
    Construct {
        #[arg(long)]
        module: ModuleId,
    },
    /// Evaluate a hinge configuration.
    Hinge {
        #[arg(long, default_value_t = 80.0)]
        left: f64,
        #[arg(long, default_value_t = 100.0)]
        right: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = -45.0)]
        left_angle: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = -135.0)]
        right_angle: f64,
    },
    /// Play a proof timeline in real time, one JSON line per state change.
    Animate {
        #[arg(long)]
        mode: ProofMode,
        /// Include the scene placements with every state.
        #[arg(long)]
        scenes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = DiagramConfig::from_env()?;

    match cli.command {
        Command::Metrics { a, b, c } => print_json(&metrics_report(&config, Triangle::new(a, b, c))?),
        Command::Construct { module } => print_json(&construct_report(config, module)?),
        Command::Hinge { left, right, left_angle, right_angle } => {
            print_json(&hinge_report(&config, left, right, left_angle, right_angle)?)
        }
        Command::Animate { mode, scenes } => run_animate(mode, scenes).await,
    }
}

fn parse_point(raw: &str) -> Result<Point, CliError> {
    let invalid = || CliError::InvalidPoint(raw.to_owned());
    let (x, y) = raw.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    let p = Point::new(x, y);
    if p.is_finite() { Ok(p) } else { Err(invalid()) }
}

fn metrics_report(config: &DiagramConfig, triangle: Triangle) -> Result<Value, CliError> {
    let metrics = derived_metrics(&triangle, &config.tolerances);
    Ok(json!({
        "triangle": triangle,
        "metrics": serde_json::to_value(metrics)?,
    }))
}

fn construct_report(config: DiagramConfig, module: ModuleId) -> Result<Value, CliError> {
    let Some(kind) = module.profile().construction else {
        return Err(CliError::NotConstruction(module));
    };
    let mut core = DiagramCore::with_config(module, config);
    let mut actions = Vec::new();
    for v in Vertex::ALL {
        match kind.commit_style() {
            CommitStyle::SelectThenTarget => {
                actions.extend(core.click_vertex(v));
                actions.extend(core.click_target(v));
            }
            CommitStyle::Target => actions.extend(core.click_target(v)),
            CommitStyle::Vertex => actions.extend(core.click_vertex(v)),
        }
    }
    info!(%module, actions = actions.len(), "construction script finished");
    Ok(json!({
        "module": module,
        "triangle": core.triangle(),
        "actions": serde_json::to_value(&actions)?,
        "drawn": serde_json::to_value(core.drawn_elements())?,
        "reveal": serde_json::to_value(core.reveal())?,
    }))
}

fn hinge_report(
    config: &DiagramConfig,
    left: f64,
    right: f64,
    left_angle: f64,
    right_angle: f64,
) -> Result<Value, CliError> {
    let mut hinge = Hinge::new(config.hinge);
    let left = hinge.set_arm_length(Arm::Left, left);
    let right = hinge.set_arm_length(Arm::Right, right);
    hinge.set_arm_angle_deg(Arm::Left, left_angle);
    hinge.set_arm_angle_deg(Arm::Right, right_angle);
    Ok(json!({
        "left": left,
        "right": right,
        "tips": [hinge.tip(Arm::Left), hinge.tip(Arm::Right)],
        "gap": hinge.gap(),
        "can_form_triangle": hinge.can_form_triangle(),
        "is_formed": hinge.is_formed(),
        "readout": serde_json::to_value(hinge.readout())?,
    }))
}

async fn run_animate(mode: ProofMode, scenes: bool) -> Result<(), CliError> {
    let config = SequencerConfig::from_env()?;
    let mut sequencer = Sequencer::new(mode, config);
    let mut rx = sequencer.subscribe();
    sequencer.mount()?;
    if mode.requires_manual_start() {
        sequencer.start()?;
    }

    let started = Instant::now();
    loop {
        let state = *rx.borrow_and_update();
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let mut line = json!({ "elapsed_ms": elapsed_ms, "state": serde_json::to_value(state)? });
        if scenes {
            line["scene"] = serde_json::to_value(Scene::of(mode, &state))?;
        }
        println!("{}", serde_json::to_string(&line)?);
        if state.is_finished {
            return Ok(());
        }
        if rx.changed().await.is_err() {
            return Err(CliError::ChannelClosed);
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
