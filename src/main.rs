//! Bouncing Shapes entry point
//!
//! Parses the command line, loads the scene and font, and either opens the
//! window or runs a fixed number of ticks headless.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command, value_parser};
use env_logger::Env;

use bouncing_shapes::app::{self, Session};
use bouncing_shapes::renderer::LabelFont;
use bouncing_shapes::settings::{Mode, Settings};
use bouncing_shapes::sim::{self, SimState, TickInput};
use bouncing_shapes::SceneConfig;

const DEFAULT_CONFIG: &str = "config.txt";
const DEFAULT_FONT: &str = "arial.ttf";

fn cli() -> Command {
    Command::new("bouncing-shapes")
        .about("Colored shapes bouncing around a window, flashing when they collide")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Scene config file")
                .default_value(DEFAULT_CONFIG)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("PATH")
                .help("TrueType font used for labels")
                .default_value(DEFAULT_FONT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .value_name("PATH")
                .help("Optional JSON presentation settings")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("Program variant: simulation, editor or widgets")
                .default_value("simulation"),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .value_name("TICKS")
                .help("Run this many ticks without a window and print the final state as JSON")
                .value_parser(value_parser!(u64)),
        )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(cli().get_matches()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: ArgMatches) -> Result<()> {
    let mode_name = matches
        .get_one::<String>("mode")
        .map(String::as_str)
        .unwrap_or("simulation");
    let Some(mode) = Mode::from_str(mode_name) else {
        bail!("unknown mode {mode_name:?} (expected simulation, editor or widgets)");
    };

    let settings = match matches.get_one::<PathBuf>("settings") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let state = if mode.has_shapes() {
        let path = matches
            .get_one::<PathBuf>("config")
            .context("no config path")?;
        SceneConfig::load(path)?.into_state()
    } else {
        SimState::default()
    };

    if let Some(&ticks) = matches.get_one::<u64>("headless") {
        return run_headless(state, ticks);
    }

    let font_path = matches.get_one::<PathBuf>("font").context("no font path")?;
    let font = LabelFont::load(font_path, settings.label_size)?;

    log::info!("Starting {} variant", mode.as_str());
    app::run(Session::new(mode, settings, state), font)
}

fn run_headless(mut state: SimState, ticks: u64) -> Result<()> {
    log::info!("Running {ticks} ticks headless");
    let input = TickInput::default();
    for _ in 0..ticks {
        sim::tick(&mut state, &input);
    }
    let json = serde_json::to_string_pretty(&state).context("failed to serialize state")?;
    println!("{json}");
    Ok(())
}
