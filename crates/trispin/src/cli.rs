use std::io::Read;
use std::path::PathBuf;

use eyre::{Context, Result};
use serde::Serialize;
use trispin_prefs::{Preferences, persist};
use trispin_view::{PuzzleController, Raycaster};

use crate::{report, script};

/// Trispin command-line interface
///
/// Drives a 3x3x3 puzzle without a window and prints the resulting cubie
/// transforms.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the one in the config directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Replay a YAML event script and print the cubie transforms as JSON.
    Replay {
        /// Event script to replay, use '-' for stdin.
        #[arg(value_parser)]
        script_file: clio::Input,

        /// Keep ticking at the end until no turn is in progress.
        #[arg(long)]
        settle: bool,
    },
    /// Apply key turns one at a time and print the cubie transforms as JSON.
    Turn {
        /// Characters to type (such as `rUf`).
        keys: String,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Also write them to the preferences file.
        #[arg(long)]
        save: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs_path = match args.prefs {
        Some(path) => Some(path),
        None => persist::prefs_file()
            .inspect_err(|e| log::warn!("{e}"))
            .ok()
            .filter(|path| path.exists()),
    };
    if let Some(path) = &prefs_path {
        log::info!("Loading preferences from {}", path.display());
    }
    let prefs = Preferences::load(prefs_path.as_deref());

    match args.subcommand {
        Subcommand::Replay {
            mut script_file,
            settle,
        } => {
            let mut buffer = String::new();
            script_file
                .read_to_string(&mut buffer)
                .context("error reading event script")?;
            let events = script::parse(&buffer)?;

            let mut controller = new_controller(&prefs)?;
            script::run(&mut controller, &Raycaster, &events);
            if settle {
                let ticks = controller.settle();
                log::debug!(
                    "settled after {ticks} ticks ({} per turn)",
                    controller.animator().ticks_per_turn(),
                );
            }
            write_json_output(&report::cube_report(controller.cube()))
        }

        Subcommand::Turn { keys } => {
            let mut controller = new_controller(&prefs)?;
            for c in keys.chars() {
                if controller.key_press(c) {
                    controller.settle();
                } else {
                    log::warn!("no face is bound to {c:?}");
                }
            }
            write_json_output(&report::cube_report(controller.cube()))
        }

        Subcommand::Prefs { save } => {
            print!("{}", prefs.to_yaml()?);
            if save {
                let path = match prefs_path {
                    Some(path) => path,
                    None => persist::prefs_file()?,
                };
                persist::save(&path, &prefs)
                    .wrap_err_with(|| format!("error saving preferences to {}", path.display()))?;
                log::info!("Saved preferences to {}", path.display());
            }
            Ok(())
        }
    }
}

fn new_controller(prefs: &Preferences) -> Result<PuzzleController> {
    PuzzleController::new(prefs).context("error constructing puzzle")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
