//! Convert a FEMTIC resistivity model into an XYZ point cloud
//!
//! Reads `mesh.dat` and `resistivity_block_iter<N>.dat` from the current
//! directory and writes `resistivity_xyz_iter<N>.dat` next to them.

// standard library
use std::error::Error as StdError;
use std::path::PathBuf;
use std::process::ExitCode;

// external crates
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

// femtools
use femtools_xyz::{read_parameter_file, Converter};

/// Convert a FEMTIC resistivity model into an XYZ point cloud
#[derive(Parser, Debug)]
#[command(name = "femtic2xyz", version, about, long_about = None)]
struct Cli {
    /// Parameter file with iteration, origin (km) and excluded blocks
    param_file: PathBuf,

    /// Skip elements that belong to excluded blocks
    #[arg(long)]
    apply_exclusions: bool,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(path) => {
            debug!("Finished {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", error_chain(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Box<dyn StdError>> {
    let mut config = read_parameter_file(&cli.param_file)?;
    config.apply_exclusions = cli.apply_exclusions;

    let mut converter = Converter::new(config);
    if cli.quiet {
        converter.disable_progress();
    }

    Ok(converter.run()?)
}

/// Errors only when quiet, info by default
fn init_logging(cli: &Cli) -> Result<(), log::SetLoggerError> {
    let verbosity = if cli.quiet {
        0
    } else {
        2 + cli.verbose as usize
    };

    stderrlog::new()
        .modules([
            module_path!(),
            "femtools_xyz",
            "femtools_mesh",
            "femtools_resistivity",
        ])
        .verbosity(verbosity)
        .show_module_names(false)
        .init()
}

/// Message and every source on a single line
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(e) = source {
        message.push_str(": ");
        message.push_str(&e.to_string());
        source = e.source();
    }
    message
}
