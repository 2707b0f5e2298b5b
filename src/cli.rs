//! Command-line interface implementation for indigo.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for indigo.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "indigo: endpoint scaffolding and database type generation for layered web projects",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a new HTTP endpoint (controller, action, query, route)
    Endpoint {
        /// Project directory containing the src/ tree
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing endpoint files without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Generate the database type file from the live catalog
    DbTypes {
        /// Project directory containing the src/ tree
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },

    /// Create SQL stub files for migrations and point the scripts at them
    SqlStubs {
        /// Project directory containing the migrations/ tree
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },

    /// Create a reusable schema helper
    Helper {
        /// Project directory containing the src/ tree
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand | ErrorKind::MissingRequiredArgument
            ) {
                Args::command().print_help().unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
