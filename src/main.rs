//! indigo's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches each subcommand to
//! its generator module.

use indigo::{
    cli::{get_args, Args, Command},
    emitter,
    error::{default_error_handler, Result},
    helper, migrations,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    scaffold,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Dispatches the parsed subcommand.
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new();

    match args.command {
        Command::Endpoint { dir, force } => scaffold::run(&prompt, &engine, &dir, force),
        Command::DbTypes { dir } => emitter::run(&dir),
        Command::SqlStubs { dir } => migrations::run(&dir),
        Command::Helper { dir } => helper::run(&prompt, &engine, &dir),
    }
}
