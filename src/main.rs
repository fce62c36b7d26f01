//! KeyLayout Editor - command line entry point
//!
//! Manages editor settings from the terminal.

use clap::{Parser, Subcommand};
use keylayout_editor::cli::{ConfigArgs, ExitCode};
use keylayout_editor::constants::APP_BINARY_NAME;
use keylayout_editor::logging;

/// KeyLayout Editor - keyboard layout and course editing tools
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code() as i32);
    }

    std::process::exit(ExitCode::Success as i32);
}
