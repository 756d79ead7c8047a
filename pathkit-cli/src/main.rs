//! Main entry point for the pathkit CLI.
//!
//! Lexical commands (`normalize`, `relative`, `decompose`, ...) work on path
//! text alone; the rest operate on the host filesystem.

use clap::Parser;
use pathkit::Logger;
use pathkit_cli::cli::{Cli, Command};
use pathkit_cli::utils::{resolve_log_level, GlobalOptions};

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        style: cli.style,
        config: cli.config,
    };

    // Library diagnostics go through `log`; route them to stderr.
    if let Err(e) = Logger::new(resolve_log_level(&global)).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Relative(cmd) => cmd.execute(&global),
        Command::Proximate(cmd) => cmd.execute(&global),
        Command::Decompose(cmd) => cmd.execute(&global),
        Command::Components(cmd) => cmd.execute(&global),
        Command::Absolute(cmd) => cmd.execute(&global),
        Command::Canonical(cmd) => cmd.execute(&global),
        Command::Copy(cmd) => cmd.execute(&global),
        Command::Mkdir(cmd) => cmd.execute(&global),
        Command::Remove(cmd) => cmd.execute(&global),
        Command::Rename(cmd) => cmd.execute(&global),
        Command::Ls(cmd) => cmd.execute(&global),
        Command::Stat(cmd) => cmd.execute(&global),
        Command::Space(cmd) => cmd.execute(&global),
        Command::TempDir(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
