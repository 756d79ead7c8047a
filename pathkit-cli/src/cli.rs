//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CanonicalCommand, CompletionsCommand, ComponentsCommand, CopyCommand,
    DecomposeCommand, LsCommand, MkdirCommand, NormalizeCommand, ProximateCommand,
    RelativeCommand, RemoveCommand, RenameCommand, SpaceCommand, StatCommand, TempDirCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use pathkit::config::StyleSetting;
use std::path::PathBuf;

/// Portable path algebra and file-tree operations.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(version, about = "Portable path algebra and file-tree operations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Grammar for lexical commands (native, posix, windows)
    #[arg(long, value_name = "STYLE", global = true)]
    pub style: Option<StyleSetting>,

    /// Configuration file applied above all other sources
    #[arg(long, value_name = "FILE", global = true, env = "PATHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Lexically normalize paths
    Normalize(NormalizeCommand),

    /// Express a path relative to a base
    Relative(RelativeCommand),

    /// Express a path relative to a base when possible
    Proximate(ProximateCommand),

    /// Show every part of a path
    Decompose(DecomposeCommand),

    /// List the elements of a path
    Components(ComponentsCommand),

    /// Make a path absolute against the current directory
    Absolute(AbsoluteCommand),

    /// Resolve a path to its canonical form
    Canonical(CanonicalCommand),

    /// Copy files, directories and symlinks
    Copy(CopyCommand),

    /// Create directories
    Mkdir(MkdirCommand),

    /// Remove files or directory trees
    Remove(RemoveCommand),

    /// Rename or move an entry
    Rename(RenameCommand),

    /// List directory contents
    Ls(LsCommand),

    /// Show the status of an entry
    Stat(StatCommand),

    /// Show space information for a filesystem
    Space(SpaceCommand),

    /// Print the temporary directory
    TempDir(TempDirCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
