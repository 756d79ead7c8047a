//! Build script for pathkit-cli.
//!
//! Generates the `pathkit.1` man page into OUT_DIR with clap_mangen. The
//! command structure is restated here because a build script cannot depend on
//! the crate it builds.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Portable path algebra and file-tree operations")
        .long_about(
            "Lexical path algebra under POSIX or Windows grammar, and file-tree operations \
             (copy, remove, iterate, canonicalize) on the host filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Grammar for lexical commands (native, posix, windows)")
                .value_name("STYLE")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file applied above all other sources")
                .value_name("FILE")
                .global(true)
                .env("PATHKIT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Lexically normalize paths")
                .long_about("Remove dot elements, resolve dot-dot and collapse separators"),
            Command::new("relative")
                .about("Express a path relative to a base")
                .long_about("Print the path relative to BASE; --lexical skips filesystem lookups"),
            Command::new("proximate")
                .about("Express a path relative to a base when possible")
                .long_about("Like relative, but print the path unchanged when no relative form exists"),
            Command::new("decompose")
                .about("Show every part of a path")
                .long_about("Print root-name, root-directory, parent, filename, stem and extension"),
            Command::new("components")
                .about("List the elements of a path")
                .long_about("Print each element on its own line, optionally in reverse"),
            Command::new("absolute")
                .about("Make a path absolute against the current directory"),
            Command::new("canonical")
                .about("Resolve a path to its canonical form")
                .long_about("Resolve symlinks and dot elements; --weak allows a missing tail"),
            Command::new("copy")
                .about("Copy files, directories and symlinks")
                .long_about("Copy with configurable existing-destination, symlink and form policies"),
            Command::new("mkdir")
                .about("Create directories"),
            Command::new("remove")
                .about("Remove files or directory trees"),
            Command::new("rename")
                .about("Rename or move an entry"),
            Command::new("ls")
                .about("List directory contents")
                .long_about("List a directory or, with --recursive, a whole tree"),
            Command::new("stat")
                .about("Show the status of an entry"),
            Command::new("space")
                .about("Show space information for a filesystem"),
            Command::new("temp-dir")
                .about("Print the temporary directory"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathkit configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("pathkit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
