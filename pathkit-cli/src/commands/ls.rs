//! Ls command implementation.
//!
//! Lists a directory, or a whole tree with `--recursive`, in human-readable,
//! JSON or CSV form.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use log::debug;
use pathkit::{DirectoryOptions, FileSystem, FsPath, FsProvider};
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 2] = ["path", "type"];

/// List directory contents.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// List everything below the directory
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Descend through symlinks to directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Treat unreadable directories as empty
    #[arg(long)]
    pub skip_permission_denied: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ListFormat,
}

/// Output format for the ls command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// One path per line
    Human,
    /// A JSON array of `{path, type}` objects
    Json,
    /// CSV with a header row
    Csv,
}

impl LsCommand {
    /// The effective iteration options.
    pub fn options(&self, defaults: DirectoryOptions) -> DirectoryOptions {
        DirectoryOptions {
            follow_directory_symlink: defaults.follow_directory_symlink || self.follow_symlinks,
            skip_permission_denied: defaults.skip_permission_denied
                || self.skip_permission_denied,
        }
    }

    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let options = self.options(DirectoryOptions::from(&config));

        let fs = host_filesystem();
        let dir = host_path(&self.path);
        let entries = if self.recursive {
            fs.recursive_directory_iterator(&dir, options)?
        } else {
            fs.directory_iterator(&dir, options)?
        };

        let rows = typed_rows(&fs, entries)?;

        match self.format {
            ListFormat::Human => format_as_lines(&rows),
            ListFormat::Json => format_as_json(&rows),
            ListFormat::Csv => format_as_csv(&rows),
        }
    }
}

/// Pairs each listed entry with its type. Entries that vanished after the
/// listing was taken are dropped.
fn typed_rows<P: FsProvider>(
    fs: &FileSystem<P>,
    entries: impl IntoIterator<Item = FsPath>,
) -> Result<Vec<(FsPath, String)>, CliError> {
    let mut rows = Vec::new();
    for entry in entries {
        let status = fs.symlink_status(&entry)?;
        if !status.exists() {
            debug!("{entry} disappeared during listing");
            continue;
        }
        rows.push((entry, status.file_type.to_string()));
    }
    Ok(rows)
}

fn format_as_lines(rows: &[(FsPath, String)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (path, _) in rows {
        writeln!(handle, "{path}")?;
    }
    Ok(())
}

fn format_as_json(rows: &[(FsPath, String)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = rows
        .iter()
        .map(|(path, file_type)| {
            serde_json::json!({
                "path": path,
                "type": file_type,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)?;
    writeln!(handle)?;
    Ok(())
}

fn format_as_csv(rows: &[(FsPath, String)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS)?;
    for (path, file_type) in rows {
        writer.write_record([path.as_str(), file_type.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathkit::{MemoryProvider, Style};

    #[test]
    fn test_vanished_entries_are_dropped() {
        let provider = MemoryProvider::new(Style::Posix);
        provider.write_file(&provider.path("/tmp/kept"), "x").unwrap();
        let fs = FileSystem::new(provider);

        let listed = [FsPath::posix("/tmp/kept"), FsPath::posix("/tmp/gone")];
        let rows = typed_rows(&fs, listed).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.as_str(), "/tmp/kept");
        assert_eq!(rows[0].1, "regular");
    }
}
