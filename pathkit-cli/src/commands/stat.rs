//! Stat command implementation.

use crate::error::CliError;
use crate::utils::{format_timestamp, host_filesystem, host_path, GlobalOptions};
use clap::{Args, ValueEnum};
use pathkit::{Error, ErrorKind, FileType};
use std::io::Write;

/// Show the status of an entry.
#[derive(Args)]
pub struct StatCommand {
    /// Entry to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Report on a symlink itself rather than its target
    #[arg(long)]
    pub no_follow: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: StatFormat,
}

/// Output format for the stat command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatFormat {
    /// One `name: value` line per field
    Human,
    /// A JSON object
    Json,
}

impl StatCommand {
    /// Execute the stat command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let fs = host_filesystem();
        let path = host_path(&self.path);
        let status = if self.no_follow {
            fs.symlink_status(&path)?
        } else {
            fs.status(&path)?
        };
        if !status.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, &path).into());
        }

        let size = match status.file_type {
            FileType::Regular => Some(fs.file_size(&path)?),
            _ => None,
        };
        let target = match status.file_type {
            FileType::Symlink => Some(fs.read_symlink(&path)?.into_string()),
            _ => None,
        };
        // Link counts and times of a symlink itself are not portable.
        let (links, modified) = if status.file_type == FileType::Symlink {
            (None, None)
        } else {
            (
                Some(fs.hard_link_count(&path)?),
                Some(format_timestamp(fs.last_write_time(&path)?)),
            )
        };
        let mode = status.permissions.map(|p| p.to_string());

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            StatFormat::Human => {
                writeln!(handle, "path: {path}")?;
                writeln!(handle, "type: {}", status.file_type)?;
                if let Some(ref mode) = mode {
                    writeln!(handle, "permissions: {mode}")?;
                }
                if let Some(size) = size {
                    writeln!(handle, "size: {size}")?;
                }
                if let Some(links) = links {
                    writeln!(handle, "links: {links}")?;
                }
                if let Some(ref modified) = modified {
                    writeln!(handle, "modified: {modified}")?;
                }
                if let Some(ref target) = target {
                    writeln!(handle, "target: {target}")?;
                }
            }
            StatFormat::Json => {
                let json = serde_json::json!({
                    "path": path,
                    "type": status.file_type.to_string(),
                    "permissions": mode,
                    "size": size,
                    "links": links,
                    "modified": modified,
                    "target": target,
                });
                serde_json::to_writer_pretty(&mut handle, &json)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
