//! Relative and proximate command implementations.
//!
//! Both have a lexical form, which only reads the text, and a resolving
//! form, which weakly canonicalizes both operands on the host first.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, lexical_style, GlobalOptions};
use clap::Args;
use pathkit::FsPath;

/// Express a path relative to a base.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to express
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Base to express it from (defaults to the current directory)
    #[arg(value_name = "BASE")]
    pub base: Option<String>,

    /// Compare the text only, without touching the filesystem
    #[arg(long)]
    pub lexical: bool,
}

/// Express a path relative to a base when possible, otherwise unchanged.
#[derive(Args)]
pub struct ProximateCommand {
    /// Path to express
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Base to express it from (defaults to the current directory)
    #[arg(value_name = "BASE")]
    pub base: Option<String>,

    /// Compare the text only, without touching the filesystem
    #[arg(long)]
    pub lexical: bool,
}

/// Operands in the grammar the chosen mode reads them under.
fn operands(
    global: &GlobalOptions,
    path: String,
    base: Option<String>,
    lexical: bool,
) -> Result<(FsPath, FsPath), CliError> {
    if lexical {
        let style = lexical_style(global)?;
        let base = base.ok_or_else(|| {
            CliError::InvalidArguments("a BASE is required with --lexical".to_string())
        })?;
        return Ok((
            FsPath::with_style(path, style),
            FsPath::with_style(base, style),
        ));
    }

    let base = match base {
        Some(base) => host_path(&base),
        None => host_filesystem().current_path()?,
    };
    Ok((host_path(&path), base))
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (path, base) = operands(global, self.path, self.base, self.lexical)?;
        let relative = if self.lexical {
            path.lexically_relative(&base)
        } else {
            host_filesystem().relative(&path, &base)?
        };

        if relative.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "No relative path from '{base}' to '{path}'"
            )));
        }
        println!("{relative}");
        Ok(())
    }
}

impl ProximateCommand {
    /// Execute the proximate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (path, base) = operands(global, self.path, self.base, self.lexical)?;
        let proximate = if self.lexical {
            path.lexically_proximate(&base)
        } else {
            host_filesystem().proximate(&path, &base)?
        };
        println!("{proximate}");
        Ok(())
    }
}
