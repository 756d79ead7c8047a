//! Path syntax styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The syntax a path is interpreted under.
///
/// POSIX style has no root-names and accepts only `/` as a separator.
/// Windows style recognizes drive letters, UNC shares and device prefixes as
/// root-names, and accepts both `/` and `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Single-root, `/`-separated paths.
    Posix,
    /// Drive and UNC aware, `\`-preferring paths.
    Windows,
}

impl Style {
    /// The style of the host platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator emitted when this style builds paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Style;
    ///
    /// assert_eq!(Style::Posix.preferred_separator(), '/');
    /// assert_eq!(Style::Windows.preferred_separator(), '\\');
    /// ```
    #[must_use]
    pub const fn preferred_separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `b` separates components under this style.
    #[must_use]
    pub const fn is_separator(self, b: u8) -> bool {
        match self {
            Self::Posix => b == b'/',
            Self::Windows => b == b'/' || b == b'\\',
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            "native" => Ok(Self::native()),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}
