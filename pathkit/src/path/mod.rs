//! Path grammar and lexical algebra.
//!
//! Paths are plain strings partitioned as
//! `root-name? root-directory? relative-path`. Nothing here touches the
//! filesystem; the same text can be read under either [`Style`] on any host.
//!
//! # Key Concepts
//!
//! ## Root-name
//!
//! Only Windows style has root-names: a drive (`C:`), a UNC server
//! (`\\server`), or a device prefix (`\\?`, `\\.`, `\??`). A Windows path is
//! absolute only with both a root-name and a root-directory.
//!
//! ## Elements
//!
//! Iterating a path yields the root-name, the root-directory as a single
//! preferred separator, and each component of the relative path. A trailing
//! separator yields one final empty element, which is how `a/b/` differs from
//! `a/b`.
//!
//! # Examples
//!
//! ```
//! use pathkit::FsPath;
//!
//! let p = FsPath::posix("/srv/./www/../data/");
//! assert_eq!(p.lexically_normal().as_str(), "/srv/data/");
//!
//! let rel = FsPath::posix("/srv/data/x").lexically_relative(&FsPath::posix("/srv/www"));
//! assert_eq!(rel.as_str(), "../data/x");
//! ```

mod algebra;
mod fs_path;
mod grammar;
mod iter;
pub mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use fs_path::FsPath;
pub use iter::{Components, PathIter};
pub use style::Style;
