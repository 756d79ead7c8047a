//! CLI command implementations.
//!
//! Lexical commands read their arguments under the configured style and
//! never touch the filesystem:
//! - `normalize`, `relative --lexical`, `proximate --lexical`
//! - `decompose`, `components`
//!
//! Every other command works on the host filesystem with host paths:
//! - `absolute`, `canonical`, `relative`, `proximate`
//! - `copy`, `mkdir`, `remove`, `rename`
//! - `ls`, `stat`, `space`, `temp-dir`
//!
//! Plus `validate` and `completions`.

pub mod absolute;
pub mod canonical;
pub mod completions;
pub mod components;
pub mod copy;
pub mod decompose;
pub mod ls;
pub mod mkdir;
pub mod normalize;
pub mod relative;
pub mod remove;
pub mod rename;
pub mod space;
pub mod stat;
pub mod temp_dir;
pub mod validate;

pub use absolute::AbsoluteCommand;
pub use canonical::CanonicalCommand;
pub use completions::CompletionsCommand;
pub use components::ComponentsCommand;
pub use copy::CopyCommand;
pub use decompose::DecomposeCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use normalize::NormalizeCommand;
pub use relative::{ProximateCommand, RelativeCommand};
pub use remove::RemoveCommand;
pub use rename::RenameCommand;
pub use space::SpaceCommand;
pub use stat::StatCommand;
pub use temp_dir::TempDirCommand;
pub use validate::ValidateCommand;
