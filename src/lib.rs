//! Splits a text on a single delimiter char, honoring escaped delimiters and
//! quoted fields. See [`split`] for the three splitters.

pub mod split;
pub mod split_ext;

#[cfg(feature = "config")]
pub mod config;

pub use split::{split_quoted, split_self_escape, split_with_escape, SplitError};
pub use split_ext::SplitExt;
