//! Single-char delimiter splitting with three escaping disciplines.
//!
//! - [`split_self_escape`]: the delimiter escapes itself, `;;` is a literal `;`.
//! - [`split_with_escape`]: a distinct escape char protects the delimiter,
//!   `\;` is a literal `;`.
//! - [`split_quoted`]: a field opening with a quote char runs to the next
//!   quote char and may contain delimiters. The quote char is written
//!   literally by doubling it or with a distinct escape char.
//!
//! All of them return lazy iterators: each `next` scans exactly one field.
//! Empty or absent input yields no fields, and a trailing unescaped
//! delimiter yields a trailing empty field.

use thiserror::Error;

mod boundary;
mod escaped;
mod quoted;
mod self_escape;

pub use self::escaped::{split_with_escape, EscapeSplit};
pub use self::quoted::{split_quoted, QuotedSplit};
pub use self::self_escape::{split_self_escape, SelfEscapeSplit};

/// Control characters that cannot work together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("Quote character should be different from split character: {0:?}")]
    QuoteIsDelimiter(char),
    #[error("Escape character should be different from split character: {0:?}")]
    EscapeIsDelimiter(char),
}
