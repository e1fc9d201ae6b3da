//! Method syntax for the splitters.

use crate::split::{self, EscapeSplit, QuotedSplit, SelfEscapeSplit, SplitError};

/// Provides the splitters as methods on `str`.
///
/// ```
/// use split_rs::split_ext::SplitExt;
///
/// let fields: Vec<_> = "a;'b;c'".split_quoted(';', '\'', '\'').unwrap().collect();
/// assert_eq!(fields, ["a", "b;c"]);
/// ```
pub trait SplitExt {
    /// See [`split::split_self_escape`].
    fn split_self_escape(&self, split_char: char) -> SelfEscapeSplit<'_>;

    /// See [`split::split_with_escape`].
    fn split_with_escape(&self, split_char: char, escape_char: char) -> EscapeSplit<'_>;

    /// See [`split::split_quoted`].
    ///
    /// # Errors
    /// [`SplitError`] when `quote_char` or `escape_char` equals `split_char`.
    fn split_quoted(
        &self,
        split_char: char,
        quote_char: char,
        escape_char: char,
    ) -> Result<QuotedSplit<'_>, SplitError>;
}

impl SplitExt for str {
    fn split_self_escape(&self, split_char: char) -> SelfEscapeSplit<'_> {
        split::split_self_escape(self, split_char)
    }

    fn split_with_escape(&self, split_char: char, escape_char: char) -> EscapeSplit<'_> {
        split::split_with_escape(self, split_char, escape_char)
    }

    fn split_quoted(
        &self,
        split_char: char,
        quote_char: char,
        escape_char: char,
    ) -> Result<QuotedSplit<'_>, SplitError> {
        split::split_quoted(self, split_char, quote_char, escape_char)
    }
}
