use std::iter::FusedIterator;

use super::boundary::{find_any, Cursor};
use super::SplitError;

/// How the quote character is written as a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteEscape {
    /// The quote character is its own escape: `''` at the start of a field.
    Doubled,
    /// A distinct escape character in front of the quote: `\'`.
    Char(char),
}

/// What the first characters of a field turn out to be.
#[derive(Debug)]
enum FieldStart<'a> {
    /// Nothing left after a separator.
    Empty,
    /// An opening quote; holds the text right after it.
    Quoted(&'a str),
    /// A literal char consumed from the start of the field, followed by
    /// unquoted content.
    Literal(char, &'a str),
    /// Ordinary unquoted content.
    Unquoted,
}

/// Fields of a text where a field may be wrapped in quotes.
///
/// Created by [`split_quoted`].
#[derive(Debug)]
pub struct QuotedSplit<'a> {
    cursor:      Cursor<'a>,
    split_char:  char,
    quote_char:  char,
    escape:      QuoteEscape,
    /// The previous field ended at a closing quote not followed by the
    /// delimiter; the next one starts right there and is never quoted.
    after_close: bool,
}

/// Splits `text` on `split_char`, where a field opening with `quote_char`
/// runs up to the next `quote_char` and may contain delimiters.
///
/// `escape_char` only protects the quote character. With
/// `quote_char == escape_char` a doubled quote at the start of a field is a
/// literal quote; otherwise `escape_char` followed by `quote_char` is. An
/// unterminated quote is not an error: the field is then the quote and
/// everything after it, verbatim.
///
/// # Errors
/// [`SplitError`] when `quote_char` or `escape_char` equals `split_char`,
/// whatever the text.
///
/// ```
/// # use split_rs::split::split_quoted;
/// let fields: Vec<_> = split_quoted("a;'b;c';d", ';', '\'', '\\').unwrap().collect();
/// assert_eq!(fields, ["a", "b;c", "d"]);
/// ```
pub fn split_quoted<'a, T>(
    text: T,
    split_char: char,
    quote_char: char,
    escape_char: char,
) -> Result<QuotedSplit<'a>, SplitError>
where
    T: Into<Option<&'a str>>,
{
    if split_char == quote_char {
        return Err(SplitError::QuoteIsDelimiter(split_char));
    }
    if split_char == escape_char {
        return Err(SplitError::EscapeIsDelimiter(split_char));
    }
    let escape = if quote_char == escape_char {
        QuoteEscape::Doubled
    } else {
        QuoteEscape::Char(escape_char)
    };
    Ok(QuotedSplit {
        cursor: Cursor::new(text.into()),
        split_char,
        quote_char,
        escape,
        after_close: false,
    })
}

impl<'a> QuotedSplit<'a> {
    /// Quotes are only recognized at the first char of a field.
    fn field_start(&self, rest: &'a str) -> FieldStart<'a> {
        let Some(first) = rest.chars().next() else {
            return FieldStart::Empty;
        };
        let after = &rest[first.len_utf8()..];
        if first == self.quote_char {
            if self.escape == QuoteEscape::Doubled {
                if let Some(after_pair) = after.strip_prefix(self.quote_char) {
                    return FieldStart::Literal(self.quote_char, after_pair);
                }
            }
            return FieldStart::Quoted(after);
        }
        if let QuoteEscape::Char(escape_char) = self.escape {
            if first == escape_char {
                return match after.strip_prefix(self.quote_char) {
                    Some(after_quote) => FieldStart::Literal(self.quote_char, after_quote),
                    // the escape protects nothing, what follows is scanned as usual
                    None => FieldStart::Literal(escape_char, after),
                };
            }
        }
        FieldStart::Unquoted
    }

    /// Scans a quoted region. `opening` starts at the opening quote, `body`
    /// right after it.
    fn scan_quoted(&mut self, opening: &'a str, mut body: &'a str) -> String {
        let controls = match self.escape {
            QuoteEscape::Doubled => [self.quote_char, self.quote_char],
            QuoteEscape::Char(escape_char) => [self.quote_char, escape_char],
        };
        let needles = match self.escape {
            QuoteEscape::Doubled => &controls[..1],
            QuoteEscape::Char(_) => &controls[..],
        };
        let mut field = String::new();
        loop {
            let Some(idx) = find_any(body, needles) else {
                // unterminated, the opening quote is literal after all
                self.cursor.finish();
                return opening.to_owned();
            };
            field.push_str(&body[..idx]);
            let tail = &body[idx..];

            if let Some(after_quote) = tail.strip_prefix(self.quote_char) {
                if let Some(next) = after_quote.strip_prefix(self.split_char) {
                    self.cursor.advance_to(next);
                } else if after_quote.is_empty() {
                    self.cursor.finish();
                } else {
                    self.cursor.advance_to(after_quote);
                    self.after_close = true;
                }
                return field;
            }

            // only reachable with a distinct escape char
            let escape_char = controls[1];
            let after_escape = &tail[escape_char.len_utf8()..];
            match after_escape.strip_prefix(self.quote_char) {
                Some(after_quote) => {
                    field.push(self.quote_char);
                    body = after_quote;
                },
                None => {
                    field.push(escape_char);
                    body = after_escape;
                },
            }
        }
    }

    fn next_field(&mut self) -> String {
        let rest = self.cursor.rest();
        let mut field = String::new();
        if std::mem::take(&mut self.after_close) {
            self.cursor.take_unquoted(&mut field, self.split_char);
            return field;
        }
        match self.field_start(rest) {
            FieldStart::Empty => {
                self.cursor.finish();
                return field;
            },
            FieldStart::Quoted(body) => return self.scan_quoted(rest, body),
            FieldStart::Literal(c, after) => {
                field.push(c);
                self.cursor.advance_to(after);
            },
            FieldStart::Unquoted => {},
        }
        self.cursor.take_unquoted(&mut field, self.split_char);
        field
    }
}

impl Iterator for QuotedSplit<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.cursor.is_finished() {
            return None;
        }
        Some(self.next_field())
    }
}

impl FusedIterator for QuotedSplit<'_> {}
