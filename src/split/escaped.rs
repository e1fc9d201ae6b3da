use std::iter::FusedIterator;

use super::boundary::{find_any, Cursor};
use super::self_escape;

/// Fields of a text whose delimiter is protected by an escape character.
///
/// Created by [`split_with_escape`].
#[derive(Debug)]
pub struct EscapeSplit<'a> {
    cursor:      Cursor<'a>,
    split_char:  char,
    escape_char: char,
}

/// Splits `text` on `split_char`; `escape_char` directly in front of
/// `split_char` turns it into a literal and is dropped.
///
/// An escape character anywhere else is kept as ordinary content. When
/// `split_char == escape_char` this is the same as
/// [`split_self_escape`](super::split_self_escape).
///
/// ```
/// # use split_rs::split::split_with_escape;
/// let fields: Vec<_> = split_with_escape(r"a\;b;c\", ';', '\\').collect();
/// assert_eq!(fields, ["a;b", r"c\"]);
/// ```
pub fn split_with_escape<'a, T>(text: T, split_char: char, escape_char: char) -> EscapeSplit<'a>
where
    T: Into<Option<&'a str>>,
{
    EscapeSplit {
        cursor: Cursor::new(text.into()),
        split_char,
        escape_char,
    }
}

fn next_field(cursor: &mut Cursor<'_>, split_char: char, escape_char: char) -> String {
    let mut field = String::new();
    loop {
        let rest = cursor.rest();
        let Some(idx) = find_any(rest, &[split_char]) else {
            field.push_str(rest);
            cursor.finish();
            return field;
        };
        let head = &rest[..idx];
        let after = &rest[idx + split_char.len_utf8()..];
        // Only the escape right before the delimiter counts, so escapes never
        // pair up among themselves.
        match head.strip_suffix(escape_char) {
            Some(unescaped) => {
                field.push_str(unescaped);
                field.push(split_char);
                cursor.advance_to(after);
            },
            None => {
                field.push_str(head);
                cursor.advance_to(after);
                return field;
            },
        }
    }
}

impl Iterator for EscapeSplit<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.cursor.is_finished() {
            return None;
        }
        let field = if self.split_char == self.escape_char {
            self_escape::next_field(&mut self.cursor, self.split_char)
        } else {
            next_field(&mut self.cursor, self.split_char, self.escape_char)
        };
        Some(field)
    }
}

impl FusedIterator for EscapeSplit<'_> {}
