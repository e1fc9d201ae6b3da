use std::iter::FusedIterator;

use super::boundary::{find_any, Cursor};

/// Fields of a text whose delimiter is its own escape.
///
/// Created by [`split_self_escape`].
#[derive(Debug)]
pub struct SelfEscapeSplit<'a> {
    cursor:     Cursor<'a>,
    split_char: char,
}

/// Splits `text` on `split_char`, where a doubled `split_char` stands for
/// one literal `split_char` inside the field.
///
/// `None` is treated like an empty text and yields no fields. A trailing
/// unpaired delimiter yields a trailing empty field.
///
/// ```
/// # use split_rs::split::split_self_escape;
/// let fields: Vec<_> = split_self_escape("a;b;;c", ';').collect();
/// assert_eq!(fields, ["a", "b;c"]);
/// ```
pub fn split_self_escape<'a, T>(text: T, split_char: char) -> SelfEscapeSplit<'a>
where
    T: Into<Option<&'a str>>,
{
    SelfEscapeSplit {
        cursor: Cursor::new(text.into()),
        split_char,
    }
}

/// Scans one field. Pairs of delimiters are read left to right, so a run of
/// `2k + 1` delimiters gives `k` literals followed by one separator.
pub(crate) fn next_field(cursor: &mut Cursor<'_>, split_char: char) -> String {
    let mut field = String::new();
    loop {
        let rest = cursor.rest();
        let Some(idx) = find_any(rest, &[split_char]) else {
            field.push_str(rest);
            cursor.finish();
            return field;
        };
        field.push_str(&rest[..idx]);
        let after = &rest[idx + split_char.len_utf8()..];
        match after.strip_prefix(split_char) {
            Some(after_pair) => {
                field.push(split_char);
                cursor.advance_to(after_pair);
            },
            None => {
                cursor.advance_to(after);
                return field;
            },
        }
    }
}

impl Iterator for SelfEscapeSplit<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.cursor.is_finished() {
            return None;
        }
        Some(next_field(&mut self.cursor, self.split_char))
    }
}

impl FusedIterator for SelfEscapeSplit<'_> {}
