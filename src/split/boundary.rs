use memchr::{memchr, memchr2, memchr3};

/// Byte offset of the first char of `hay` that equals one of `needles`.
///
/// Uses `memchr` when every needle is ASCII: an ASCII byte never occurs
/// inside a multi-byte UTF-8 sequence, so a byte match is always a char
/// boundary.
pub(crate) fn find_any(hay: &str, needles: &[char]) -> Option<usize> {
    let mut bytes = [0u8; 3];
    if needles.len() <= bytes.len() && needles.iter().all(char::is_ascii) {
        for (b, c) in bytes.iter_mut().zip(needles) {
            *b = *c as u8;
        }
        let hay = hay.as_bytes();
        return match needles.len() {
            0 => None,
            1 => memchr(bytes[0], hay),
            2 => memchr2(bytes[0], bytes[1], hay),
            _ => memchr3(bytes[0], bytes[1], bytes[2], hay),
        };
    }
    hay.find(|c: char| needles.contains(&c))
}

/// Unconsumed input of one split call.
///
/// `finished` is only set once the last field has been handed out. After a
/// real separator the cursor stays open even with nothing left, so the
/// following (possibly empty) field is still produced.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    rest:     &'a str,
    finished: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: Option<&'a str>) -> Self {
        let rest = text.unwrap_or_default();
        Self {
            rest,
            finished: rest.is_empty(),
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn rest(&self) -> &'a str {
        self.rest
    }

    pub(crate) fn advance_to(&mut self, rest: &'a str) {
        debug_assert!(rest.len() <= self.rest.len());
        self.rest = rest;
    }

    pub(crate) fn finish(&mut self) {
        self.rest = "";
        self.finished = true;
    }

    /// Appends everything up to the next `split_char` to `field` and moves
    /// past that separator, or takes the whole remainder when there is none.
    pub(crate) fn take_unquoted(&mut self, field: &mut String, split_char: char) {
        match find_any(self.rest, &[split_char]) {
            Some(idx) => {
                field.push_str(&self.rest[..idx]);
                self.rest = &self.rest[idx + split_char.len_utf8()..];
            },
            None => {
                field.push_str(self.rest);
                self.finish();
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{find_any, Cursor};

    #[test]
    fn test_find_any_ascii() {
        assert_eq!(find_any("ab;c", &[';']), Some(2));
        assert_eq!(find_any("ab;c'", &['\'', ';']), Some(2));
        assert_eq!(find_any("ab\\c'", &['\'', ';', '\\']), Some(2));
        assert_eq!(find_any("abc", &[';']), None);
        assert_eq!(find_any("", &[';']), None);
        assert_eq!(find_any("abc", &[]), None);
    }

    #[test]
    fn test_find_any_multibyte() {
        // byte offsets, not char counts
        assert_eq!(find_any("é;x", &[';']), Some(2));
        assert_eq!(find_any("aé§b", &['§']), Some(3));
        assert_eq!(find_any("aé§b", &['§', ';']), Some(3));
        assert_eq!(find_any("ab", &['§']), None);
    }

    #[test]
    fn test_cursor_take_unquoted() {
        let mut cursor = Cursor::new(Some("ab;cd"));
        let mut field = String::new();
        cursor.take_unquoted(&mut field, ';');
        assert_eq!(field, "ab");
        assert_eq!(cursor.rest(), "cd");
        assert!(!cursor.is_finished());

        let mut field = String::new();
        cursor.take_unquoted(&mut field, ';');
        assert_eq!(field, "cd");
        assert!(cursor.is_finished());
    }

    #[test]
    fn test_cursor_stays_open_after_trailing_separator() {
        let mut cursor = Cursor::new(Some("a;"));
        let mut field = String::new();
        cursor.take_unquoted(&mut field, ';');
        assert_eq!(cursor.rest(), "");
        assert!(!cursor.is_finished());
    }

    #[test]
    fn test_cursor_empty_input() {
        assert!(Cursor::new(None).is_finished());
        assert!(Cursor::new(Some("")).is_finished());
    }
}
