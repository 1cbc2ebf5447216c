//! # Delimiter
//!
//! Classification of the characters that end a token. The set is fixed by
//! the layout formats this crate front-ends: any whitespace character, plus
//! the special punctuation listed in [`SPECIAL`]. Both lexers consult this
//! module, so a character can never end a token in one reading mode and not
//! in the other.


/// The non-whitespace characters that terminate a token.
pub const SPECIAL: [char; 14] = [
    '(', ')', ',', ':', ';', '/', '#', '[', ']', '{', '}', '*', '"', '\\',
];

/// Return whether `c` is one of the special punctuation characters.
pub fn is_special(c: char) -> bool {
    SPECIAL.contains(&c)
}

/// Return whether `c` ends a token: whitespace, or special punctuation.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || is_special(c)
}

/// Byte-level whitespace, for scanning raw stream content.
///
/// Agrees with [`is_delimiter`]'s whitespace notion over the ASCII range.
/// Bytes of multi-byte UTF-8 sequences are all above the ASCII range and
/// never match, so non-ASCII text passes through words untouched.
pub(crate) fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}
