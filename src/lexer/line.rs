use std::io::BufRead;

use super::Token;
use crate::delimiter;
use crate::error::Result;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn lexer(input: &str) -> LineLexer<Cursor<&[u8]>> {
        LineLexer::new(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn delimiter_only_lines_are_skipped() {
        let mut lexer = lexer("   ,,, ;;\nfoo bar\n");
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["foo", "bar"]);
        assert!(lexer.read_tokens().unwrap().is_none());
    }

    #[test]
    fn single_token_line() {
        let mut lexer = lexer("standalone");
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["standalone"]);
    }

    #[test]
    fn consecutive_delimiters_yield_no_empty_tokens() {
        let mut lexer = lexer("a((b))c\n,,x,,\n");
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["x"]);
    }

    #[test]
    fn special_characters_split_within_a_line() {
        let mut lexer = lexer("DIEAREA ( 0 0 ) ( 100 200 ) ;\n");
        assert_eq!(
            lexer.read_tokens().unwrap().unwrap(),
            vec!["DIEAREA", "0", "0", "100", "200"],
        );
    }

    #[test]
    fn final_line_without_newline_still_flushes() {
        let mut lexer = lexer("alpha beta");
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["alpha", "beta"]);
        assert!(lexer.read_tokens().unwrap().is_none());
    }

    #[test]
    fn exhaustion_is_reported_once_and_stays() {
        let mut lexer = lexer("  \n;;;\n ( ) \n");
        assert!(lexer.read_tokens().unwrap().is_none());
        assert!(lexer.read_tokens().unwrap().is_none());
    }

    #[test]
    fn tokenizing_rejoined_output_is_idempotent() {
        let first = lexer("core/row:site_0 [3] {x}\n")
            .read_tokens()
            .unwrap()
            .unwrap();
        let rejoined = first.join(" ");
        let second = lexer(&rejoined).read_tokens().unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn iterator_yields_one_record_per_line() {
        let records: Vec<Vec<Token>> = lexer("a b\n\nc\n;;\nd e f\n")
            .map(|record| record.unwrap())
            .collect();
        assert_eq!(
            records,
            vec![vec!["a", "b"], vec!["c"], vec!["d", "e", "f"]],
        );
    }

    #[test]
    fn non_ascii_text_passes_through() {
        let mut lexer = lexer("héllo wörld\n");
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["héllo", "wörld"]);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut lexer = LineLexer::new(Cursor::new(&[0xff, 0xfe, b'\n'][..]));
        assert!(matches!(
            lexer.read_tokens(),
            Err(crate::error::Error::Encoding(_)),
        ));
    }

    #[test]
    fn caller_keeps_the_stream() {
        let mut stream = Cursor::new("one two\nrest".as_bytes());
        let mut lexer = LineLexer::new(&mut stream);
        assert_eq!(lexer.read_tokens().unwrap().unwrap(), vec!["one", "two"]);
        drop(lexer);
        let mut rest = String::new();
        stream.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "rest");
    }
}

/// Line-mode lexer: for each input line that holds any content, yields the
/// ordered tokens of that line.
///
/// A token ends at any character of the shared delimiter set (whitespace or
/// special punctuation, see [`crate::delimiter`]). Blank lines and lines
/// made of nothing but delimiters are read over transparently, so an empty
/// result can only mean the stream itself ran out; that distinction is what
/// lets callers loop on `read_tokens` without confusing a decorative
/// separator line with the end of a section.
pub struct LineLexer<R> {
    source: R,
    // Scratch for the current raw line, cleared on every call.
    buffer: Vec<u8>,
}

impl<R: BufRead> LineLexer<R> {
    /// Create a lexer reading from `source`.
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: Vec::new(),
        }
    }

    /// Consume the lexer and hand back the underlying stream.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Read lines until one of them yields tokens, and return those tokens.
    ///
    /// Returns `Ok(None)` only when the stream is exhausted without any
    /// remaining line producing a token.
    pub fn read_tokens(&mut self) -> Result<Option<Vec<Token>>> {
        loop {
            self.buffer.clear();
            if self.source.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(None);
            }
            let line = std::str::from_utf8(&self.buffer)?;
            let tokens = split_line(line);
            if !tokens.is_empty() {
                return Ok(Some(tokens));
            }
        }
    }
}

impl<R: BufRead> Iterator for LineLexer<R> {
    type Item = Result<Vec<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_tokens().transpose()
    }
}

/// Split one line on the shared delimiter set, discarding empty spans.
fn split_line(line: &str) -> Vec<Token> {
    line.split(delimiter::is_delimiter)
        .filter(|span| !span.is_empty())
        .map(str::to_owned)
        .collect()
}
