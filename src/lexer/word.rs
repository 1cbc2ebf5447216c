use std::io::BufRead;

use super::Token;
use crate::delimiter;
use crate::error::Result;

/// Stream-mode lexer: yields whitespace-delimited words, dropping comment
/// lines on the fly.
///
/// A word whose leading bytes equal the configured comment marker opens a
/// comment that runs to the end of its source line; the marker word and the
/// line remainder are both consumed without being emitted, and reading
/// resumes on the next line. Words are bounded by whitespace alone; special
/// punctuation splits tokens only in line mode (see
/// [`LineLexer`](super::LineLexer)).
///
/// Extraction happens directly on the underlying stream, one buffered chunk
/// at a time, so after any call the stream stands exactly where lexing
/// stopped; the lexer itself keeps only scratch buffers between calls.
pub struct WordLexer<R> {
    source: R,
    comment: String,
    // Scratch for the word being accumulated, cleared on every call.
    word: Vec<u8>,
}

impl<R: BufRead> WordLexer<R> {
    /// Create a lexer reading from `source`, treating every word that
    /// starts with `comment` as a comment opener.
    ///
    /// An empty marker disables comment handling.
    pub fn new(source: R, comment: impl Into<String>) -> Self {
        Self {
            source,
            comment: comment.into(),
            word: Vec::new(),
        }
    }

    /// Consume the lexer and hand back the underlying stream.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Extract the next accepted word.
    ///
    /// Comment openers are skipped together with the remainder of their
    /// line. Returns `Ok(None)` once the stream is exhausted; an empty
    /// token is never produced.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if !self.skip_space()? {
                return Ok(None);
            }
            let word = self.read_word()?;
            if !self.comment.is_empty() && word.starts_with(&self.comment) {
                self.discard_line()?;
                continue;
            }
            return Ok(Some(word));
        }
    }

    /// Extract up to `n` accepted words.
    ///
    /// The result is shorter than `n` exactly when the stream ran out
    /// first; callers detect a short read by comparing lengths.
    pub fn next_n_tokens(&mut self, n: usize) -> Result<Vec<Token>> {
        let mut tokens = Vec::with_capacity(n);
        while tokens.len() < n {
            match self.next_token()? {
                Some(token) => tokens.push(token),
                None => break,
            }
        }
        Ok(tokens)
    }

    /// Advance past whitespace; `false` means the stream ended first.
    fn skip_space(&mut self) -> Result<bool> {
        loop {
            let buffer = self.source.fill_buf()?;
            if buffer.is_empty() {
                return Ok(false);
            }
            match buffer.iter().position(|&byte| !delimiter::is_space(byte)) {
                Some(at) => {
                    self.source.consume(at);
                    return Ok(true);
                }
                None => {
                    let all = buffer.len();
                    self.source.consume(all);
                }
            }
        }
    }

    /// Accumulate bytes up to the next whitespace or the end of input.
    ///
    /// Must be entered with the stream standing on a non-space byte, which
    /// is what keeps the resulting word non-empty.
    fn read_word(&mut self) -> Result<Token> {
        self.word.clear();
        loop {
            let buffer = self.source.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            match buffer.iter().position(|&byte| delimiter::is_space(byte)) {
                Some(at) => {
                    self.word.extend_from_slice(&buffer[..at]);
                    self.source.consume(at);
                    break;
                }
                None => {
                    self.word.extend_from_slice(buffer);
                    let all = buffer.len();
                    self.source.consume(all);
                }
            }
        }
        Ok(std::str::from_utf8(&self.word)?.to_owned())
    }

    /// Drop everything up to and including the next newline.
    fn discard_line(&mut self) -> Result<()> {
        loop {
            let buffer = self.source.fill_buf()?;
            if buffer.is_empty() {
                return Ok(());
            }
            match buffer.iter().position(|&byte| byte == b'\n') {
                Some(at) => {
                    self.source.consume(at + 1);
                    return Ok(());
                }
                None => {
                    let all = buffer.len();
                    self.source.consume(all);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for WordLexer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
