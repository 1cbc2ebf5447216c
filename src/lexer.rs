//! # Lexer
//!
//! This module contains the two tokenizer components of the crate:
//!  - [`LineLexer`] splits the input one line at a time on the shared
//!    delimiter set, transparently skipping blank and delimiter-only lines.
//!  - [`WordLexer`] reads whitespace-delimited words straight off the
//!    stream, suppressing comment-marker words together with the remainder
//!    of their source line.
//!
//! Both operate over any [`BufRead`] and both implement [`Iterator`],
//! yielding a finite, non-restartable sequence of results. Neither closes
//! the stream it reads from; pass `&mut stream` to keep ownership of the
//! stream on the caller's side.
//!
//! [`BufRead`]: std::io::BufRead

mod line;
mod word;

pub use line::LineLexer;
pub use word::WordLexer;

/// A maximal delimiter-free substring extracted from the input.
///
/// Tokens are never empty and never carry leading or trailing whitespace;
/// the lexers discard empty spans instead of emitting them.
pub type Token = String;
