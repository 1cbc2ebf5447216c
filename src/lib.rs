//! # placelex
//!
//! Lexical front end for line-oriented layout and placement design files.
//!
//! Text describing a physical design arrives as a byte stream in which
//! whitespace and a fixed set of punctuation characters separate tokens,
//! and a caller-chosen marker opens a comment running to the end of the
//! line. This crate turns such streams into clean token sequences and
//! carries the passive records a parser fills from them.
//!
//! Two lexing disciplines are provided:
//! - [`LineLexer`](lexer::LineLexer) returns all tokens of the next
//!   non-blank line at once, splitting on whitespace and punctuation;
//! - [`WordLexer`](lexer::WordLexer) returns one whitespace-delimited word
//!   at a time, discarding comment lines as it goes.
//!
//! The records ([`Cell`](record::Cell), [`Row`](record::Row),
//! [`Site`](record::Site), [`DensityBin`](record::DensityBin)) render as
//! banner-framed diagnostic dumps through [`printer::Dump`].

pub mod delimiter;
pub mod error;
pub mod lexer;
pub mod printer;
pub mod record;
