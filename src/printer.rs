//! # Diagnostic printing
//!
//! Routes record dumps to an output sink. Each record type renders through
//! its `Display` implementation; [`Dump`] adds the plumbing to push that
//! rendering into any [`io::Write`], with [`Dump::print`] as the standard
//! output shorthand for eyeballing a design interactively.

use std::fmt;
use std::io::{self, Write};

use crate::record::{Cell, DensityBin, Row, Site};

/// Banner-framed diagnostic output for a record.
pub trait Dump: fmt::Display {
    /// Write the rendering into `sink`.
    fn dump(&self, sink: &mut impl Write) -> io::Result<()> {
        write!(sink, "{}", self)
    }

    /// Write the rendering to standard output.
    fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.dump(&mut stdout.lock())
    }
}

impl Dump for Cell {}
impl Dump for Row {}
impl Dump for Site {}
impl Dump for DensityBin {}
