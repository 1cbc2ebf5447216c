//! # Layout records
//!
//! Passive data holders for the objects a placement file describes. An
//! upstream record builder assigns their fields from lexed tokens; this
//! crate only reads finished records back, to render them. Every record
//! implements [`Display`](std::fmt::Display) as a banner-framed diagnostic
//! dump with a fixed field order, so logs stay comparable byte for byte
//! across runs.

mod cell;
mod density;
mod row;
mod site;

pub use cell::{Cell, Ports};
pub use density::DensityBin;
pub use row::Row;
pub use site::Site;
