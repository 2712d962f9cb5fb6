//! Turning the loosely nested coordinate payload of a polygon feature into a drawable
//! shape and the ring its statistics are measured on.

mod classify;
mod resolve;

pub use classify::*;
pub use resolve::*;
