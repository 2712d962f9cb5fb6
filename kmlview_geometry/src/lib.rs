//! Polygon classification and planar statistics for document features.

pub mod format;
pub mod math;
pub mod polygon;

pub use format::*;
pub use polygon::*;
