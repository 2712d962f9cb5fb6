//! Contains the document model of a parsed KML/GPX file, style decoding, feature categorization,
//! the tri-state visibility tree and point navigation.

pub mod categorize;

pub mod document;

pub mod navigation;

pub mod style;

pub mod visibility;

pub use categorize::{Categories, categorize};
pub use document::*;
pub use navigation::*;
pub use style::*;
pub use visibility::*;
