//! The document model consumed by the viewer core: features as produced by the upstream
//! KML/GPX parser, the document metadata with its folders and style table, and the
//! loader that turns the parser's JSON output into a `Document` with stable feature ids.

mod coordinates;
mod feature;
mod metadata;
mod read;

pub use coordinates::*;
pub use feature::*;
pub use metadata::*;
pub use read::*;
