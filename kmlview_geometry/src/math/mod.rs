mod planar;

pub use planar::*;
