mod color;
mod resolver;

pub use color::*;
pub use resolver::*;
