mod node_ref;
mod tree;
mod tri_state;

pub use node_ref::*;
pub use tree::*;
pub use tri_state::*;
