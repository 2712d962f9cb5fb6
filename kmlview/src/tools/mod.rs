pub mod inspect;
pub mod points;
pub mod summary;
pub mod tree;
