pub mod predicate;
pub mod ring;
pub mod seq;

// Re-export the whole sequence surface at the crate root
pub use seq::*;
