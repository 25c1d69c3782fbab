pub mod truncation;

pub use truncation::select_parents;
