pub mod keys;
mod permutor;
mod smart_shuffle;

pub use permutor::{reorder, reorder_with_rng};
pub use smart_shuffle::smart_shuffle;
