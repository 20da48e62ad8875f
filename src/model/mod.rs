mod episode;
mod filter_spec;
mod sort_order;

pub use episode::{Episode, Media, PlayState};
pub use filter_spec::{FilterFlag, FilterSpec};
pub use sort_order::{SortOrder, SortScope};
