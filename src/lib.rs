pub mod error;
pub mod filter;
pub mod input;
pub mod model;
pub mod ordering;
pub mod prefs;

// Re-export main types for convenience
pub use error::{InputError, ParseError, PrefsError};
pub use filter::{FilterCompiler, StoreSchema, compile_filter};
pub use input::{read_episodes, read_schema};
pub use model::{Episode, FilterFlag, FilterSpec, Media, PlayState, SortOrder, SortScope};
pub use ordering::{reorder, reorder_with_rng};
pub use prefs::{DEFAULT_SORT_ORDER, ListPreferences, read_preferences, write_preferences};
