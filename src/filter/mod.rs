mod query;
mod schema;

pub use query::{FilterCompiler, compile_filter};
pub use schema::StoreSchema;
