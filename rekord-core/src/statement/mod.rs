mod create_table;
mod delete;
mod insert;
mod merge;
mod select;
mod truncate;
mod update;

pub use create_table::*;
pub use delete::*;
pub use insert::*;
pub use merge::*;
pub use select::*;
pub use truncate::*;
pub use update::*;
