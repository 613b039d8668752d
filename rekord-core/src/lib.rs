mod adapter;
mod capability;
mod clause;
mod column_type;
mod config;
mod context;
mod dialect;
mod driver;
mod error;
mod executor;
mod expression;
mod statement;
mod transaction;
mod util;
mod value;
mod version;

pub use ::anyhow::Context as ErrorContext;
pub use adapter::*;
pub use capability::*;
pub use clause::*;
pub use column_type::*;
pub use config::*;
pub use context::*;
pub use dialect::*;
pub use driver::*;
pub use error::*;
pub use executor::*;
pub use expression::*;
pub use statement::*;
pub use transaction::*;
pub use util::*;
pub use value::*;
pub use version::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
