//! Composable SQL expressions rendered into parameterized, dialect correct SQL.
//!
//! ```
//! use rekord::{Dialect, Expression, ExpressionExt, GenericDialect, Select, col, lit, table};
//!
//! let query = Select::new()
//!     .column(col("id"))
//!     .column(col("name"))
//!     .from(table("users"))
//!     .filter(col("age").ge(lit(18)));
//! let (sql, params) = query.render(GenericDialect::new().as_dyn()).unwrap();
//! assert_eq!(sql, "SELECT \"id\", \"name\"\nFROM \"users\"\nWHERE \"age\" >= ?");
//! assert_eq!(params.len(), 1);
//! ```
pub use rekord_core::*;
