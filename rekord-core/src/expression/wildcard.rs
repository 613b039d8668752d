use crate::{Context, Dialect, Expression, Result, impl_atomic_precedence};

/// `*` or `"table".*`
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    pub table: Option<String>,
}

impl Wildcard {
    pub fn all() -> Self {
        Self { table: None }
    }
    pub fn of(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
        }
    }
}

impl_atomic_precedence!(Wildcard);

impl Expression for Wildcard {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_wildcard(context, out, self);
        Ok(())
    }
}
