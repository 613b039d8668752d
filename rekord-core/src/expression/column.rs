use crate::{Context, Dialect, Expression, Result, impl_atomic_precedence};

/// Column reference, `"name"`, `"table"."name"`, optionally ` AS "alias"`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub table: Option<String>,
    pub alias: Option<String>,
}

/// Bare column reference.
pub fn col(name: impl Into<String>) -> Column {
    Column::new(name)
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            alias: None,
        }
    }
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(name).of(table)
    }
    /// Qualify with a table name (or table alias).
    pub fn of(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl_atomic_precedence!(Column);

impl Expression for Column {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_column(context, out, self);
        Ok(())
    }
}
