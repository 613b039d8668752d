use crate::{
    ColumnDefinition, Context, Dialect, Expression, Result, TableExpression,
    impl_atomic_precedence,
};

/// `CREATE TABLE` statement, default values are inlined so the statement carries no parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTable {
    pub table: TableExpression,
    pub if_not_exists: bool,
    pub columns: Vec<(String, ColumnDefinition)>,
    /// Composite primary key, written as a table constraint.
    pub primary_key: Vec<String>,
}

impl CreateTable {
    pub fn new(table: impl Into<TableExpression>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
    pub fn column(mut self, name: impl Into<String>, definition: impl Into<ColumnDefinition>) -> Self {
        self.columns.push((name.into(), definition.into()));
        self
    }
    pub fn primary_key<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// `DROP TABLE [IF EXISTS] "name"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropTable {
    pub table: TableExpression,
    pub if_exists: bool,
}

impl DropTable {
    pub fn new(table: impl Into<TableExpression>) -> Self {
        Self {
            table: table.into(),
            if_exists: false,
        }
    }
    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

impl_atomic_precedence!(CreateTable, DropTable);

impl Expression for CreateTable {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_create_table(context, out, self)
    }
}

impl Expression for DropTable {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_drop_table(context, out, self);
        Ok(())
    }
}
