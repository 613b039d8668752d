use crate::{BoxedExpression, Context, Dialect, Expression, Result, impl_atomic_precedence};

/// Table source, `"schema"."name" AS "alias"`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableExpression {
    pub name: String,
    pub schema: Option<String>,
    pub alias: Option<String>,
}

pub fn table(name: impl Into<String>) -> TableExpression {
    TableExpression::new(name)
}

impl TableExpression {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableExpression {
    fn from(value: &str) -> Self {
        TableExpression::new(value)
    }
}

impl From<String> for TableExpression {
    fn from(value: String) -> Self {
        TableExpression::new(value)
    }
}

/// Set returning function used as table source, `fn(args) AS "alias"("c1", "c2")`.
#[derive(Debug)]
pub struct TableFunction {
    pub name: String,
    pub args: Vec<BoxedExpression>,
    pub alias: Option<String>,
    pub columns: Vec<String>,
}

impl TableFunction {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = BoxedExpression>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
            alias: None,
            columns: Vec::new(),
        }
    }
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
    /// Column aliases, they require a table alias.
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// `LATERAL <subquery | table function>`
#[derive(Debug)]
pub struct Lateral {
    pub source: BoxedExpression,
}

impl Lateral {
    pub fn new(source: impl Expression + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }
}

impl_atomic_precedence!(TableExpression, TableFunction, Lateral);

impl Expression for TableExpression {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_table(context, out, self);
        Ok(())
    }
}

impl Expression for TableFunction {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_table_function(context, out, self)
    }
}

impl Expression for Lateral {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_lateral(context, out, self)
    }
}
