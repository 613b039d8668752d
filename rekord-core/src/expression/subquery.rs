use crate::{BoxedExpression, Context, Dialect, Expression, Result, impl_atomic_precedence};

/// Parenthesized query, `(query) AS "alias"`.
#[derive(Debug)]
pub struct Subquery {
    pub query: BoxedExpression,
    pub alias: Option<String>,
}

impl Subquery {
    pub fn new(query: impl Expression + 'static) -> Self {
        Self {
            query: Box::new(query),
            alias: None,
        }
    }
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// `[NOT] EXISTS (query)`
#[derive(Debug)]
pub struct Exists {
    pub query: BoxedExpression,
    pub negated: bool,
}

impl Exists {
    pub fn new(query: impl Expression + 'static) -> Self {
        Self {
            query: Box::new(query),
            negated: false,
        }
    }
    pub fn not(query: impl Expression + 'static) -> Self {
        Self {
            query: Box::new(query),
            negated: true,
        }
    }
}

impl_atomic_precedence!(Subquery, Exists);

impl Expression for Subquery {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_subquery(context, out, self)
    }
}

impl Expression for Exists {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_exists(context, out, self)
    }
}
