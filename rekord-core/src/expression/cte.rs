use crate::{BoxedExpression, Context, Dialect, Expression, Result, impl_atomic_precedence};

/// Common table expression definition, `"name"("c") AS [[NOT] MATERIALIZED] (query)`.
#[derive(Debug)]
pub struct Cte {
    pub name: String,
    pub columns: Vec<String>,
    pub query: BoxedExpression,
    pub recursive: bool,
    /// `Some(true)` for `MATERIALIZED`, `Some(false)` for `NOT MATERIALIZED`.
    pub materialized: Option<bool>,
}

impl Cte {
    pub fn new(name: impl Into<String>, query: impl Expression + 'static) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            query: Box::new(query),
            recursive: false,
            materialized: None,
        }
    }
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
    pub fn materialized(mut self, materialized: bool) -> Self {
        self.materialized = Some(materialized);
        self
    }
}

/// `WITH [RECURSIVE] cte1, cte2 main`
#[derive(Debug)]
pub struct WithQuery {
    pub ctes: Vec<Cte>,
    pub main: BoxedExpression,
}

impl WithQuery {
    pub fn new(ctes: impl IntoIterator<Item = Cte>, main: impl Expression + 'static) -> Self {
        Self {
            ctes: ctes.into_iter().collect(),
            main: Box::new(main),
        }
    }
    pub fn is_recursive(&self) -> bool {
        self.ctes.iter().any(|v| v.recursive)
    }
}

impl_atomic_precedence!(Cte, WithQuery);

impl Expression for Cte {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_cte(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        self.query.modifies_data()
    }
}

impl Expression for WithQuery {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_with_query(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        self.main.modifies_data()
    }
}
