use crate::{
    BoxedExpression, Context, Dialect, Expression, Join, JoinType, Result, Value, WindowSpec,
    impl_atomic_precedence,
};

/// `SELECT` statement.
///
/// Clauses are written in the order SELECT-list, FROM/JOIN, WHERE, GROUP BY, HAVING, WINDOW,
/// ORDER BY, LIMIT/OFFSET, each on its own line. Missing clauses are omitted, an empty select
/// list becomes `*`.
#[derive(Debug, Default)]
pub struct Select {
    pub distinct: bool,
    pub columns: Vec<BoxedExpression>,
    pub from: Option<BoxedExpression>,
    pub conditions: Vec<BoxedExpression>,
    pub group_by: Vec<BoxedExpression>,
    pub having: Vec<BoxedExpression>,
    pub windows: Vec<(String, WindowSpec)>,
    pub order_by: Vec<BoxedExpression>,
    pub limit: Option<Value>,
    pub offset: Option<Value>,
    /// Joins requested before any source, rendering fails while this is not empty.
    pub unsourced_joins: Vec<JoinType>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
    pub fn column(mut self, column: impl Expression + 'static) -> Self {
        self.columns.push(Box::new(column));
        self
    }
    pub fn columns(mut self, columns: impl IntoIterator<Item = BoxedExpression>) -> Self {
        self.columns.extend(columns);
        self
    }
    pub fn from(mut self, source: impl Expression + 'static) -> Self {
        self.from = Some(Box::new(source));
        self
    }
    /// Join the current source with `rhs`, the current source becomes the left side.
    ///
    /// A join without a current source has no left side, rendering the statement fails.
    pub fn join(
        mut self,
        join: JoinType,
        rhs: impl Expression + 'static,
        on: Option<BoxedExpression>,
    ) -> Self {
        let Some(lhs) = self.from.take() else {
            self.unsourced_joins.push(join);
            return self;
        };
        self.from = Some(Box::new(Join {
            join,
            lhs,
            rhs: Box::new(rhs),
            constraint: on.map(crate::JoinConstraint::On),
        }));
        self
    }
    /// Add a `WHERE` condition, conditions are joined with `AND`.
    pub fn filter(mut self, condition: impl Expression + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }
    pub fn group_by(mut self, expression: impl Expression + 'static) -> Self {
        self.group_by.push(Box::new(expression));
        self
    }
    pub fn having(mut self, condition: impl Expression + 'static) -> Self {
        self.having.push(Box::new(condition));
        self
    }
    /// Declare a named window, `WINDOW "name" AS (...)`.
    pub fn window(mut self, name: impl Into<String>, spec: WindowSpec) -> Self {
        self.windows.push((name.into(), spec));
        self
    }
    pub fn order_by(mut self, expression: impl Expression + 'static) -> Self {
        self.order_by.push(Box::new(expression));
        self
    }
    pub fn limit(mut self, limit: impl Into<Value>) -> Self {
        self.limit = Some(limit.into());
        self
    }
    pub fn offset(mut self, offset: impl Into<Value>) -> Self {
        self.offset = Some(offset.into());
        self
    }
}

impl_atomic_precedence!(Select);

impl Expression for Select {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_select(context, out, self)
    }
}
