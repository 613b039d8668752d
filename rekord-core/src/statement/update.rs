use crate::{
    BoxedExpression, Context, Dialect, Expression, Literal, Result, TableExpression, Value,
    impl_atomic_precedence,
};

/// `UPDATE` statement.
#[derive(Debug)]
pub struct Update {
    pub table: TableExpression,
    pub set: Vec<(String, BoxedExpression)>,
    pub conditions: Vec<BoxedExpression>,
    pub returning: Vec<BoxedExpression>,
}

impl Update {
    pub fn table(table: impl Into<TableExpression>) -> Self {
        Self {
            table: table.into(),
            set: Vec::new(),
            conditions: Vec::new(),
            returning: Vec::new(),
        }
    }
    /// `"column" = ?`
    pub fn set(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_expression(column, Literal(value.into()))
    }
    /// `"column" = expression`
    pub fn set_expression(
        mut self,
        column: impl Into<String>,
        expression: impl Expression + 'static,
    ) -> Self {
        self.set.push((column.into(), Box::new(expression)));
        self
    }
    pub fn filter(mut self, condition: impl Expression + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }
    pub fn returning(mut self, expression: impl Expression + 'static) -> Self {
        self.returning.push(Box::new(expression));
        self
    }
}

impl_atomic_precedence!(Update);

impl Expression for Update {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_update(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        true
    }
}
