use crate::{
    BoxedExpression, Context, Dialect, Expression, Result, TableExpression, impl_atomic_precedence,
};

/// `DELETE FROM` statement, without conditions every row is removed.
#[derive(Debug)]
pub struct Delete {
    pub table: TableExpression,
    pub conditions: Vec<BoxedExpression>,
    pub returning: Vec<BoxedExpression>,
}

impl Delete {
    pub fn from(table: impl Into<TableExpression>) -> Self {
        Self {
            table: table.into(),
            conditions: Vec::new(),
            returning: Vec::new(),
        }
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

impl_atomic_precedence!(Delete);

impl Expression for Delete {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_delete(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        true
    }
}
