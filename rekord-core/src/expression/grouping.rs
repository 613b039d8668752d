use crate::{BoxedExpression, Context, Dialect, Expression, Result, impl_atomic_precedence};

/// Advanced `GROUP BY` element.
#[derive(Debug)]
pub enum Grouping {
    /// `ROLLUP(a, b)`
    Rollup(Vec<BoxedExpression>),
    /// `CUBE(a, b)`
    Cube(Vec<BoxedExpression>),
    /// `GROUPING SETS ((a, b), (a), ())`
    Sets(Vec<Vec<BoxedExpression>>),
}

impl_atomic_precedence!(Grouping);

impl Expression for Grouping {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_grouping(context, out, self)
    }
    fn is_grouping(&self) -> bool {
        true
    }
}
