use crate::{Context, Dialect, Expression, Result, Value, impl_atomic_precedence};

/// Bound value, always rendered as exactly one placeholder.
///
/// The value is never inlined into the SQL text: lists, `Null` and booleans included, an empty
/// list is still a single placeholder carrying the empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal(pub Value);

pub fn lit(value: impl Into<Value>) -> Literal {
    Literal(value.into())
}

impl_atomic_precedence!(Literal);

impl Expression for Literal {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_parameter(context, out, self.0.clone());
        Ok(())
    }
}
