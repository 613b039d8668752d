use crate::{BoxedExpression, Context, Dialect, Expression, OpPrecedence, Result, impl_atomic_precedence};

/// Array constructor `ARRAY[a, b]`, rendered on every dialect.
#[derive(Debug, Default)]
pub struct ArrayExpression {
    pub elements: Vec<BoxedExpression>,
}

impl ArrayExpression {
    pub fn new(elements: impl IntoIterator<Item = BoxedExpression>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOperator {
    /// `@>`
    Contains,
    /// `<@`
    ContainedBy,
    /// `&&`
    Overlaps,
    /// `= ANY(...)`
    Any,
}

/// `lhs @> rhs`, `lhs <@ rhs`, `lhs && rhs`, `lhs = ANY(rhs)`
#[derive(Debug)]
pub struct ArrayOperation {
    pub op: ArrayOperator,
    pub lhs: BoxedExpression,
    pub rhs: BoxedExpression,
}

impl ArrayOperation {
    pub fn new(
        op: ArrayOperator,
        lhs: impl Expression + 'static,
        rhs: impl Expression + 'static,
    ) -> Self {
        Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl_atomic_precedence!(ArrayExpression);

impl OpPrecedence for ArrayOperation {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        dialect.expression_binary_op_precedence(&crate::BinaryOpType::Equal)
    }
}

impl Expression for ArrayExpression {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_array_expression(context, out, self)
    }
}

impl Expression for ArrayOperation {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_array_operation(context, out, self)
    }
}
