use crate::{BoxedExpression, Context, Dialect, Expression, Result, impl_atomic_precedence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

/// `lhs UNION [ALL] rhs`, members are written as they are.
#[derive(Debug)]
pub struct SetOperation {
    pub op: SetOperator,
    pub all: bool,
    pub lhs: BoxedExpression,
    pub rhs: BoxedExpression,
}

impl SetOperation {
    pub fn new(op: SetOperator, lhs: impl Expression + 'static, rhs: impl Expression + 'static) -> Self {
        Self {
            op,
            all: false,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
    pub fn union(lhs: impl Expression + 'static, rhs: impl Expression + 'static) -> Self {
        Self::new(SetOperator::Union, lhs, rhs)
    }
    pub fn intersect(lhs: impl Expression + 'static, rhs: impl Expression + 'static) -> Self {
        Self::new(SetOperator::Intersect, lhs, rhs)
    }
    pub fn except(lhs: impl Expression + 'static, rhs: impl Expression + 'static) -> Self {
        Self::new(SetOperator::Except, lhs, rhs)
    }
    /// Keep duplicates.
    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }
}

impl_atomic_precedence!(SetOperation);

impl Expression for SetOperation {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_set_operation(context, out, self)
    }
}
