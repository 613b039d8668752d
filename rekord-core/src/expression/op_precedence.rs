use crate::{BoxedExpression, Dialect, Expression, RawSql, Tuple};

/// Numeric precedence of an expression, dialects use it to insert parentheses.
pub trait OpPrecedence {
    /// Lower numbers bind weaker, dialects parenthesize when child precedence <= operator precedence.
    fn precedence(&self, dialect: &dyn Dialect) -> i32;
}

/// Precedence of nodes that never need parentheses.
pub const ATOMIC_PRECEDENCE: i32 = 1_000_000;

impl<T: OpPrecedence> OpPrecedence for &T {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        (*self).precedence(dialect)
    }
}

impl OpPrecedence for &dyn Expression {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        (*self).precedence(dialect)
    }
}

impl OpPrecedence for BoxedExpression {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        self.as_ref().precedence(dialect)
    }
}

/// Implement [`OpPrecedence`] returning [`ATOMIC_PRECEDENCE`].
#[macro_export]
macro_rules! impl_atomic_precedence {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::OpPrecedence for $ty {
                fn precedence(&self, _dialect: &dyn $crate::Dialect) -> i32 {
                    $crate::ATOMIC_PRECEDENCE
                }
            }
        )+
    };
}

impl_atomic_precedence!((), RawSql, Tuple);
