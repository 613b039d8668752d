use crate::{Context, Dialect, Expression, OpPrecedence, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOpType {
    Negative,
    Not,
    /// Postfix `IS NULL`.
    IsNull,
    /// Postfix `IS NOT NULL`.
    IsNotNull,
}

impl OpPrecedence for UnaryOpType {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        dialect.expression_unary_op_precedence(self)
    }
}

#[derive(Debug)]
pub struct UnaryOp<V: Expression> {
    pub op: UnaryOpType,
    pub arg: V,
}

impl<V: Expression> UnaryOp<V> {
    pub fn new(op: UnaryOpType, arg: V) -> Self {
        Self { op, arg }
    }
}

impl<E: Expression> OpPrecedence for UnaryOp<E> {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        dialect.expression_unary_op_precedence(&self.op)
    }
}

impl<E: Expression> Expression for UnaryOp<E> {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_expression_unary_op(
            context,
            out,
            &UnaryOp {
                op: self.op,
                arg: &self.arg as &dyn Expression,
            },
        )
    }
}
