use crate::{Context, Dialect, Expression, OpPrecedence, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    ASC,
    DESC,
}

/// Expression with a sort direction, `expr ASC` / `expr DESC`.
#[derive(Debug)]
pub struct Ordered<E: Expression> {
    pub order: Order,
    pub expression: E,
}

impl<E: Expression> OpPrecedence for Ordered<E> {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        self.expression.precedence(dialect)
    }
}

impl<E: Expression> Expression for Ordered<E> {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_expression_ordered(
            context,
            out,
            &Ordered {
                order: self.order,
                expression: &self.expression as &dyn Expression,
            },
        )
    }
    fn is_ordered(&self) -> bool {
        true
    }
}
