use crate::{Context, Dialect, OpPrecedence, Result, Value, truncate_long};
use std::fmt::Debug;

/// A renderable SQL expression node.
///
/// Nodes are immutable once built. Rendering writes the SQL fragment into `out` and appends
/// every bound value to `context.params` in the same order the placeholders appear.
pub trait Expression: OpPrecedence + Send + Sync + Debug {
    /// Serialize the expression into the output string using the dialect.
    fn write_query(&self, dialect: &dyn Dialect, context: &mut Context, out: &mut String)
    -> Result<()>;

    /// Whether this expression carries ordering information.
    fn is_ordered(&self) -> bool {
        false
    }

    /// Whether the expression is a data modifying statement (INSERT, UPDATE, DELETE, MERGE).
    fn modifies_data(&self) -> bool {
        false
    }

    /// Whether the expression is a `ROLLUP`, `CUBE` or `GROUPING SETS` element.
    fn is_grouping(&self) -> bool {
        false
    }

    /// Render into a standalone `(sql, params)` pair using a fresh context.
    fn render(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>)> {
        let mut context = Context::default();
        let mut out = String::with_capacity(64);
        self.write_query(dialect, &mut context, &mut out)?;
        log::trace!("Rendered for {}: {}", dialect.name(), truncate_long!(out));
        Ok((out, context.params))
    }
}

/// Owned, type erased node used as child of compound expressions.
pub type BoxedExpression = Box<dyn Expression>;

impl<T: Expression> Expression for &T {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        (*self).write_query(dialect, context, out)
    }
    fn is_ordered(&self) -> bool {
        (*self).is_ordered()
    }
    fn modifies_data(&self) -> bool {
        (*self).modifies_data()
    }
    fn is_grouping(&self) -> bool {
        (*self).is_grouping()
    }
}

impl Expression for &dyn Expression {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        (*self).write_query(dialect, context, out)
    }
    fn is_ordered(&self) -> bool {
        (*self).is_ordered()
    }
    fn modifies_data(&self) -> bool {
        (*self).modifies_data()
    }
    fn is_grouping(&self) -> bool {
        (*self).is_grouping()
    }
}

impl Expression for BoxedExpression {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        self.as_ref().write_query(dialect, context, out)
    }
    fn is_ordered(&self) -> bool {
        self.as_ref().is_ordered()
    }
    fn modifies_data(&self) -> bool {
        self.as_ref().modifies_data()
    }
    fn is_grouping(&self) -> bool {
        self.as_ref().is_grouping()
    }
}

impl Expression for () {
    fn write_query(
        &self,
        _dialect: &dyn Dialect,
        _context: &mut Context,
        _out: &mut String,
    ) -> Result<()> {
        Ok(())
    }
}

/// Verbatim SQL fragment, no quoting and no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql(pub String);

pub fn raw(sql: impl Into<String>) -> RawSql {
    RawSql(sql.into())
}

impl Expression for RawSql {
    fn write_query(
        &self,
        _dialect: &dyn Dialect,
        _context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        out.push_str(&self.0);
        Ok(())
    }
}

/// Parenthesized list `(a, b, c)`.
#[derive(Debug, Default)]
pub struct Tuple(pub Vec<BoxedExpression>);

impl Expression for Tuple {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_tuple(context, out, &self.0)
    }
}
