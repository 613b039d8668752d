use crate::{
    BoxedExpression, Context, DialectError, Dialect, Error, Expression, Result,
    impl_atomic_precedence,
};
use std::str::FromStr;

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Natural,
}

impl JoinType {
    /// Whether the join requires an `ON` or `USING` constraint.
    pub fn needs_constraint(&self) -> bool {
        matches!(
            self,
            JoinType::Inner | JoinType::Left | JoinType::Right | JoinType::Full
        )
    }
}

impl FromStr for JoinType {
    type Err = Error;
    fn from_str(value: &str) -> Result<Self> {
        let words = value.split_whitespace().map(|v| v.to_ascii_uppercase());
        let patterns: &[(&[&str], JoinType)] = &[
            (&["JOIN"], JoinType::Inner),
            (&["INNER", "JOIN"], JoinType::Inner),
            (&["LEFT", "OUTER", "JOIN"], JoinType::Left),
            (&["LEFT", "JOIN"], JoinType::Left),
            (&["RIGHT", "OUTER", "JOIN"], JoinType::Right),
            (&["RIGHT", "JOIN"], JoinType::Right),
            (&["FULL", "OUTER", "JOIN"], JoinType::Full),
            (&["FULL", "JOIN"], JoinType::Full),
            (&["CROSS", "JOIN"], JoinType::Cross),
            (&["NATURAL", "JOIN"], JoinType::Natural),
        ];
        for (keywords, join_type) in patterns {
            if words.clone().eq(keywords.iter().copied()) {
                return Ok(*join_type);
            }
        }
        Err(DialectError::invalid_expression(format!("`{value}` is not a join keyword")).into())
    }
}

#[derive(Debug)]
pub enum JoinConstraint {
    On(BoxedExpression),
    Using(Vec<String>),
}

/// `left <KIND> JOIN right [ON cond | USING ("c")]`
#[derive(Debug)]
pub struct Join {
    pub join: JoinType,
    pub lhs: BoxedExpression,
    pub rhs: BoxedExpression,
    pub constraint: Option<JoinConstraint>,
}

impl Join {
    pub fn new(
        join: JoinType,
        lhs: impl Expression + 'static,
        rhs: impl Expression + 'static,
    ) -> Self {
        Self {
            join,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            constraint: None,
        }
    }
    pub fn on(mut self, condition: impl Expression + 'static) -> Self {
        self.constraint = Some(JoinConstraint::On(Box::new(condition)));
        self
    }
    pub fn using<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.constraint = Some(JoinConstraint::Using(
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }
}

impl_atomic_precedence!(Join);

impl Expression for Join {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_join(context, out, self)
    }
}
