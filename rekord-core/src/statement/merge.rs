use crate::{
    BoxedExpression, Context, Dialect, Expression, Result, TableExpression, impl_atomic_precedence,
};

#[derive(Debug)]
pub enum MergeClause {
    /// `WHEN MATCHED [AND cond] THEN UPDATE SET "c" = expr`
    MatchedUpdate {
        condition: Option<BoxedExpression>,
        set: Vec<(String, BoxedExpression)>,
    },
    /// `WHEN MATCHED [AND cond] THEN DELETE`
    MatchedDelete { condition: Option<BoxedExpression> },
    /// `WHEN NOT MATCHED [AND cond] THEN INSERT ("c") VALUES (expr)`
    NotMatchedInsert {
        condition: Option<BoxedExpression>,
        columns: Vec<String>,
        values: Vec<BoxedExpression>,
    },
    /// `WHEN NOT MATCHED [AND cond] THEN DO NOTHING`
    NotMatchedDoNothing { condition: Option<BoxedExpression> },
}

/// `MERGE INTO target USING source ON cond WHEN ...`
#[derive(Debug)]
pub struct Merge {
    pub target: TableExpression,
    pub source: BoxedExpression,
    pub on: BoxedExpression,
    pub clauses: Vec<MergeClause>,
}

impl Merge {
    pub fn into(
        target: impl Into<TableExpression>,
        source: impl Expression + 'static,
        on: impl Expression + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            source: Box::new(source),
            on: Box::new(on),
            clauses: Vec::new(),
        }
    }
    pub fn when(mut self, clause: MergeClause) -> Self {
        self.clauses.push(clause);
        self
    }
}

impl_atomic_precedence!(Merge);

impl Expression for Merge {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_merge(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        true
    }
}
