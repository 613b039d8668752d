use crate::{
    BoxedExpression, Context, Dialect, Expression, Literal, Result, TableExpression, Value,
    impl_atomic_precedence,
};

/// Action taken when an inserted row collides with an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictAction {
    DoNothing,
    /// Overwrite the listed columns with the incoming values.
    DoUpdate(Vec<String>),
}

/// Upsert clause, `ON CONFLICT ("target") DO ...` or the dialect equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnConflict {
    pub target: Vec<String>,
    pub action: ConflictAction,
}

impl OnConflict {
    pub fn do_nothing<S: Into<String>>(target: impl IntoIterator<Item = S>) -> Self {
        Self {
            target: target.into_iter().map(Into::into).collect(),
            action: ConflictAction::DoNothing,
        }
    }
    pub fn do_update<S: Into<String>, C: Into<String>>(
        target: impl IntoIterator<Item = S>,
        columns: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            target: target.into_iter().map(Into::into).collect(),
            action: ConflictAction::DoUpdate(columns.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(Debug)]
pub enum InsertSource {
    Values(Vec<Vec<BoxedExpression>>),
    Select(BoxedExpression),
    DefaultValues,
}

/// `INSERT INTO` statement.
#[derive(Debug)]
pub struct Insert {
    pub table: TableExpression,
    pub columns: Vec<String>,
    pub source: InsertSource,
    pub on_conflict: Option<OnConflict>,
    pub returning: Vec<BoxedExpression>,
}

impl Insert {
    pub fn into(table: impl Into<TableExpression>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            source: InsertSource::Values(Vec::new()),
            on_conflict: None,
            returning: Vec::new(),
        }
    }
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
    /// Append a row of bound values.
    pub fn values<V: Into<Value>>(self, row: impl IntoIterator<Item = V>) -> Self {
        self.row(
            row.into_iter()
                .map(|v| Box::new(Literal(v.into())) as BoxedExpression)
                .collect::<Vec<_>>(),
        )
    }
    /// Append a row of arbitrary expressions.
    pub fn row(mut self, row: impl IntoIterator<Item = BoxedExpression>) -> Self {
        let row = row.into_iter().collect();
        match &mut self.source {
            InsertSource::Values(rows) => rows.push(row),
            _ => self.source = InsertSource::Values(vec![row]),
        }
        self
    }
    /// `INSERT INTO .. SELECT ..`
    pub fn select(mut self, query: impl Expression + 'static) -> Self {
        self.source = InsertSource::Select(Box::new(query));
        self
    }
    pub fn default_values(mut self) -> Self {
        self.source = InsertSource::DefaultValues;
        self
    }
    pub fn on_conflict(mut self, on_conflict: OnConflict) -> Self {
        self.on_conflict = Some(on_conflict);
        self
    }
    pub fn returning(mut self, expression: impl Expression + 'static) -> Self {
        self.returning.push(Box::new(expression));
        self
    }
}

impl_atomic_precedence!(Insert);

impl Expression for Insert {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_insert(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        true
    }
}
