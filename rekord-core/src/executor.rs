use crate::{
    Dialect, Error, Expression, Result, Transaction, Value, begin_statement,
    stream::{Stream, TryStreamExt},
    truncate_long,
};
use futures::TryFutureExt;
use std::{future::Future, pin::pin, sync::Arc};

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-specific last inserted identifier when available.
    pub last_insert_id: Option<i64>,
}

impl Extend<ExecutionResult> for ExecutionResult {
    fn extend<T: IntoIterator<Item = ExecutionResult>>(&mut self, iter: T) {
        for elem in iter {
            self.rows_affected += elem.rows_affected;
            if elem.last_insert_id.is_some() {
                self.last_insert_id = elem.last_insert_id;
            }
        }
    }
}

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;

/// A result row with its corresponding column labels.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Row {
    pub labels: RowNames,
    /// Aligned by index with `labels`.
    pub values: Box<[Value]>,
}

impl Row {
    pub fn new(labels: RowNames, values: Box<[Value]>) -> Self {
        Self { labels, values }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values()[i])
    }
}

/// Something that accepts rendered SQL, a connection or a transaction scope.
///
/// Implementors provide `execute` and `fetch`, statements are rendered with the executor's
/// dialect and their parameters adapted to storage before they reach those two.
pub trait Executor: Send + Sized {
    type Dialect: Dialect;

    fn dialect(&self) -> &Self::Dialect;

    /// Run a statement that produces no rows.
    fn execute(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<ExecutionResult>> + Send;

    /// Run a statement and stream its rows.
    fn fetch(&mut self, sql: String, params: Vec<Value>)
    -> impl Stream<Item = Result<Row>> + Send;

    fn fetch_all(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Vec<Row>>> + Send {
        self.fetch(sql, params).try_collect()
    }

    /// First row, `None` when the statement produced no rows.
    fn fetch_one(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Option<Row>>> + Send {
        async move {
            let mut stream = pin!(self.fetch(sql, params));
            stream.try_next().await
        }
    }

    /// Same statement once per parameter row, results accumulated.
    fn execute_many(
        &mut self,
        sql: String,
        rows: Vec<Vec<Value>>,
    ) -> impl Future<Output = Result<ExecutionResult>> + Send {
        async move {
            let mut result = ExecutionResult::default();
            for params in rows {
                let partial = self.execute(sql.clone(), params).await?;
                result.extend([partial]);
            }
            Ok(result)
        }
    }

    /// Render `statement` with this executor's dialect, parameters converted to storage.
    fn render_statement(&self, statement: &impl Expression) -> Result<(String, Vec<Value>)> {
        let dialect = self.dialect();
        let rendered = statement
            .render(dialect.as_dyn())
            .and_then(|(sql, params)| Ok((sql, dialect.params_to_storage(params)?)));
        match rendered {
            Ok((sql, params)) => {
                log::debug!(
                    "Sending to {} ({} params): {}",
                    dialect.name(),
                    params.len(),
                    truncate_long!(sql)
                );
                Ok((sql, params))
            }
            Err(error) => {
                log::error!("{:#}", error);
                Err(error)
            }
        }
    }

    /// Render and execute a statement that produces no rows.
    fn run(
        &mut self,
        statement: &impl Expression,
    ) -> impl Future<Output = Result<ExecutionResult>> + Send {
        let rendered = self.render_statement(statement);
        async move {
            let (sql, params) = rendered?;
            self.execute(sql, params).await
        }
    }

    /// Render a statement and stream its rows.
    fn query(&mut self, statement: &impl Expression) -> impl Stream<Item = Result<Row>> + Send {
        let rendered = self.render_statement(statement);
        async move {
            let (sql, params) = rendered?;
            Ok::<_, Error>(self.fetch(sql, params))
        }
        .try_flatten_stream()
    }

    /// Number of transaction scopes currently open on this executor.
    fn transaction_depth(&self) -> usize {
        0
    }

    /// Open a transaction, or a savepoint when one is already open.
    fn begin(&mut self) -> impl Future<Output = Result<Transaction<'_, Self>>> + Send {
        async move {
            let depth = self.transaction_depth();
            let sql = begin_statement(self.dialect().as_dyn(), depth)?;
            self.execute(sql, Vec::new()).await?;
            Ok(Transaction::new(self, depth))
        }
    }
}
