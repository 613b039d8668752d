use rekord::{
    Dialect, ExecutionResult, Executor, Result, Row, Value,
    future::{self, Future},
    stream::{self, Stream},
};

/// Executor standing in for a live connection, it records every statement it receives.
pub struct RecordingExecutor<D: Dialect> {
    dialect: D,
    /// Statements in the order they were sent.
    pub statements: Vec<(String, Vec<Value>)>,
    /// Rows returned by every fetch.
    pub rows: Vec<Row>,
    /// Reported by every execute.
    pub rows_affected: u64,
}

impl<D: Dialect> RecordingExecutor<D> {
    pub fn new(dialect: D) -> Self {
        Self {
            dialect,
            statements: Vec::new(),
            rows: Vec::new(),
            rows_affected: 1,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// SQL text of the recorded statements.
    pub fn sql(&self) -> Vec<&str> {
        self.statements.iter().map(|(sql, _)| sql.as_str()).collect()
    }
}

impl<D: Dialect> Executor for RecordingExecutor<D> {
    type Dialect = D;

    fn dialect(&self) -> &D {
        &self.dialect
    }

    fn execute(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<ExecutionResult>> + Send {
        self.statements.push((sql, params));
        future::ready(Ok(ExecutionResult {
            rows_affected: self.rows_affected,
            last_insert_id: None,
        }))
    }

    fn fetch(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Stream<Item = Result<Row>> + Send {
        self.statements.push((sql, params));
        stream::iter(self.rows.clone().into_iter().map(Ok))
    }
}
