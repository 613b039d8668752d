use crate::{Dialect, ExecutionResult, Executor, Result, Row, Value, stream::Stream};
use std::future::Future;

/// Name of the savepoint opened by a transaction scope nested `depth` levels deep.
pub fn savepoint_name(depth: usize) -> String {
    format!("sp_{}", depth)
}

/// `BEGIN` at depth 0, `SAVEPOINT "sp_n"` below it.
pub(crate) fn begin_statement(dialect: &dyn Dialect, depth: usize) -> Result<String> {
    let mut out = String::new();
    if depth == 0 {
        dialect.write_transaction_begin(&mut out);
    } else {
        dialect.require(dialect.supports_savepoint(), "SAVEPOINT")?;
        dialect.write_savepoint(&mut out, &savepoint_name(depth));
    }
    Ok(out)
}

/// Transaction scope borrowed from an executor.
///
/// Scopes opened from a scope become savepoints. A scope must end with [`Transaction::commit`]
/// or [`Transaction::rollback`], dropping it only logs a warning because no statement can be sent
/// from `drop`.
pub struct Transaction<'e, E: Executor> {
    executor: &'e mut E,
    depth: usize,
    finished: bool,
}

impl<'e, E: Executor> Transaction<'e, E> {
    pub(crate) fn new(executor: &'e mut E, depth: usize) -> Self {
        Self {
            executor,
            depth,
            finished: false,
        }
    }

    /// 0 for the outermost transaction, savepoints are deeper.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub async fn commit(mut self) -> Result<()> {
        let mut sql = String::new();
        if self.depth == 0 {
            self.executor.dialect().write_transaction_commit(&mut sql);
        } else {
            self.executor
                .dialect()
                .write_release_savepoint(&mut sql, &savepoint_name(self.depth));
        }
        self.executor.execute(sql, Vec::new()).await?;
        self.finished = true;
        Ok(())
    }

    pub async fn rollback(mut self) -> Result<()> {
        let mut sql = String::new();
        if self.depth == 0 {
            self.executor.dialect().write_transaction_rollback(&mut sql);
        } else {
            self.executor
                .dialect()
                .write_rollback_to_savepoint(&mut sql, &savepoint_name(self.depth));
        }
        self.executor.execute(sql, Vec::new()).await?;
        self.finished = true;
        Ok(())
    }
}

impl<'e, E: Executor> Executor for Transaction<'e, E> {
    type Dialect = E::Dialect;

    fn dialect(&self) -> &Self::Dialect {
        self.executor.dialect()
    }

    fn execute(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<ExecutionResult>> + Send {
        self.executor.execute(sql, params)
    }

    fn fetch(
        &mut self,
        sql: String,
        params: Vec<Value>,
    ) -> impl Stream<Item = Result<Row>> + Send {
        self.executor.fetch(sql, params)
    }

    fn transaction_depth(&self) -> usize {
        self.depth + 1
    }
}

impl<'e, E: Executor> Drop for Transaction<'e, E> {
    fn drop(&mut self) {
        if !self.finished {
            log::warn!(
                "Transaction at depth {} dropped without commit or rollback on {}",
                self.depth,
                self.executor.dialect().name()
            );
        }
    }
}
