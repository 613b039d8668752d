use crate::{RecordingExecutor, silent_logs};
use rekord::{
    Delete, Dialect, DialectError, Executor, Expression, ExpressionExt, Insert, Result, Row,
    RowNames, Select, Value, col, lit, savepoint_name, stream::TryStreamExt, table,
};
use std::sync::Arc;
use uuid::Uuid;

fn written(dialect: &dyn Dialect, write: impl FnOnce(&dyn Dialect, &mut String)) -> String {
    let mut out = String::new();
    write(dialect, &mut out);
    out
}

/// Transaction scopes send `BEGIN`, savepoints and their completion in order.
pub async fn transactions<D: Dialect>(dialect: D) -> Result<()> {
    let mut executor = RecordingExecutor::new(dialect);
    let (begin, commit, rollback) = {
        let d = executor.dialect().as_dyn();
        (
            written(d, |d, out| d.write_transaction_begin(out)),
            written(d, |d, out| d.write_transaction_commit(out)),
            written(d, |d, out| d.write_transaction_rollback(out)),
        )
    };

    {
        let mut transaction = executor.begin().await?;
        assert_eq!(transaction.depth(), 0);
        assert_eq!(transaction.transaction_depth(), 1);
        transaction
            .run(&Delete::from("sessions").filter(col("expired").eq(lit(true))))
            .await?;
        if transaction.dialect().supports_savepoint() {
            let savepoint = transaction.begin().await?;
            assert_eq!(savepoint.depth(), 1);
            savepoint.rollback().await?;
            let mut savepoint = transaction.begin().await?;
            let inner = savepoint.begin().await?;
            assert_eq!(inner.depth(), 2);
            inner.commit().await?;
            savepoint.commit().await?;
        } else {
            let error = transaction
                .begin()
                .await
                .err()
                .expect("Nested scopes need savepoints");
            assert!(matches!(
                DialectError::of(&error),
                Some(DialectError::UnsupportedFeature { .. })
            ));
        }
        transaction.commit().await?;
    }

    let d = executor.dialect().as_dyn();
    let mut expected = vec![begin.clone()];
    expected.push(
        Delete::from("sessions")
            .filter(col("expired").eq(lit(true)))
            .render(d)?
            .0,
    );
    if d.supports_savepoint() {
        expected.extend([
            written(d, |d, out| d.write_savepoint(out, &savepoint_name(1))),
            written(d, |d, out| {
                d.write_rollback_to_savepoint(out, &savepoint_name(1))
            }),
            written(d, |d, out| d.write_savepoint(out, &savepoint_name(1))),
            written(d, |d, out| d.write_savepoint(out, &savepoint_name(2))),
            written(d, |d, out| d.write_release_savepoint(out, &savepoint_name(2))),
            written(d, |d, out| d.write_release_savepoint(out, &savepoint_name(1))),
        ]);
    }
    expected.push(commit);
    assert_eq!(executor.sql(), expected);

    executor.statements.clear();
    {
        let transaction = executor.begin().await?;
        transaction.rollback().await?;
    }
    assert_eq!(executor.sql(), [begin.as_str(), rollback.as_str()]);

    executor.statements.clear();
    silent_logs! {
        {
            let _transaction = executor.begin().await?;
        }
    }
    assert_eq!(executor.sql(), [begin.as_str()]);
    Ok(())
}

/// Statements run through an executor are rendered by its dialect with storage ready parameters.
pub async fn executor_run<D: Dialect>(dialect: D) -> Result<()> {
    let labels: RowNames = Arc::from(["id".to_string(), "name".to_string()]);
    let rows = vec![
        Row::new(labels.clone(), [Value::Int64(1), Value::from("Ann")].into()),
        Row::new(labels.clone(), [Value::Int64(2), Value::from("Bob")].into()),
    ];
    let mut executor = RecordingExecutor::new(dialect).with_rows(rows.clone());
    let uuid = Uuid::new_v4();

    let insert = Insert::into("users")
        .columns(["id", "active", "token"])
        .values([Value::UInt32(5), Value::Boolean(true), Value::Uuid(uuid)]);
    let result = executor.run(&insert).await?;
    assert_eq!(result.rows_affected, 1);
    let (sql, params) = insert.render(executor.dialect().as_dyn())?;
    let params = executor.dialect().params_to_storage(params)?;
    assert_eq!(executor.statements, [(sql, params)]);

    executor.statements.clear();
    let select = Select::new()
        .column(col("id"))
        .column(col("name"))
        .from(table("users"))
        .filter(col("name").like(lit("A%")));
    let fetched = executor.query(&select).try_collect::<Vec<_>>().await?;
    assert_eq!(fetched, rows);
    assert_eq!(fetched[0].get_column("name"), Some(&Value::from("Ann")));
    assert_eq!(fetched[1].get_column("missing"), None);
    assert_eq!(executor.statements.len(), 1);
    assert_eq!(executor.statements[0].1, [Value::from("A%")]);

    let (sql, params) = select.render(executor.dialect().as_dyn())?;
    let first = executor.fetch_one(sql.clone(), params.clone()).await?;
    assert_eq!(first.as_ref(), rows.first());
    let all = executor.fetch_all(sql, params).await?;
    assert_eq!(all.len(), 2);

    executor.statements.clear();
    let (sql, _) = Insert::into("users")
        .columns(["id"])
        .values([0])
        .render(executor.dialect().as_dyn())?;
    let result = executor
        .execute_many(
            sql,
            vec![
                vec![Value::Int32(1)],
                vec![Value::Int32(2)],
                vec![Value::Int32(3)],
            ],
        )
        .await?;
    assert_eq!(result.rows_affected, 3);
    assert_eq!(executor.statements.len(), 3);

    // Rendering errors never reach the connection
    executor.statements.clear();
    let error = silent_logs! {
        executor
            .run(&Insert::into("users"))
            .await
            .expect_err("Insert without rows must fail before execution")
    };
    assert!(matches!(
        DialectError::of(&error),
        Some(DialectError::InvalidExpression(..))
    ));
    assert!(executor.statements.is_empty());
    Ok(())
}
