#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rekord_core::{
        ColumnDefinition, ColumnType, CreateTable, Dialect, DialectError, Driver, Executor,
        Expression, ExpressionExt, Insert, JoinType, OnConflict, Select, ServerVersion, Value, col,
        lit, table,
    };
    use rekord_sqlite::{SqliteDialect, SqliteDriver};
    use rekord_tests::{RecordingExecutor, execute_tests, init_logs, silent_logs};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::macros::{date, datetime};
    use uuid::Uuid;

    #[tokio::test]
    async fn sqlite() {
        init_logs();
        execute_tests(SqliteDialect::new()).await;
    }

    #[tokio::test]
    async fn sqlite_3_20() {
        init_logs();
        execute_tests(SqliteDialect::with_version(ServerVersion::new(3, 20, 0))).await;
    }

    #[test]
    fn version_gates() {
        let old = SqliteDialect::with_version(ServerVersion::new(3, 20, 0));
        let dialect = SqliteDialect::new();
        assert!(!old.supports_window_functions());
        assert!(!old.supports_returning());
        assert!(!old.supports_upsert());
        assert!(!old.supports_right_join());
        assert!(dialect.supports_window_functions());
        assert!(dialect.supports_filter_clause());
        assert!(dialect.supports_returning());
        assert!(dialect.supports_full_join());
        assert!(dialect.supports_materialized_cte());
        assert!(!dialect.supports_cte_in_dml());
        assert!(!dialect.supports_truncate());
        assert!(!dialect.supports_json_table());
        assert!(!dialect.supports_array_operators());
        assert!(!dialect.supports_merge());
    }

    #[test]
    fn select_with_join() {
        let (sql, params) = Select::new()
            .column(col("id").of("u"))
            .column(col("name").of("t").alias("team"))
            .from(table("users").alias("u"))
            .join(
                JoinType::Left,
                table("teams").alias("t"),
                Some(col("team_id").of("u").eq(col("id").of("t")).boxed()),
            )
            .filter(col("active").of("u").eq(lit(true)))
            .order_by(col("name").of("t").asc())
            .limit(10)
            .render(&SqliteDialect::new())
            .expect("Could not render the select");
        assert_eq!(
            sql,
            indoc! {r#"
                SELECT "u"."id", "t"."name" AS "team"
                FROM "users" AS "u" LEFT JOIN "teams" AS "t" ON "u"."team_id" = "t"."id"
                WHERE "u"."active" = ?
                ORDER BY "t"."name" ASC
                LIMIT ?
            "#}
            .trim()
        );
        assert_eq!(params, [Value::Boolean(true), Value::Int32(10)]);
    }

    #[test]
    fn offset_without_limit() {
        let dialect = SqliteDialect::new();
        let (sql, params) = dialect.format_limit_offset(None, Some(Value::Int32(30)));
        assert_eq!(sql.as_deref(), Some("LIMIT -1 OFFSET ?"));
        assert_eq!(params, [Value::Int32(30)]);
        let (sql, params) = dialect.format_limit_offset(Some(Value::Int32(5)), None);
        assert_eq!(sql.as_deref(), Some("LIMIT ?"));
        assert_eq!(params, [Value::Int32(5)]);
    }

    #[test]
    fn upsert() {
        let (sql, _) = Insert::into("stock")
            .columns(["sku", "quantity"])
            .values([Value::from("A-1"), Value::Int32(3)])
            .on_conflict(OnConflict::do_update(["sku"], ["quantity"]))
            .render(&SqliteDialect::new())
            .expect("Could not render the upsert");
        assert_eq!(
            sql,
            indoc! {r#"
                INSERT INTO "stock" ("sku", "quantity")
                VALUES (?, ?)
                ON CONFLICT ("sku") DO UPDATE SET "quantity" = EXCLUDED."quantity"
            "#}
            .trim()
        );
        let error = Insert::into("stock")
            .columns(["sku"])
            .values(["A-1"])
            .on_conflict(OnConflict::do_nothing(["sku"]))
            .render(&SqliteDialect::with_version(ServerVersion::new(3, 20, 0)))
            .expect_err("Upsert needs 3.24");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn create_table() {
        let (sql, _) = CreateTable::new("products")
            .if_not_exists()
            .column(
                "id",
                ColumnDefinition::new(ColumnType::Integer)
                    .primary_key()
                    .autoincrement(),
            )
            .column(
                "name",
                ColumnDefinition::new(ColumnType::Varchar)
                    .length(80)
                    .not_null(),
            )
            .column("price", ColumnType::decimal(10, 2))
            .column(
                "available",
                ColumnDefinition::new(ColumnType::Boolean).default_value(true),
            )
            .column("created", ColumnType::Timestamp)
            .column("code", ColumnType::Uuid)
            .render(&SqliteDialect::new())
            .expect("Could not render the table");
        assert_eq!(
            sql,
            indoc! {r#"
                CREATE TABLE IF NOT EXISTS "products" (
                "id" INTEGER PRIMARY KEY AUTOINCREMENT,
                "name" TEXT NOT NULL,
                "price" TEXT,
                "available" INTEGER DEFAULT 1,
                "created" TEXT,
                "code" TEXT
                )
            "#}
            .trim()
        );
        let error = CreateTable::new("tags")
            .column("values", ColumnType::array(ColumnType::Text))
            .render(&SqliteDialect::new())
            .expect_err("Arrays have no sqlite storage");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn storage_adapters() {
        let dialect = SqliteDialect::new();
        let cases = [
            (Value::Boolean(true), Value::Int64(1)),
            (
                Value::Decimal(Decimal::from_str("19.99").unwrap()),
                Value::from("19.99"),
            ),
            (Value::Date(date!(2024 - 03 - 01)), Value::from("2024-03-01")),
            (
                Value::Timestamp(datetime!(2024-03-01 08:15:00)),
                Value::from("2024-03-01 08:15:00"),
            ),
            (
                Value::Uuid(Uuid::from_str("9f1c2e3d-4b5a-4c6d-8e7f-0a1b2c3d4e5f").unwrap()),
                Value::from("9f1c2e3d-4b5a-4c6d-8e7f-0a1b2c3d4e5f"),
            ),
            (
                Value::List(vec![Value::Int32(1), Value::Int32(2)]),
                Value::from("[1,2]"),
            ),
            (Value::UInt64(42), Value::Int64(42)),
            (Value::Null, Value::Null),
        ];
        for (value, expected) in cases {
            assert_eq!(dialect.to_storage(value).unwrap(), expected);
        }
        assert_eq!(
            dialect
                .from_storage(Value::Int64(0), &ColumnType::Boolean)
                .unwrap(),
            Value::Boolean(false)
        );
    }

    #[tokio::test]
    async fn executor_binds_storage_values() {
        let mut executor = RecordingExecutor::new(SqliteDialect::new());
        executor
            .run(
                &Insert::into("flags")
                    .columns(["name", "enabled"])
                    .values([Value::from("dark_mode"), Value::Boolean(false)]),
            )
            .await
            .expect("Could not run the insert");
        assert_eq!(
            executor.statements[0].1,
            [Value::from("dark_mode"), Value::Int64(0)]
        );
    }

    #[test]
    fn driver() {
        let driver = SqliteDriver::new();
        let dialect = driver
            .dialect_from_url("sqlite://data.db?mode=rwc&server_version=3.30.1")
            .expect("Could not read the url");
        assert_eq!(dialect.server_version(), Some(ServerVersion::new(3, 30, 1)));
        assert!(dialect.supports_filter_clause());
        assert!(!dialect.supports_returning());
        let dialect = driver
            .dialect_from_url("sqlite::memory:")
            .expect("Could not read the url");
        assert_eq!(dialect.server_version(), Some(SqliteDialect::DEFAULT_VERSION));
    }

    #[test]
    fn wrong_url() {
        let driver = SqliteDriver::new();
        silent_logs! {
            let error = driver
                .dialect_from_url("postgres://localhost/db")
                .expect_err("Sqlite must refuse other schemes");
            assert!(matches!(
                DialectError::of(&error),
                Some(DialectError::InvalidConfiguration(..))
            ));
            assert!(driver.dialect_from_url("not a url").is_err());
            assert!(
                driver
                    .dialect_from_url("sqlite://data.db?server_version=latest")
                    .is_err()
            );
        };
    }
}
