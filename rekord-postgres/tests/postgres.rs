#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rekord_core::{
        ArrayExpression, ColumnDefinition, ColumnType, Context, CreateTable, Cte, Dialect,
        DialectError, Driver, Expression, ExpressionExt, FrameBound, FrameUnits, Grouping, Insert,
        JoinType, Merge, MergeClause, OnConflict, Select, ServerVersion, SetOperation, Truncate,
        Value, WindowFrame, WindowFunction, WindowSpec, WithQuery, col, func, lit, table,
    };
    use rekord_postgres::{PostgresDialect, PostgresDriver};
    use rekord_tests::{assert_placeholders, execute_tests, init_logs, silent_logs};

    fn is_unsupported(error: &rekord_core::Error) -> bool {
        matches!(
            DialectError::of(error),
            Some(DialectError::UnsupportedFeature { .. })
        )
    }

    #[tokio::test]
    async fn postgres() {
        init_logs();
        execute_tests(PostgresDialect::new()).await;
    }

    #[tokio::test]
    async fn postgres_9_4() {
        init_logs();
        execute_tests(PostgresDialect::with_version(ServerVersion::new(9, 4, 0))).await;
    }

    #[test]
    fn version_gates() {
        let v = |major, minor| PostgresDialect::with_version(ServerVersion::new(major, minor, 0));
        assert!(!v(8, 3).supports_basic_cte());
        assert!(v(8, 4).supports_recursive_cte());
        assert!(!v(11, 0).supports_materialized_cte());
        assert!(v(12, 0).supports_materialized_cte());
        assert!(!v(9, 2).supports_lateral_join());
        assert!(!v(9, 4).supports_upsert());
        assert!(v(9, 5).supports_upsert());
        assert!(v(9, 5).supports_grouping_sets());
        assert!(!v(14, 0).supports_merge());
        assert!(v(15, 0).supports_merge());
        assert!(!v(16, 0).supports_json_table());
        assert!(v(17, 0).supports_json_table());
        assert!(v(16, 0).supports_cte_in_dml());
        assert!(v(16, 0).supports_array_operators());
    }

    #[test]
    fn numbered_placeholders() {
        let dialect = PostgresDialect::new();
        let (sql, params) = Select::new()
            .column(col("id"))
            .from(table("orders"))
            .filter(col("status").eq(lit("paid")))
            .filter(col("total").gt(lit(50)))
            .limit(10)
            .offset(20)
            .render(&dialect)
            .expect("Could not render the select");
        assert_eq!(
            sql,
            indoc! {r#"
                SELECT "id"
                FROM "orders"
                WHERE "status" = $1 AND "total" > $2
                LIMIT $3 OFFSET $4
            "#}
            .trim()
        );
        assert_placeholders(&dialect, &sql, &params);
        assert_eq!(dialect.parameter_placeholder(None), "$1");
        assert_eq!(dialect.parameter_placeholder(Some(7)), "$7");
    }

    #[test]
    fn json_and_arrays() {
        let dialect = PostgresDialect::new();
        let (sql, params) = Select::new()
            .column(col("payload").json("$.customer"))
            .from(table("events"))
            .filter(col("payload").json("$.items[0].sku").text().eq(lit("A-1")))
            .filter(col("tags").contains(ArrayExpression::new([
                lit("rust").boxed(),
                lit("sql").boxed(),
            ])))
            .filter(lit(5).any(col("scores")))
            .render(&dialect)
            .expect("Could not render the json query");
        assert_eq!(
            sql,
            indoc! {r#"
                SELECT "payload" #> $1::text[]
                FROM "events"
                WHERE "payload" #>> $2::text[] = $3 AND "tags" @> ARRAY[$4, $5] AND $6 = ANY("scores")
            "#}
            .trim()
        );
        assert_eq!(
            params,
            [
                Value::from("{customer}"),
                Value::from("{items,0,sku}"),
                Value::from("A-1"),
                Value::from("rust"),
                Value::from("sql"),
                Value::Int32(5),
            ]
        );
        let error = col("payload")
            .json("a")
            .render(&PostgresDialect::with_version(ServerVersion::new(9, 2, 0)))
            .expect_err("Json operators need 9.3");
        assert!(is_unsupported(&error));
    }

    #[test]
    fn window_functions() {
        let (sql, params) = Select::new()
            .column(col("dept"))
            .column(WindowFunction::new(
                func("ROW_NUMBER", []).alias("position"),
                WindowSpec::new()
                    .partition_by(col("dept"))
                    .order_by(col("salary").desc()),
            ))
            .column(
                WindowFunction::new(
                    func("SUM", [col("amount").boxed()]).alias("weekly"),
                    WindowSpec::new().order_by(col("day").asc()).frame(WindowFrame {
                        units: FrameUnits::Rows,
                        start: FrameBound::Preceding(6),
                        end: Some(FrameBound::CurrentRow),
                    }),
                )
                .filter(col("refunded").eq(lit(false))),
            )
            .from(table("payroll"))
            .render(&PostgresDialect::new())
            .expect("Could not render the window functions");
        assert_eq!(
            sql,
            indoc! {r#"
                SELECT "dept", ROW_NUMBER() OVER (PARTITION BY "dept" ORDER BY "salary" DESC) AS "position", SUM("amount") FILTER (WHERE "refunded" = $1) OVER (ORDER BY "day" ASC ROWS BETWEEN 6 PRECEDING AND CURRENT ROW) AS "weekly"
                FROM "payroll"
            "#}
            .trim()
        );
        assert_eq!(params, [Value::Boolean(false)]);
    }

    #[test]
    fn recursive_cte() {
        let anchor = Select::new()
            .column(col("id"))
            .column(col("parent_id"))
            .from(table("nodes"))
            .filter(col("parent_id").is_null());
        let step = Select::new()
            .column(col("id").of("n"))
            .column(col("parent_id").of("n"))
            .from(table("nodes").alias("n"))
            .join(
                JoinType::Inner,
                table("tree").alias("t"),
                Some(col("parent_id").of("n").eq(col("id").of("t")).boxed()),
            );
        let (sql, params) = WithQuery::new(
            [Cte::new("tree", SetOperation::union(anchor, step).all())
                .recursive()
                .columns(["id", "parent_id"])
                .materialized(true)],
            Select::new().from(table("tree")),
        )
        .render(&PostgresDialect::new())
        .expect("Could not render the recursive query");
        assert_eq!(
            sql,
            indoc! {r#"
                WITH RECURSIVE "tree"("id", "parent_id") AS MATERIALIZED (SELECT "id", "parent_id"
                FROM "nodes"
                WHERE "parent_id" IS NULL
                UNION ALL
                SELECT "n"."id", "n"."parent_id"
                FROM "nodes" AS "n" INNER JOIN "tree" AS "t" ON "n"."parent_id" = "t"."id")
                SELECT *
                FROM "tree"
            "#}
            .trim()
        );
        assert!(params.is_empty());
    }

    #[test]
    fn grouping_sets() {
        let (sql, _) = Select::new()
            .column(col("region"))
            .column(func("SUM", [col("amount").boxed()]))
            .from(table("sales"))
            .group_by(Grouping::Sets(vec![vec![col("region").boxed()], vec![]]))
            .render(&PostgresDialect::new())
            .expect("Could not render the grouping sets");
        assert_eq!(
            sql,
            indoc! {r#"
                SELECT "region", SUM("amount")
                FROM "sales"
                GROUP BY GROUPING SETS (("region"), ())
            "#}
            .trim()
        );
        let error = Select::new()
            .from(table("sales"))
            .group_by(Grouping::Cube(vec![col("region").boxed()]))
            .render(&PostgresDialect::with_version(ServerVersion::new(9, 4, 0)))
            .expect_err("CUBE needs 9.5");
        assert!(is_unsupported(&error));
    }

    #[test]
    fn upsert_returning() {
        let (sql, params) = Insert::into("stock")
            .columns(["sku", "quantity"])
            .values([Value::from("A-1"), Value::Int32(3)])
            .on_conflict(OnConflict::do_update(["sku"], ["quantity"]))
            .returning(col("id"))
            .render(&PostgresDialect::new())
            .expect("Could not render the upsert");
        assert_eq!(
            sql,
            indoc! {r#"
                INSERT INTO "stock" ("sku", "quantity")
                VALUES ($1, $2)
                ON CONFLICT ("sku") DO UPDATE SET "quantity" = EXCLUDED."quantity"
                RETURNING "id"
            "#}
            .trim()
        );
        assert_eq!(params.len(), 2);
        let error = Insert::into("stock")
            .columns(["sku"])
            .values(["A-1"])
            .on_conflict(OnConflict::do_update(Vec::<String>::new(), ["quantity"]))
            .render(&PostgresDialect::new())
            .expect_err("DO UPDATE needs a conflict target");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidExpression(..))
        ));
    }

    #[test]
    fn truncate() {
        let dialect = PostgresDialect::new();
        let (sql, _) = Truncate::table("logs")
            .restart_identity()
            .cascade()
            .render(&dialect)
            .expect("Could not render the truncate");
        assert_eq!(sql, r#"TRUNCATE TABLE "logs" RESTART IDENTITY CASCADE"#);
        let (sql, _) = Truncate::table("logs")
            .option("continue_identity", "true")
            .option("restrict", "on")
            .render(&dialect)
            .expect("Could not render the truncate");
        assert_eq!(sql, r#"TRUNCATE TABLE "logs" CONTINUE IDENTITY RESTRICT"#);
        let (sql, _) = silent_logs! {
            Truncate::table("logs")
                .option("vacuum", "true")
                .option("restrict", "off")
                .render(&dialect)
                .expect("Unknown options are ignored")
        };
        assert_eq!(sql, r#"TRUNCATE TABLE "logs""#);
        let error = Truncate::table("logs")
            .cascade()
            .option("restrict", "true")
            .render(&dialect)
            .expect_err("CASCADE and RESTRICT conflict");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidExpression(..))
        ));
    }

    #[test]
    fn merge() {
        let merge = || {
            Merge::into(
                table("stock").alias("t"),
                table("incoming").alias("s"),
                col("sku").of("t").eq(col("sku").of("s")),
            )
            .when(MergeClause::MatchedUpdate {
                condition: None,
                set: vec![("quantity".into(), col("quantity").of("s").boxed())],
            })
            .when(MergeClause::NotMatchedInsert {
                condition: Some(col("quantity").of("s").gt(lit(0)).boxed()),
                columns: vec!["sku".into(), "quantity".into()],
                values: vec![col("sku").of("s").boxed(), col("quantity").of("s").boxed()],
            })
        };
        let (sql, params) = merge()
            .render(&PostgresDialect::new())
            .expect("Could not render the merge");
        assert_eq!(
            sql,
            indoc! {r#"
                MERGE INTO "stock" AS "t"
                USING "incoming" AS "s" ON "t"."sku" = "s"."sku"
                WHEN MATCHED THEN UPDATE SET "quantity" = "s"."quantity"
                WHEN NOT MATCHED AND "s"."quantity" > $1 THEN INSERT ("sku", "quantity") VALUES ("s"."sku", "s"."quantity")
            "#}
            .trim()
        );
        assert_eq!(params, [Value::Int32(0)]);
        let error = merge()
            .render(&PostgresDialect::with_version(ServerVersion::new(14, 0, 0)))
            .expect_err("MERGE needs 15");
        assert!(is_unsupported(&error));
    }

    #[test]
    fn column_types() {
        let dialect = PostgresDialect::new();
        let (sql, _) = CreateTable::new("documents")
            .column(
                "id",
                ColumnDefinition::new(ColumnType::Integer)
                    .primary_key()
                    .autoincrement(),
            )
            .column("body", ColumnType::Json)
            .column("tags", ColumnType::array(ColumnType::Text))
            .column("created", ColumnType::Timestamp)
            .column("updated", ColumnType::DateTime)
            .column("price", ColumnType::decimal(10, 2))
            .column("title", ColumnType::Varchar)
            .column(
                "code",
                ColumnDefinition::new(ColumnType::Varchar).length(12),
            )
            .column("raw", ColumnType::Blob)
            .column(
                "public",
                ColumnDefinition::new(ColumnType::Boolean)
                    .not_null()
                    .default_value(false),
            )
            .render(&dialect)
            .expect("Could not render the table");
        assert_eq!(
            sql,
            indoc! {r#"
                CREATE TABLE "documents" (
                "id" SERIAL PRIMARY KEY,
                "body" JSONB,
                "tags" TEXT[],
                "created" TIMESTAMP WITH TIME ZONE,
                "updated" TIMESTAMP,
                "price" NUMERIC(10, 2),
                "title" TEXT,
                "code" VARCHAR(12),
                "raw" BYTEA,
                "public" BOOLEAN NOT NULL DEFAULT false
                )
            "#}
            .trim()
        );
        let v93 = PostgresDialect::with_version(ServerVersion::new(9, 3, 0));
        assert_eq!(v93.format_column_type(&ColumnType::Json, None).unwrap(), "JSON");
        let v91 = PostgresDialect::with_version(ServerVersion::new(9, 1, 0));
        let error = v91
            .format_column_type(&ColumnType::Json, None)
            .expect_err("JSON needs 9.2");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn literals() {
        let dialect = PostgresDialect::new();
        let mut out = String::new();
        dialect
            .write_value(
                &mut Context::default(),
                &mut out,
                &Value::Blob([0xde, 0xad, 0x01].into()),
            )
            .unwrap();
        assert_eq!(out, r"'\xdead01'");
        assert_eq!(dialect.format_string_literal("O'Reilly"), "'O''Reilly'");
        assert_eq!(dialect.format_identifier(r#"a"b"#), r#""a""b""#);
        assert_eq!(
            dialect.to_storage(Value::UInt32(u32::MAX)).unwrap(),
            Value::Int64(u32::MAX as i64)
        );
    }

    #[test]
    fn driver() {
        let driver = PostgresDriver::new();
        let dialect = silent_logs! {
            driver
                .dialect_from_url("postgresql://user@localhost:5432/shop?server_version=12.3&sslmode=disable")
                .expect("Could not read the url")
        };
        assert_eq!(dialect.server_version(), Some(ServerVersion::new(12, 3, 0)));
        assert!(dialect.supports_materialized_cte());
        assert!(!dialect.supports_merge());
        let dialect = driver
            .dialect_from_url("postgres://localhost/shop")
            .expect("Could not read the url");
        assert_eq!(dialect.server_version(), Some(PostgresDialect::DEFAULT_VERSION));
        silent_logs! {
            assert!(driver.dialect_from_url("mysql://localhost/shop").is_err());
        };
    }
}
