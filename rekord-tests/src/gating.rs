use rekord::{
    ArrayExpression, BoxedExpression, ColumnType, Cte, Delete, Dialect, DialectError, Expression,
    ExpressionExt, Grouping, Insert, Join, JoinType, JsonTable, JsonTableColumn, Lateral, Merge,
    MergeClause, OnConflict, Select, SetOperation, Subquery, Truncate, Wildcard, WindowFunction,
    Value, WindowSpec, WithQuery, col, func, lit, table,
};

fn members() -> (Select, Select) {
    (
        Select::new().column(col("id")).from(table("a")),
        Select::new().column(col("id")).from(table("b")),
    )
}

struct Case {
    feature: &'static str,
    supported: fn(&dyn Dialect) -> bool,
    expression: BoxedExpression,
}

fn case(
    feature: &'static str,
    supported: fn(&dyn Dialect) -> bool,
    expression: impl Expression + 'static,
) -> Case {
    Case {
        feature,
        supported,
        expression: expression.boxed(),
    }
}

fn cases() -> Vec<Case> {
    let (union_lhs, union_rhs) = members();
    let (intersect_lhs, intersect_rhs) = members();
    let (except_lhs, except_rhs) = members();
    vec![
        case(
            "WITH",
            |d: &dyn Dialect| d.supports_basic_cte(),
            WithQuery::new([Cte::new("x", members().0)], Select::new().from(table("x"))),
        ),
        case(
            "WITH RECURSIVE",
            |d: &dyn Dialect| d.supports_basic_cte() && d.supports_recursive_cte(),
            WithQuery::new(
                [Cte::new("x", members().0).recursive()],
                Select::new().from(table("x")),
            ),
        ),
        case(
            "MATERIALIZED",
            |d: &dyn Dialect| d.supports_basic_cte() && d.supports_materialized_cte(),
            WithQuery::new(
                [Cte::new("x", members().0).materialized(true)],
                Select::new().from(table("x")),
            ),
        ),
        case(
            "WITH in DELETE",
            |d: &dyn Dialect| d.supports_basic_cte() && d.supports_cte_in_dml(),
            WithQuery::new(
                [Cte::new("x", members().0)],
                Delete::from("a").filter(col("id").in_(Subquery::new(members().1))),
            ),
        ),
        case(
            "RIGHT JOIN",
            |d: &dyn Dialect| d.supports_right_join(),
            Select::new()
                .from(Join::new(JoinType::Right, table("a"), table("b")).on(col("x").eq(col("y")))),
        ),
        case(
            "FULL JOIN",
            |d: &dyn Dialect| d.supports_full_join(),
            Select::new()
                .from(Join::new(JoinType::Full, table("a"), table("b")).on(col("x").eq(col("y")))),
        ),
        case(
            "LATERAL",
            |d: &dyn Dialect| d.supports_lateral_join(),
            Select::new()
                .from(
                    Join::new(
                        JoinType::Cross,
                        table("a"),
                        Lateral::new(Subquery::new(members().1).alias("l")),
                    ),
                ),
        ),
        case(
            "JSON path",
            |d: &dyn Dialect| d.supports_json_arrows(),
            Select::new()
                .column(col("payload").json("$.user.name").text())
                .from(table("events")),
        ),
        case(
            "JSON_TABLE",
            |d: &dyn Dialect| d.supports_json_table(),
            Select::new()
                .from(
                    JsonTable::new(col("payload"), "$.items[*]")
                        .column(JsonTableColumn::path("sku", ColumnType::Text, "$.sku"))
                        .alias("items"),
                ),
        ),
        case(
            "array operators",
            |d: &dyn Dialect| d.supports_array_operators(),
            col("tags")
                .contains(ArrayExpression::new([lit("rust").boxed()])),
        ),
        case(
            "ROLLUP",
            |d: &dyn Dialect| d.supports_rollup(),
            Select::new()
                .from(table("sales"))
                .group_by(Grouping::Rollup(vec![col("year").boxed(), col("month").boxed()])),
        ),
        case(
            "CUBE",
            |d: &dyn Dialect| d.supports_cube(),
            Select::new()
                .from(table("sales"))
                .group_by(Grouping::Cube(vec![col("year").boxed()])),
        ),
        case(
            "GROUPING SETS",
            |d: &dyn Dialect| d.supports_grouping_sets(),
            Select::new()
                .from(table("sales"))
                .group_by(Grouping::Sets(vec![vec![col("year").boxed()], vec![]])),
        ),
        case(
            "window functions",
            |d: &dyn Dialect| d.supports_window_functions(),
            WindowFunction::new(
                func("ROW_NUMBER", []),
                WindowSpec::new().order_by(col("id").asc()),
            ),
        ),
        case(
            "FILTER",
            |d: &dyn Dialect| d.supports_window_functions() && d.supports_filter_clause(),
            WindowFunction::new(func("COUNT", [col("id").boxed()]), WindowSpec::new())
                .filter(col("active").eq(lit(true))),
        ),
        case(
            "UNION",
            |d: &dyn Dialect| d.supports_union(),
            SetOperation::union(union_lhs, union_rhs),
        ),
        case(
            "INTERSECT",
            |d: &dyn Dialect| d.supports_intersect(),
            SetOperation::intersect(intersect_lhs, intersect_rhs),
        ),
        case(
            "EXCEPT",
            |d: &dyn Dialect| d.supports_except(),
            SetOperation::except(except_lhs, except_rhs),
        ),
        case(
            "RETURNING",
            |d: &dyn Dialect| d.supports_returning(),
            Delete::from("a")
                .filter(col("id").eq(lit(1)))
                .returning(col("id")),
        ),
        case(
            "upsert",
            |d: &dyn Dialect| d.supports_upsert(),
            Insert::into("a")
                .columns(["id", "name"])
                .values([Value::Int32(1), Value::Varchar("x".into())])
                .on_conflict(OnConflict::do_update(["id"], ["name"])),
        ),
        case(
            "TRUNCATE",
            |d: &dyn Dialect| d.supports_truncate(),
            Truncate::table("a"),
        ),
        case(
            "TRUNCATE RESTART IDENTITY",
            |d: &dyn Dialect| d.supports_truncate() && d.supports_truncate_restart_identity(),
            Truncate::table("a").restart_identity(),
        ),
        case(
            "TRUNCATE CASCADE",
            |d: &dyn Dialect| d.supports_truncate() && d.supports_truncate_cascade(),
            Truncate::table("a").cascade(),
        ),
        case(
            "MERGE",
            |d: &dyn Dialect| d.supports_merge(),
            Merge::into(
                table("a").alias("t"),
                table("b").alias("s"),
                col("id").of("t").eq(col("id").of("s")),
            )
            .when(MergeClause::MatchedDelete { condition: None }),
        ),
    ]
}

/// Supported features render, the others fail with `UnsupportedFeature`.
pub async fn gating<D: Dialect>(dialect: &D) {
    for Case {
        feature,
        supported,
        expression,
    } in cases()
    {
        let result = expression.render(dialect.as_dyn());
        if supported(dialect.as_dyn()) {
            if let Err(error) = result {
                panic!("{} should render on {}: {:#}", feature, dialect.name(), error);
            }
        } else {
            let error = result.expect_err(&format!(
                "{} should not render on {}",
                feature,
                dialect.name()
            ));
            assert!(
                matches!(
                    DialectError::of(&error),
                    Some(DialectError::UnsupportedFeature { .. })
                ),
                "{}: unexpected error kind {:#}",
                feature,
                error
            );
        }
    }
}

/// Array construction and wildcards render regardless of capabilities.
pub async fn never_gated<D: Dialect>(dialect: &D) {
    let (sql, params) = Select::new()
        .column(Wildcard::of("o"))
        .column(ArrayExpression::new([lit(1).boxed(), lit(2).boxed()]))
        .from(table("orders").alias("o"))
        .render(dialect.as_dyn())
        .expect("Array construction and wildcards must always render");
    assert!(sql.contains("ARRAY["), "{}", sql);
    assert!(sql.contains(".*"), "{}", sql);
    assert_eq!(params.len(), 2);
}
