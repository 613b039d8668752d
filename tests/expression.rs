#[cfg(test)]
mod tests {
    use rekord::{
        ArrayExpression, BinaryOpType, Capabilities, ColumnType, DialectError, Exists, Expression,
        ExpressionExt, GenericDialect, JsonTable, JsonTableColumn, Lateral, Select, Subquery,
        TableFunction, Value, Wildcard, col, func, lit, raw, table,
    };

    fn render(expression: impl Expression) -> (String, Vec<Value>) {
        expression
            .render(&GenericDialect::new())
            .expect("Could not render the expression")
    }

    fn render_all(expression: impl Expression) -> (String, Vec<Value>) {
        expression
            .render(&GenericDialect::with_capabilities(Capabilities::all()))
            .expect("Could not render the expression")
    }

    #[test]
    fn simple() {
        let (sql, params) = render(lit(1).add(lit(2)));
        assert_eq!(sql, "? + ?");
        assert_eq!(params, [Value::Int32(1), Value::Int32(2)]);

        let (sql, params) = render(col("price").mul(lit(1.2)));
        assert_eq!(sql, r#""price" * ?"#);
        assert_eq!(params, [Value::Float64(1.2)]);

        let (sql, _) = render(lit(true).and(lit(false)));
        assert_eq!(sql, "? AND ?");

        let (sql, params) = render(col("a").sub(lit(90).neg()));
        assert_eq!(sql, r#""a" - -?"#);
        assert_eq!(params, [Value::Int32(90)]);

        let (sql, _) = render(col("name").like(lit("A%")));
        assert_eq!(sql, r#""name" LIKE ?"#);

        let (sql, _) = render(col("name").not_like(lit("A%")));
        assert_eq!(sql, r#""name" NOT LIKE ?"#);

        let (sql, _) = render(col("deleted_at").is_null());
        assert_eq!(sql, r#""deleted_at" IS NULL"#);

        let (sql, _) = render(col("deleted_at").is_not_null().not());
        assert_eq!(sql, r#"NOT "deleted_at" IS NOT NULL"#);

        let (sql, _) = render(col("a").binary(BinaryOpType::Concatenation, lit("!")));
        assert_eq!(sql, r#""a" || ?"#);
    }

    #[test]
    fn precedence() {
        let (sql, _) = render(col("a").add(col("b")).mul(col("c")));
        assert_eq!(sql, r#"("a" + "b") * "c""#);

        let (sql, _) = render(col("a").mul(col("b")).add(col("c")));
        assert_eq!(sql, r#""a" * "b" + "c""#);

        // Same precedence on the right keeps the grouping
        let (sql, _) = render(col("a").sub(col("b").sub(col("c"))));
        assert_eq!(sql, r#""a" - ("b" - "c")"#);
        let (sql, _) = render(col("a").sub(col("b")).sub(col("c")));
        assert_eq!(sql, r#""a" - "b" - "c""#);

        let (sql, _) = render(
            col("x")
                .eq(lit(1))
                .or(col("y").eq(lit(2)))
                .and(col("z").gt(lit(3))),
        );
        assert_eq!(sql, r#"("x" = ? OR "y" = ?) AND "z" > ?"#);

        let (sql, _) = render(
            col("x")
                .eq(lit(1))
                .and(col("y").eq(lit(2)))
                .or(col("z").gt(lit(3))),
        );
        assert_eq!(sql, r#""x" = ? AND "y" = ? OR "z" > ?"#);

        let (sql, _) = render(col("a").eq(lit(1)).or(col("b").eq(lit(2))).not());
        assert_eq!(sql, r#"NOT ("a" = ? OR "b" = ?)"#);

        let (sql, _) = render(col("a").add(col("b")).neg());
        assert_eq!(sql, r#"-("a" + "b")"#);
    }

    #[test]
    fn parameters_in_order() {
        let (sql, params) = render(
            col("age")
                .ge(lit(18))
                .and(col("name").in_list([lit("Ann").boxed(), lit("Bob").boxed()]))
                .and(col("score").not_in(lit(vec![1, 2, 3]))),
        );
        assert_eq!(
            sql,
            r#""age" >= ? AND "name" IN (?, ?) AND "score" NOT IN ?"#
        );
        assert_eq!(
            params,
            [
                Value::Int32(18),
                Value::from("Ann"),
                Value::from("Bob"),
                Value::List(vec![Value::Int32(1), Value::Int32(2), Value::Int32(3)]),
            ]
        );

        // Null and empty lists are still bound
        let (sql, params) = render(col("a").eq(lit(Option::<i32>::None)));
        assert_eq!(sql, r#""a" = ?"#);
        assert_eq!(params, [Value::Null]);
        let (sql, params) = render(col("a").in_(lit(Vec::<i32>::new())));
        assert_eq!(sql, r#""a" IN ?"#);
        assert_eq!(params, [Value::List(vec![])]);
    }

    #[test]
    fn identifiers() {
        let (sql, _) = render(col("id").of("users"));
        assert_eq!(sql, r#""users"."id""#);

        let (sql, _) = render(col("we\"ird"));
        assert_eq!(sql, r#""we""ird""#);

        // Aliases are declared only in the select list
        let (sql, _) = render(col("a").alias("b").eq(lit(1)));
        assert_eq!(sql, r#""a" = ?"#);
        let (sql, _) = render(Select::new().column(col("a").alias("b")));
        assert_eq!(sql, r#"SELECT "a" AS "b""#);

        let (sql, _) = render(Select::new().from(table("orders").schema("sales").alias("o")));
        assert_eq!(sql, "SELECT *\nFROM \"sales\".\"orders\" AS \"o\"");

        let (sql, _) = render(Wildcard::of("o"));
        assert_eq!(sql, r#""o".*"#);
        let (sql, _) = render(Wildcard::all());
        assert_eq!(sql, "*");

        let (sql, params) = render(raw("CURRENT_TIMESTAMP"));
        assert_eq!(sql, "CURRENT_TIMESTAMP");
        assert!(params.is_empty());
    }

    #[test]
    fn functions() {
        let (sql, _) = render(func("COUNT", [col("id").boxed()]).distinct());
        assert_eq!(sql, r#"COUNT(DISTINCT "id")"#);

        let (sql, _) = render(
            Select::new()
                .column(func("COALESCE", [col("nick").boxed(), lit("-").boxed()]).alias("n"))
                .from(table("users")),
        );
        assert_eq!(sql, "SELECT COALESCE(\"nick\", ?) AS \"n\"\nFROM \"users\"");

        let (sql, _) = render(func("NOW", []));
        assert_eq!(sql, "NOW()");
    }

    #[test]
    fn subqueries() {
        let inner = Select::new()
            .column(col("user_id"))
            .from(table("orders"))
            .filter(col("total").gt(lit(100)));
        let (sql, params) = render(col("id").in_(Subquery::new(inner)));
        assert_eq!(
            sql,
            "\"id\" IN (SELECT \"user_id\"\nFROM \"orders\"\nWHERE \"total\" > ?)"
        );
        assert_eq!(params, [Value::Int32(100)]);

        let (sql, _) = render(Exists::new(
            Select::new()
                .column(lit(1))
                .from(table("orders"))
                .filter(col("user_id").of("orders").eq(col("id").of("u"))),
        ));
        assert_eq!(
            sql,
            "EXISTS (SELECT ?\nFROM \"orders\"\nWHERE \"orders\".\"user_id\" = \"u\".\"id\")"
        );

        let (sql, _) = render(Exists::not(Select::new().from(table("bans"))));
        assert_eq!(sql, "NOT EXISTS (SELECT *\nFROM \"bans\")");

        let (sql, _) = render(
            Select::new().from(Subquery::new(Select::new().from(table("users"))).alias("u")),
        );
        assert_eq!(sql, "SELECT *\nFROM (SELECT *\nFROM \"users\") AS \"u\"");
    }

    #[test]
    fn table_functions() {
        let (sql, params) = render(
            Select::new().from(
                TableFunction::new("generate_series", [lit(1).boxed(), lit(5).boxed()])
                    .alias("g")
                    .columns(["n"]),
            ),
        );
        assert_eq!(sql, "SELECT *\nFROM generate_series(?, ?) AS \"g\"(\"n\")");
        assert_eq!(params.len(), 2);

        let error = TableFunction::new("unnest", [col("tags").boxed()])
            .columns(["tag"])
            .render(&GenericDialect::new())
            .expect_err("Column aliases need a table alias");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidExpression(..))
        ));

        let (sql, _) = render_all(Lateral::new(
            Subquery::new(Select::new().from(table("items"))).alias("i"),
        ));
        assert_eq!(sql, "LATERAL (SELECT *\nFROM \"items\") AS \"i\"");
        let error = Lateral::new(Subquery::new(Select::new()).alias("i"))
            .render(&GenericDialect::new())
            .expect_err("LATERAL is off by default");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn json() {
        let (sql, params) = render_all(col("doc").json("address").json("city").text());
        assert_eq!(sql, r#""doc" -> ? ->> ?"#);
        assert_eq!(params, [Value::from("address"), Value::from("city")]);

        let path = col("doc").json("$.a.b[0].c");
        assert_eq!(path.segments(), ["a", "b", "0", "c"]);
        let path = col("doc").json("address");
        assert_eq!(path.segments(), ["address"]);

        let (sql, _) = render_all(
            JsonTable::new(col("doc"), "$.items[*]")
                .column(JsonTableColumn::ordinality("n"))
                .column(JsonTableColumn::path("sku", ColumnType::Text, "$.sku"))
                .alias("jt"),
        );
        assert_eq!(
            sql,
            r#"JSON_TABLE("doc", '$.items[*]' COLUMNS ("n" FOR ORDINALITY, "sku" TEXT PATH '$.sku')) AS "jt""#
        );
        let error = JsonTable::new(col("doc"), "$")
            .render(&GenericDialect::with_capabilities(Capabilities::all()))
            .expect_err("JSON_TABLE needs columns");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidExpression(..))
        ));

        let error = col("doc")
            .json("a")
            .render(&GenericDialect::new())
            .expect_err("JSON operators are off by default");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn arrays() {
        let (sql, params) = render(ArrayExpression::new([lit(1).boxed(), lit(2).boxed()]));
        assert_eq!(sql, "ARRAY[?, ?]");
        assert_eq!(params.len(), 2);

        let (sql, _) = render_all(col("tags").contains(ArrayExpression::new([lit("a").boxed()])));
        assert_eq!(sql, r#""tags" @> ARRAY[?]"#);
        let (sql, _) = render_all(col("tags").contained_by(col("allowed")));
        assert_eq!(sql, r#""tags" <@ "allowed""#);
        let (sql, _) = render_all(col("tags").overlaps(col("other")));
        assert_eq!(sql, r#""tags" && "other""#);
        let (sql, _) = render_all(lit(3).any(col("scores").of("s")));
        assert_eq!(sql, r#"? = ANY("s"."scores")"#);
        let (sql, _) = render_all(col("a").add(col("b")).any(col("c")));
        assert_eq!(sql, r#""a" + "b" = ANY("c")"#);
    }
}
