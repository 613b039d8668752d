use crate::assert_placeholders;
use rekord::{
    ColumnDefinition, ColumnType, CreateTable, Delete, Dialect, DialectError, DropTable,
    Expression, ExpressionExt, Insert, Join, JoinType, Select, Update, Value, col, func, lit,
    table,
};

fn is_invalid_expression(error: &rekord::Error) -> bool {
    matches!(
        DialectError::of(error),
        Some(DialectError::InvalidExpression(..))
    )
}

/// DML and DDL shapes shared by every dialect, identifiers and placeholders come from the dialect.
pub async fn statements<D: Dialect>(dialect: &D) {
    let dialect = dialect.as_dyn();
    let q = |name: &str| dialect.format_identifier(name);
    let p = |position: usize| dialect.parameter_placeholder(Some(position));

    // Insert
    let (sql, params) = Insert::into("users")
        .columns(["id", "name"])
        .values([Value::Int32(1), Value::from("Ann")])
        .values([Value::Int32(2), Value::from("Bob")])
        .render(dialect)
        .expect("Multi row insert must render");
    assert_eq!(
        sql,
        format!(
            "INSERT INTO {} ({}, {})\nVALUES ({}, {}), ({}, {})",
            q("users"),
            q("id"),
            q("name"),
            p(1),
            p(2),
            p(3),
            p(4),
        )
    );
    assert_eq!(
        params,
        [
            Value::Int32(1),
            Value::from("Ann"),
            Value::Int32(2),
            Value::from("Bob"),
        ]
    );
    assert_placeholders(dialect, &sql, &params);

    let (sql, params) = Insert::into("audit")
        .columns(["user_id"])
        .select(
            Select::new()
                .column(col("id"))
                .from(table("users"))
                .filter(col("active").eq(lit(true))),
        )
        .render(dialect)
        .expect("Insert from select must render");
    assert!(
        sql.starts_with(&format!(
            "INSERT INTO {} ({})\nSELECT {}",
            q("audit"),
            q("user_id"),
            q("id")
        )),
        "{}",
        sql
    );
    assert_eq!(params, [Value::Boolean(true)]);

    let (sql, params) = Insert::into("counters")
        .default_values()
        .render(dialect)
        .expect("Insert default values must render");
    assert_eq!(sql, format!("INSERT INTO {} DEFAULT VALUES", q("counters")));
    assert!(params.is_empty());

    let error = Insert::into("users")
        .columns(["id", "name"])
        .values([1])
        .render(dialect)
        .expect_err("Row width must match the column list");
    assert!(is_invalid_expression(&error), "{:#}", error);
    let error = Insert::into("users")
        .render(dialect)
        .expect_err("Insert without rows must fail");
    assert!(is_invalid_expression(&error), "{:#}", error);
    let error = Insert::into("users")
        .columns(["id"])
        .default_values()
        .render(dialect)
        .expect_err("DEFAULT VALUES does not take columns");
    assert!(is_invalid_expression(&error), "{:#}", error);

    // Update
    let (sql, params) = Update::table("users")
        .set("name", "Carl")
        .set_expression("visits", col("visits").add(lit(1)))
        .filter(col("id").eq(lit(3)))
        .render(dialect)
        .expect("Update must render");
    assert_eq!(
        sql,
        format!(
            "UPDATE {}\nSET {} = {}, {} = {} + {}\nWHERE {} = {}",
            q("users"),
            q("name"),
            p(1),
            q("visits"),
            q("visits"),
            p(2),
            q("id"),
            p(3),
        )
    );
    assert_eq!(
        params,
        [Value::from("Carl"), Value::Int32(1), Value::Int32(3)]
    );
    let error = Update::table("users")
        .filter(col("id").eq(lit(1)))
        .render(dialect)
        .expect_err("Update without assignments must fail");
    assert!(is_invalid_expression(&error), "{:#}", error);

    // Delete
    let (sql, params) = Delete::from("sessions")
        .filter(col("expired").eq(lit(true)).or(col("user_id").is_null()))
        .filter(col("created").lt(lit("2024-01-01")))
        .render(dialect)
        .expect("Delete must render");
    assert_eq!(
        sql,
        format!(
            "DELETE FROM {}\nWHERE ({} = {} OR {} IS NULL) AND {} < {}",
            q("sessions"),
            q("expired"),
            p(1),
            q("user_id"),
            q("created"),
            p(2),
        )
    );
    assert_eq!(params.len(), 2);

    // Select
    let (sql, params) = Select::new()
        .column(col("country"))
        .column(func("COUNT", [col("id").boxed()]).alias("total"))
        .from(table("users"))
        .group_by(col("country"))
        .having(func("COUNT", [col("id").boxed()]).gt(lit(10)))
        .order_by(col("country").asc())
        .limit(5)
        .render(dialect)
        .expect("Aggregate select must render");
    assert!(
        sql.starts_with(&format!(
            "SELECT {}, COUNT({}) AS {}\nFROM {}\nGROUP BY {}\nHAVING COUNT({}) > {}\nORDER BY {} ASC\nLIMIT ",
            q("country"),
            q("id"),
            q("total"),
            q("users"),
            q("country"),
            q("id"),
            p(1),
            q("country"),
        )),
        "{}",
        sql
    );
    assert_eq!(params, [Value::Int32(10), Value::Int32(5)]);
    assert_placeholders(dialect, &sql, &params);

    let (sql, params) = Select::new()
        .from(table("users"))
        .render(dialect)
        .expect("Select without columns must render");
    assert_eq!(sql, format!("SELECT *\nFROM {}", q("users")));
    assert!(params.is_empty());

    let (sql, _) = Select::new()
        .column(col("name").of("u"))
        .from(
            Join::new(JoinType::Inner, table("users").alias("u"), table("teams").alias("t"))
                .using(["team_id"]),
        )
        .render(dialect)
        .expect("Join with USING must render");
    assert_eq!(
        sql,
        format!(
            "SELECT {}.{}\nFROM {} AS {} INNER JOIN {} AS {} USING ({})",
            q("u"),
            q("name"),
            q("users"),
            q("u"),
            q("teams"),
            q("t"),
            q("team_id"),
        )
    );
    let error = Select::new()
        .from(Join::new(JoinType::Inner, table("users"), table("teams")))
        .render(dialect)
        .expect_err("Inner join without constraint must fail");
    assert!(is_invalid_expression(&error), "{:#}", error);
    let error = Select::new()
        .from(
            Join::new(JoinType::Cross, table("users"), table("teams"))
                .on(col("a").eq(col("b"))),
        )
        .render(dialect)
        .expect_err("Cross join with constraint must fail");
    assert!(is_invalid_expression(&error), "{:#}", error);

    // Create and drop
    let id = ColumnDefinition::new(ColumnType::Integer).primary_key();
    let name = ColumnDefinition::new(ColumnType::Varchar)
        .length(64)
        .not_null();
    let (sql, params) = CreateTable::new("teams")
        .if_not_exists()
        .column("id", id.clone())
        .column("name", name.clone())
        .render(dialect)
        .expect("Create table must render");
    assert_eq!(
        sql,
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{} {},\n{} {}\n)",
            q("teams"),
            q("id"),
            dialect
                .format_column_definition(&id)
                .expect("Integer column must be supported"),
            q("name"),
            dialect
                .format_column_definition(&name)
                .expect("Varchar column must be supported"),
        )
    );
    assert!(params.is_empty());

    let (sql, _) = CreateTable::new("memberships")
        .column("user_id", ColumnType::Integer)
        .column("team_id", ColumnType::Integer)
        .primary_key(["user_id", "team_id"])
        .render(dialect)
        .expect("Composite primary key must render");
    assert!(
        sql.ends_with(&format!(
            ",\nPRIMARY KEY ({}, {})\n)",
            q("user_id"),
            q("team_id")
        )),
        "{}",
        sql
    );
    let error = CreateTable::new("empty")
        .render(dialect)
        .expect_err("Create table without columns must fail");
    assert!(is_invalid_expression(&error), "{:#}", error);

    let (sql, _) = DropTable::new("teams")
        .if_exists()
        .render(dialect)
        .expect("Drop table must render");
    assert_eq!(sql, format!("DROP TABLE IF EXISTS {}", q("teams")));

    // Literals
    assert!(dialect.format_string_literal("it's").contains("''"));
}
