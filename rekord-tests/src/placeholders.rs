use rekord::{
    Dialect, Exists, Expression, ExpressionExt, JoinType, Literal, PlaceholderStyle, Select,
    Subquery, Value, col, func, lit, table,
};

/// Placeholders found outside of quoted literals and identifiers, `None` for `?`, `Some(n)` for `$n`.
pub fn placeholder_positions(sql: &str) -> Vec<Option<usize>> {
    let mut result = Vec::new();
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '?' => result.push(None),
            '$' => {
                let mut digits = String::new();
                while let Some(d) = chars.peek().filter(|v| v.is_ascii_digit()) {
                    digits.push(*d);
                    chars.next();
                }
                if let Ok(n) = digits.parse() {
                    result.push(Some(n));
                }
            }
            _ => {}
        }
    }
    result
}

/// One placeholder per parameter, numbered placeholders are consecutive from 1.
pub fn assert_placeholders(dialect: &dyn Dialect, sql: &str, params: &[Value]) {
    let positions = placeholder_positions(sql);
    assert_eq!(
        positions.len(),
        params.len(),
        "{}: placeholders and parameters differ in\n{}",
        dialect.name(),
        sql
    );
    match dialect.placeholder_style() {
        PlaceholderStyle::QuestionMark => {
            assert!(positions.iter().all(Option::is_none), "{}", sql);
        }
        PlaceholderStyle::Numbered => {
            let expected = (1..=params.len()).map(Some).collect::<Vec<_>>();
            assert_eq!(positions, expected, "{}", sql);
        }
    }
}

fn nested_query() -> Select {
    let recent = Select::new()
        .column(col("customer_id"))
        .from(table("orders"))
        .filter(col("total").gt(lit(100)))
        .filter(col("status").ne(lit("cancelled")));
    Select::new()
        .column(col("id").of("c"))
        .column(func("UPPER", [col("name").of("c").boxed()]).alias("name"))
        .from(table("customers").alias("c"))
        .join(
            JoinType::Left,
            table("addresses").alias("a"),
            Some(col("customer_id").of("a").eq(col("id").of("c")).boxed()),
        )
        .filter(col("id").of("c").in_(Subquery::new(recent)))
        .filter(
            col("country")
                .of("a")
                .in_list([lit("IT").boxed(), lit("FR").boxed(), lit("DE").boxed()])
                .or(col("vip").of("c").eq(lit(true))),
        )
        .filter(Exists::new(
            Select::new()
                .from(table("payments"))
                .filter(col("amount").ge(Literal(Value::Float64(9.5)))),
        ))
        .order_by(col("id").of("c").desc())
        .limit(20)
        .offset(40)
}

pub async fn placeholders<D: Dialect>(dialect: &D) {
    let (sql, params) = nested_query()
        .render(dialect.as_dyn())
        .expect("Could not render the nested query");
    assert_placeholders(dialect.as_dyn(), &sql, &params);
    assert_eq!(
        params,
        vec![
            Value::Int32(100),
            Value::Varchar("cancelled".into()),
            Value::Varchar("IT".into()),
            Value::Varchar("FR".into()),
            Value::Varchar("DE".into()),
            Value::Boolean(true),
            Value::Float64(9.5),
            Value::Int32(20),
            Value::Int32(40),
        ],
        "Parameters must follow the textual order of their placeholders"
    );

    let (fragment, params) = dialect.format_limit_offset(None, None);
    assert_eq!(fragment, None);
    assert!(params.is_empty());
    let (fragment, params) = dialect.format_limit_offset(Some(10.into()), Some(5.into()));
    let fragment = fragment.expect("LIMIT and OFFSET must produce a fragment");
    assert_placeholders(dialect.as_dyn(), &fragment, &params);
    assert_eq!(params, vec![Value::Int32(10), Value::Int32(5)]);
    let (fragment, params) = dialect.format_limit_offset(None, Some(5.into()));
    let fragment = fragment.expect("OFFSET alone must produce a fragment");
    assert!(fragment.contains("OFFSET"), "{}", fragment);
    assert_placeholders(dialect.as_dyn(), &fragment, &params);
}

pub async fn idempotence<D: Dialect>(dialect: &D) {
    let query = nested_query();
    let first = query.render(dialect.as_dyn()).expect("First render failed");
    let second = query.render(dialect.as_dyn()).expect("Second render failed");
    assert_eq!(first, second, "Rendering twice must produce the same output");
}
