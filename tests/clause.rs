#[cfg(test)]
mod tests {
    use rekord::{
        Expression, ExpressionExt, GenericDialect, JoinType, Value, build_group_by, build_having,
        build_order_by, col, combine_conditions, lit,
    };

    #[test]
    fn conditions() {
        let (sql, params) = combine_conditions([
            (r#""a" = ?"#, vec![Value::Int32(1)]),
            (r#"("b" = ? OR "c" = ?)"#, vec![Value::Int32(2), Value::Int32(3)]),
            (r#""d" IS NULL"#, vec![]),
        ]);
        assert_eq!(sql, r#""a" = ? AND ("b" = ? OR "c" = ?) AND "d" IS NULL"#);
        assert_eq!(params, [Value::Int32(1), Value::Int32(2), Value::Int32(3)]);

        let (sql, params) = combine_conditions(Vec::<(String, Vec<Value>)>::new());
        assert!(sql.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn rendered_conditions() {
        let dialect = GenericDialect::new();
        let fragments = [
            col("age").ge(lit(21)).render(&dialect).unwrap(),
            col("country").eq(lit("IT")).render(&dialect).unwrap(),
        ];
        let (sql, params) = combine_conditions(fragments);
        assert_eq!(sql, r#""age" >= ? AND "country" = ?"#);
        assert_eq!(params, [Value::Int32(21), Value::from("IT")]);
    }

    #[test]
    fn having() {
        let (sql, params) = build_having([("COUNT(*) > ?", vec![Value::Int64(5)])]);
        assert_eq!(sql, "HAVING COUNT(*) > ?");
        assert_eq!(params, [Value::Int64(5)]);

        let (sql, params) = build_having([
            ("SUM(\"x\") > ?", vec![Value::Int32(1)]),
            ("MAX(\"y\") < ?", vec![Value::Int32(9)]),
        ]);
        assert_eq!(sql, "HAVING SUM(\"x\") > ? AND MAX(\"y\") < ?");
        assert_eq!(params.len(), 2);

        let (sql, params) = build_having(Vec::<(&str, Vec<Value>)>::new());
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn lists() {
        assert_eq!(
            build_order_by(&[r#""name" ASC"#, r#""id" DESC"#]),
            r#"ORDER BY "name" ASC, "id" DESC"#
        );
        assert_eq!(build_order_by::<&str>(&[]), "");
        assert_eq!(
            build_group_by(&["\"country\"".to_string()]),
            r#"GROUP BY "country""#
        );
        assert_eq!(build_group_by::<String>(&[]), "");
    }

    #[test]
    fn join_keywords() {
        assert_eq!("JOIN".parse::<JoinType>().unwrap(), JoinType::Inner);
        assert_eq!("left outer join".parse::<JoinType>().unwrap(), JoinType::Left);
        assert_eq!("LEFT  JOIN".parse::<JoinType>().unwrap(), JoinType::Left);
        assert_eq!("Full Outer Join".parse::<JoinType>().unwrap(), JoinType::Full);
        assert_eq!("CROSS JOIN".parse::<JoinType>().unwrap(), JoinType::Cross);
        assert!("OUTER JOIN".parse::<JoinType>().is_err());
        assert!("LEFT".parse::<JoinType>().is_err());
        assert!(JoinType::Inner.needs_constraint());
        assert!(!JoinType::Cross.needs_constraint());
        assert!(!JoinType::Natural.needs_constraint());
    }
}
