#[cfg(test)]
mod tests {
    use rekord::{
        Capabilities, ColumnDefinition, ColumnType, Dialect, DialectError, GenericDialect,
    };

    #[test]
    fn column_types() {
        let dialect = GenericDialect::new();
        let cases = [
            (ColumnType::Integer, None, "INTEGER"),
            (ColumnType::Boolean, None, "BOOLEAN"),
            (ColumnType::DateTime, None, "TIMESTAMP"),
            (ColumnType::decimal(10, 2), None, "DECIMAL(10, 2)"),
            (
                ColumnType::Decimal {
                    precision: Some(8),
                    scale: None,
                },
                None,
                "DECIMAL(8)",
            ),
            (
                ColumnType::Decimal {
                    precision: None,
                    scale: None,
                },
                None,
                "DECIMAL",
            ),
            (ColumnType::Varchar, Some(40), "VARCHAR(40)"),
            (ColumnType::Char, Some(2), "CHAR(2)"),
            (ColumnType::Custom("GEOMETRY(Point)".into()), None, "GEOMETRY(Point)"),
        ];
        for (column_type, length, expected) in cases {
            assert_eq!(
                dialect.format_column_type(&column_type, length).unwrap(),
                expected
            );
        }
        let error = dialect
            .format_column_type(&ColumnType::array(ColumnType::Integer), None)
            .expect_err("Arrays are off by default");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::UnsupportedType { .. })
        ));
        assert_eq!(
            GenericDialect::with_capabilities(Capabilities::all())
                .format_column_type(&ColumnType::array(ColumnType::array(ColumnType::Integer)), None)
                .unwrap(),
            "INTEGER[][]"
        );
        assert_eq!(
            ColumnType::array(ColumnType::Uuid).to_string(),
            "ARRAY<UUID>"
        );
        assert_eq!(ColumnType::decimal(4, 1).to_string(), "DECIMAL");
    }

    #[test]
    fn column_definitions() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect
                .format_column_definition(
                    &ColumnDefinition::new(ColumnType::Integer)
                        .primary_key()
                        .autoincrement()
                )
                .unwrap(),
            "INTEGER PRIMARY KEY AUTOINCREMENT"
        );
        assert_eq!(
            dialect
                .format_column_definition(
                    &ColumnDefinition::new(ColumnType::Varchar)
                        .length(120)
                        .unique()
                        .not_null()
                        .default_value("guest")
                )
                .unwrap(),
            "VARCHAR(120) UNIQUE NOT NULL DEFAULT 'guest'"
        );
        assert_eq!(
            dialect
                .format_column_definition(
                    &ColumnDefinition::new(ColumnType::Timestamp).default_raw("CURRENT_TIMESTAMP")
                )
                .unwrap(),
            "TIMESTAMP DEFAULT CURRENT_TIMESTAMP"
        );
        assert_eq!(
            dialect
                .format_column_definition(
                    &ColumnDefinition::new(ColumnType::Integer).default_value(Option::<i32>::None)
                )
                .unwrap(),
            "INTEGER DEFAULT NULL"
        );
        assert_eq!(
            dialect
                .format_column_definition(&ColumnDefinition::new(ColumnType::Boolean).default_value(false))
                .unwrap(),
            "BOOLEAN DEFAULT false"
        );
        assert_eq!(
            dialect
                .format_column_definition(
                    &ColumnDefinition::new(ColumnType::Text).default_value("it's")
                )
                .unwrap(),
            "TEXT DEFAULT 'it''s'"
        );
        assert_eq!(
            ColumnDefinition::from(ColumnType::Json),
            ColumnDefinition::new(ColumnType::Json)
        );
    }
}
