#[cfg(test)]
mod tests {
    use rekord_core::{
        Adapter, AsValue, ColumnType, DialectError, Value, ValueCategory, json_to_value,
        restore_value, temporal_text, value_to_json,
    };
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    fn is_conversion_error(error: &rekord_core::Error) -> bool {
        matches!(
            DialectError::of(error),
            Some(DialectError::TypeConversion { .. })
        )
    }

    #[test]
    fn native_values() {
        assert_eq!(7i8.as_value(), Value::Int8(7));
        assert_eq!(7u64.as_value(), Value::UInt64(7));
        assert_eq!(true.as_value(), Value::Boolean(true));
        assert_eq!(String::from("x").as_value(), Value::Varchar("x".into()));
        assert_eq!(Some(3i16).as_value(), Value::Int16(3));
        assert_eq!(Option::<i16>::None.as_value(), Value::Null);
        assert_eq!(
            vec![1u8, 2].as_value(),
            Value::List(vec![Value::UInt8(1), Value::UInt8(2)])
        );
        assert_eq!(Value::from("abc"), Value::Varchar("abc".into()));
        assert_eq!(Value::from(2.5f32), Value::Float32(2.5));

        // Numbers convert across widths when they fit
        assert_eq!(i64::try_from_value(Value::UInt8(200)).unwrap(), 200);
        assert_eq!(u8::try_from_value(Value::Int64(255)).unwrap(), 255);
        let error = u8::try_from_value(Value::Int64(256)).expect_err("256 does not fit u8");
        assert!(is_conversion_error(&error));
        let error = u32::try_from_value(Value::Int32(-1)).expect_err("Negative to unsigned");
        assert!(is_conversion_error(&error));
        assert_eq!(f64::try_from_value(Value::Int32(3)).unwrap(), 3.0);
        assert!(bool::try_from_value(Value::Int64(1)).unwrap());
        assert!(bool::try_from_value(Value::Int64(2)).is_err());
        assert_eq!(
            Decimal::try_from_value(Value::Int32(12)).unwrap(),
            Decimal::from(12)
        );
        assert_eq!(
            Option::<String>::try_from_value(Value::Null).unwrap(),
            None
        );
        assert_eq!(
            Vec::<i32>::try_from_value(Value::List(vec![Value::Int64(1), Value::Int8(2)])).unwrap(),
            [1, 2]
        );
        let error = String::try_from_value(Value::Int32(1)).expect_err("Not text");
        assert!(is_conversion_error(&error));
    }

    #[test]
    fn categories() {
        assert_eq!(Value::Null.category(), ValueCategory::Null);
        assert_eq!(Value::Int16(1).category(), ValueCategory::SignedInteger);
        assert_eq!(Value::UInt16(1).category(), ValueCategory::UnsignedInteger);
        assert_eq!(Value::Float32(1.0).category(), ValueCategory::Float);
        assert_eq!(
            Value::TimestampWithTimezone(datetime!(2024-01-01 00:00 UTC)).category(),
            ValueCategory::TimestampWithTimezone
        );
        assert_eq!(Value::List(vec![]).category(), ValueCategory::List);
        assert_eq!(Value::Varchar("".into()).kind(), "Varchar");
        assert_eq!(Value::UInt32(4).as_i128(), Some(4));
        assert_eq!(Value::Float64(1.5).as_i128(), None);
        assert_eq!(Value::Int8(-2).as_f64(), Some(-2.0));
        assert!(Value::Null.is_null());
    }

    #[test]
    fn adapters() {
        assert_eq!(
            Adapter::BooleanAsInteger.to_storage(Value::Boolean(true)).unwrap(),
            Value::Int64(1)
        );
        assert_eq!(
            Adapter::BooleanAsInteger.to_storage(Value::Int32(5)).unwrap(),
            Value::Int32(5)
        );
        assert_eq!(
            Adapter::UnsignedAsSigned.to_storage(Value::UInt8(255)).unwrap(),
            Value::Int16(255)
        );
        assert_eq!(
            Adapter::UnsignedAsSigned.to_storage(Value::UInt64(9)).unwrap(),
            Value::Int64(9)
        );
        let error = Adapter::UnsignedAsSigned
            .to_storage(Value::UInt64(u64::MAX))
            .expect_err("u64::MAX does not fit i64");
        assert!(is_conversion_error(&error));
        assert_eq!(
            Adapter::DecimalAsText
                .to_storage(Value::Decimal(Decimal::from_str("-0.125").unwrap()))
                .unwrap(),
            Value::from("-0.125")
        );
        assert_eq!(
            Adapter::TemporalAsText
                .to_storage(Value::Time(time!(08:05:03.25)))
                .unwrap(),
            Value::from("08:05:03.25")
        );
        assert_eq!(
            Adapter::TemporalAsText
                .to_storage(Value::TimestampWithTimezone(datetime!(2024-06-01 12:00 +01:00)))
                .unwrap(),
            Value::from("2024-06-01T12:00:00+01:00")
        );
        assert_eq!(
            Adapter::TimestampAsUtc
                .to_storage(Value::TimestampWithTimezone(datetime!(2024-06-01 00:30 +01:00)))
                .unwrap(),
            Value::Timestamp(datetime!(2024-05-31 23:30))
        );
        assert_eq!(
            Adapter::JsonAsText
                .to_storage(Value::Json(json!({"a": [1, null]})))
                .unwrap(),
            Value::from(r#"{"a":[1,null]}"#)
        );
        assert_eq!(
            Adapter::ListAsJson
                .to_storage(Value::List(vec![
                    Value::from("x"),
                    Value::Null,
                    Value::Date(date!(2024 - 01 - 02)),
                ]))
                .unwrap(),
            Value::from(r#"["x",null,"2024-01-02"]"#)
        );
        assert_eq!(
            Adapter::Identity.to_storage(Value::UInt64(u64::MAX)).unwrap(),
            Value::UInt64(u64::MAX)
        );
        for adapter in [
            Adapter::BooleanAsInteger,
            Adapter::UuidAsText,
            Adapter::ListAsJson,
            Adapter::TemporalAsText,
        ] {
            assert_eq!(adapter.to_storage(Value::Null).unwrap(), Value::Null);
        }
    }

    #[test]
    fn restore() {
        assert_eq!(
            restore_value(Value::from("t"), &ColumnType::Boolean).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            restore_value(Value::Int64(0), &ColumnType::Boolean).unwrap(),
            Value::Boolean(false)
        );
        assert!(restore_value(Value::Int64(3), &ColumnType::Boolean).is_err());
        assert_eq!(
            restore_value(Value::from(" 42 "), &ColumnType::Integer).unwrap(),
            Value::Int64(42)
        );
        assert_eq!(
            restore_value(Value::from("1.25"), &ColumnType::decimal(5, 2)).unwrap(),
            Value::Decimal(Decimal::from_str("1.25").unwrap())
        );
        assert_eq!(
            restore_value(Value::from("2024-02-29T10:00:00Z"), &ColumnType::Timestamp).unwrap(),
            Value::Timestamp(datetime!(2024-02-29 10:00))
        );
        assert_eq!(
            restore_value(Value::from("2024-02-29 10:00:00.5"), &ColumnType::DateTime).unwrap(),
            Value::Timestamp(datetime!(2024-02-29 10:00:00.5))
        );
        assert_eq!(
            restore_value(Value::Int64(86_400), &ColumnType::Timestamp).unwrap(),
            Value::Timestamp(datetime!(1970-01-02 00:00))
        );
        assert_eq!(
            restore_value(Value::from("23:59:59"), &ColumnType::Time).unwrap(),
            Value::Time(time!(23:59:59))
        );
        assert_eq!(
            restore_value(Value::Timestamp(datetime!(2024-03-01 08:00)), &ColumnType::Date)
                .unwrap(),
            Value::Date(date!(2024 - 03 - 01))
        );
        let uuid = Uuid::from_str("6f1e7d2c-3b4a-4c5d-9e8f-0a1b2c3d4e5f").unwrap();
        assert_eq!(
            restore_value(Value::Blob(uuid.as_bytes().to_vec().into()), &ColumnType::Uuid)
                .unwrap(),
            Value::Uuid(uuid)
        );
        assert_eq!(
            restore_value(Value::from(r#"{"k":true}"#), &ColumnType::Json).unwrap(),
            Value::Json(json!({"k": true}))
        );
        assert_eq!(
            restore_value(
                Value::from("[1,0]"),
                &ColumnType::array(ColumnType::Boolean)
            )
            .unwrap(),
            Value::List(vec![Value::Boolean(true), Value::Boolean(false)])
        );
        assert!(
            restore_value(
                Value::from("[1,2]"),
                &ColumnType::array(ColumnType::Boolean)
            )
            .is_err()
        );
        let error = restore_value(Value::from("{}"), &ColumnType::array(ColumnType::Integer))
            .expect_err("An object is not an array");
        assert!(is_conversion_error(&error));
        let error = restore_value(Value::from("yesterday"), &ColumnType::Date)
            .expect_err("Not a date");
        assert!(is_conversion_error(&error));
        assert_eq!(
            restore_value(Value::from("opaque"), &ColumnType::Custom("CITEXT".into())).unwrap(),
            Value::from("opaque")
        );
        assert_eq!(
            restore_value(Value::Null, &ColumnType::Integer).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn json_values() {
        let value = Value::List(vec![
            Value::Int32(1),
            Value::Float64(0.5),
            Value::Blob(vec![0xca, 0xfe].into()),
            Value::Json(json!({"nested": "yes"})),
        ]);
        assert_eq!(
            value_to_json(value).unwrap(),
            json!([1, 0.5, "cafe", {"nested": "yes"}])
        );
        let error = value_to_json(Value::Float64(f64::NAN)).expect_err("NaN is not JSON");
        assert!(is_conversion_error(&error));
        assert_eq!(
            json_to_value(json!([1, "a", null, {"b": 2}, u64::MAX])),
            Value::List(vec![
                Value::Int64(1),
                Value::from("a"),
                Value::Null,
                Value::Json(json!({"b": 2})),
                Value::UInt64(u64::MAX),
            ])
        );
        assert_eq!(
            temporal_text(&Value::Timestamp(datetime!(2024-12-31 23:59:59.000001))).unwrap(),
            "2024-12-31 23:59:59.000001"
        );
        assert!(temporal_text(&Value::Int32(1)).is_err());
    }
}
