use rekord::{Adapter, ColumnType, Dialect, DialectError, Value, ValueCategory};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};
use uuid::Uuid;

fn round_trip(dialect: &dyn Dialect, value: Value, column_type: &ColumnType) -> Value {
    let stored = dialect.to_storage(value.clone()).unwrap_or_else(|e| {
        panic!(
            "{}: could not store {:?} as {}: {:#}",
            dialect.name(),
            value,
            column_type,
            e
        )
    });
    dialect
        .from_storage(stored.clone(), column_type)
        .unwrap_or_else(|e| {
            panic!(
                "{}: could not restore {:?} as {}: {:#}",
                dialect.name(),
                stored,
                column_type,
                e
            )
        })
}

/// Values bound by the application come back equal through the dialect's storage form.
pub async fn adapters<D: Dialect>(dialect: &D) {
    let dialect = dialect.as_dyn();
    let date = Date::from_calendar_date(2024, Month::February, 29).expect("Valid date");
    let time = Time::from_hms_milli(12, 30, 15, 500).expect("Valid time");
    let timestamp = PrimitiveDateTime::new(date, time);
    let uuid = Uuid::from_str("5b8d2c1e-7f3a-4e2b-9c6d-1a0f8e4b3c2d").expect("Valid uuid");
    let decimal = Decimal::from_str("12.50").expect("Valid decimal");
    let json = serde_json::json!({"name": "Ann", "tags": ["a", "b"]});

    let cases = [
        (Value::Boolean(true), ColumnType::Boolean, Value::Boolean(true)),
        (Value::Boolean(false), ColumnType::Boolean, Value::Boolean(false)),
        (Value::from("hello"), ColumnType::Text, Value::from("hello")),
        (Value::Float64(2.25), ColumnType::Float, Value::Float64(2.25)),
        (
            Value::Decimal(decimal),
            ColumnType::decimal(10, 2),
            Value::Decimal(decimal),
        ),
        (Value::Date(date), ColumnType::Date, Value::Date(date)),
        (Value::Time(time), ColumnType::Time, Value::Time(time)),
        (
            Value::Timestamp(timestamp),
            ColumnType::DateTime,
            Value::Timestamp(timestamp),
        ),
        (
            Value::TimestampWithTimezone(
                timestamp.assume_offset(UtcOffset::from_hms(2, 0, 0).expect("Valid offset")),
            ),
            ColumnType::Timestamp,
            Value::Timestamp(PrimitiveDateTime::new(
                date,
                Time::from_hms_milli(10, 30, 15, 500).expect("Valid time"),
            )),
        ),
        (Value::Uuid(uuid), ColumnType::Uuid, Value::Uuid(uuid)),
        (Value::Json(json.clone()), ColumnType::Json, Value::Json(json)),
    ];
    for (value, column_type, expected) in cases {
        let restored = round_trip(dialect, value.clone(), &column_type);
        assert_eq!(
            restored,
            expected,
            "{}: {:?} as {}",
            dialect.name(),
            value,
            column_type
        );
    }

    // Integer widths may change through storage, the number does not
    for value in [Value::Int8(-3), Value::UInt32(7), Value::Int64(i64::MIN)] {
        let restored = round_trip(dialect, value.clone(), &ColumnType::Integer);
        assert_eq!(restored.as_i128(), value.as_i128(), "{}", dialect.name());
    }
    let list = Value::List(vec![Value::Int32(1), Value::Int32(2), Value::Int32(3)]);
    match round_trip(dialect, list, &ColumnType::array(ColumnType::Integer)) {
        Value::List(items) => assert_eq!(
            items.iter().map(Value::as_i128).collect::<Vec<_>>(),
            [Some(1), Some(2), Some(3)]
        ),
        v => panic!("{}: expected a list, got {:?}", dialect.name(), v),
    }

    // Null is never adapted
    for column_type in [
        ColumnType::Boolean,
        ColumnType::Integer,
        ColumnType::Uuid,
        ColumnType::Json,
        ColumnType::Timestamp,
    ] {
        assert_eq!(round_trip(dialect, Value::Null, &column_type), Value::Null);
    }

    // Parameters keep their positions
    let params = dialect
        .params_to_storage(vec![Value::Null, Value::Boolean(true), Value::from("x")])
        .expect("Parameters must convert");
    assert_eq!(params.len(), 3);
    assert_eq!(params[0], Value::Null);
    assert_eq!(params[2], Value::from("x"));

    let unsigned = dialect.to_storage(Value::UInt64(u64::MAX));
    if dialect.value_adapter(ValueCategory::UnsignedInteger) == Adapter::UnsignedAsSigned {
        let error = unsigned.expect_err("u64::MAX does not fit a signed column");
        assert!(
            matches!(
                DialectError::of(&error),
                Some(DialectError::TypeConversion { .. })
            ),
            "{:#}",
            error
        );
    } else {
        assert_eq!(
            unsigned.expect("Unsigned values are kept as they are"),
            Value::UInt64(u64::MAX)
        );
    }

    let error = dialect
        .from_storage(Value::from("not a uuid"), &ColumnType::Uuid)
        .expect_err("Malformed uuid text must not restore");
    assert!(
        matches!(
            DialectError::of(&error),
            Some(DialectError::TypeConversion { .. })
        ),
        "{:#}",
        error
    );
}
