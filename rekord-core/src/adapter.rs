use crate::{ColumnType, DialectError, Result, Value};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::{fmt::Write, str::FromStr};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
    format_description::well_known::Rfc3339, macros::format_description,
};
use uuid::Uuid;

/// Closed set of value categories an adapter can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Null,
    Boolean,
    SignedInteger,
    UnsignedInteger,
    Float,
    Decimal,
    Text,
    Blob,
    Date,
    Time,
    Timestamp,
    TimestampWithTimezone,
    Uuid,
    Json,
    List,
}

impl Value {
    pub fn category(&self) -> ValueCategory {
        match self {
            Value::Null => ValueCategory::Null,
            Value::Boolean(..) => ValueCategory::Boolean,
            Value::Int8(..) | Value::Int16(..) | Value::Int32(..) | Value::Int64(..) => {
                ValueCategory::SignedInteger
            }
            Value::UInt8(..) | Value::UInt16(..) | Value::UInt32(..) | Value::UInt64(..) => {
                ValueCategory::UnsignedInteger
            }
            Value::Float32(..) | Value::Float64(..) => ValueCategory::Float,
            Value::Decimal(..) => ValueCategory::Decimal,
            Value::Varchar(..) => ValueCategory::Text,
            Value::Blob(..) => ValueCategory::Blob,
            Value::Date(..) => ValueCategory::Date,
            Value::Time(..) => ValueCategory::Time,
            Value::Timestamp(..) => ValueCategory::Timestamp,
            Value::TimestampWithTimezone(..) => ValueCategory::TimestampWithTimezone,
            Value::Uuid(..) => ValueCategory::Uuid,
            Value::Json(..) => ValueCategory::Json,
            Value::List(..) => ValueCategory::List,
        }
    }
}

/// Conversion applied to a value before it is bound as a parameter.
///
/// Dialects pick one adapter per [`ValueCategory`], anything not listed by the dialect
/// goes through [`Adapter::Identity`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    #[default]
    Identity,
    /// `true` -> `1`, `false` -> `0`.
    BooleanAsInteger,
    /// Widen unsigned integers into the next signed width, `u64` must fit `i64`.
    UnsignedAsSigned,
    DecimalAsText,
    /// ISO 8601 text for dates, times and timestamps.
    TemporalAsText,
    /// Timestamps with time zone normalized to UTC and stored without offset.
    TimestampAsUtc,
    UuidAsText,
    JsonAsText,
    /// Lists serialized as JSON array text.
    ListAsJson,
}

impl Adapter {
    pub fn to_storage(&self, value: Value) -> Result<Value> {
        Ok(match (self, value) {
            (_, Value::Null) => Value::Null,
            (Adapter::BooleanAsInteger, Value::Boolean(v)) => Value::Int64(v as i64),
            (Adapter::UnsignedAsSigned, value) => match value {
                Value::UInt8(v) => Value::Int16(v as i16),
                Value::UInt16(v) => Value::Int32(v as i32),
                Value::UInt32(v) => Value::Int64(v as i64),
                Value::UInt64(v) => Value::Int64(i64::try_from(v).map_err(|_| {
                    DialectError::type_conversion(
                        Value::UInt64(v),
                        "i64",
                        Some("out of range for a signed column".into()),
                    )
                })?),
                v => v,
            },
            (Adapter::DecimalAsText, Value::Decimal(v)) => Value::Varchar(v.to_string()),
            (Adapter::TemporalAsText, v @ Value::Date(..))
            | (Adapter::TemporalAsText, v @ Value::Time(..))
            | (Adapter::TemporalAsText, v @ Value::Timestamp(..))
            | (Adapter::TemporalAsText, v @ Value::TimestampWithTimezone(..)) => {
                Value::Varchar(temporal_text(&v)?)
            }
            (Adapter::TimestampAsUtc, Value::TimestampWithTimezone(v)) => {
                let v = v.to_offset(UtcOffset::UTC);
                Value::Timestamp(PrimitiveDateTime::new(v.date(), v.time()))
            }
            (Adapter::UuidAsText, Value::Uuid(v)) => Value::Varchar(v.hyphenated().to_string()),
            (Adapter::JsonAsText, Value::Json(v)) => Value::Varchar(v.to_string()),
            (Adapter::ListAsJson, v @ Value::List(..)) => {
                Value::Varchar(value_to_json(v)?.to_string())
            }
            (_, v) => v,
        })
    }
}

/// Convert a storage value back to the representation of `column_type`.
pub fn restore_value(value: Value, column_type: &ColumnType) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }
    let fail = |value: &Value, reason: Option<String>| -> crate::Error {
        DialectError::type_conversion(value, column_type.to_string(), reason).into()
    };
    Ok(match column_type {
        ColumnType::Boolean => match value {
            Value::Boolean(..) => value,
            Value::Varchar(ref v) => match v.to_ascii_lowercase().as_str() {
                "1" | "t" | "true" => Value::Boolean(true),
                "0" | "f" | "false" => Value::Boolean(false),
                _ => return Err(fail(&value, None)),
            },
            v => match v.as_i128() {
                Some(0) => Value::Boolean(false),
                Some(1) => Value::Boolean(true),
                _ => return Err(fail(&v, None)),
            },
        },
        ColumnType::Integer => match value {
            v if v.as_i128().is_some() => v,
            Value::Boolean(v) => Value::Int64(v as i64),
            Value::Varchar(ref v) => Value::Int64(
                v.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| fail(&value, Some(e.to_string())))?,
            ),
            v => return Err(fail(&v, None)),
        },
        ColumnType::Float => match value {
            Value::Float32(..) | Value::Float64(..) => value,
            Value::Decimal(v) => Value::Float64(
                rust_decimal::prelude::ToPrimitive::to_f64(&v)
                    .ok_or_else(|| fail(&Value::Decimal(v), None))?,
            ),
            Value::Varchar(ref v) => Value::Float64(
                v.trim()
                    .parse()
                    .map_err(|e: std::num::ParseFloatError| fail(&value, Some(e.to_string())))?,
            ),
            v => Value::Float64(v.as_f64().ok_or_else(|| fail(&v, None))?),
        },
        ColumnType::Decimal { .. } => match value {
            Value::Decimal(..) => value,
            Value::Varchar(ref v) => Value::Decimal(
                Decimal::from_str(v.trim()).map_err(|e| fail(&value, Some(e.to_string())))?,
            ),
            Value::Float32(v) => Value::Decimal(
                Decimal::from_f32(v).ok_or_else(|| fail(&Value::Float32(v), None))?,
            ),
            Value::Float64(v) => Value::Decimal(
                Decimal::from_f64(v).ok_or_else(|| fail(&Value::Float64(v), None))?,
            ),
            v => match v.as_i128().and_then(Decimal::from_i128) {
                Some(d) => Value::Decimal(d),
                None => return Err(fail(&v, None)),
            },
        },
        ColumnType::Text | ColumnType::Varchar | ColumnType::Char => match value {
            Value::Varchar(..) => value,
            Value::Uuid(v) => Value::Varchar(v.hyphenated().to_string()),
            Value::Json(serde_json::Value::String(v)) => Value::Varchar(v),
            Value::Blob(ref v) => Value::Varchar(
                String::from_utf8(v.to_vec()).map_err(|e| fail(&value, Some(e.to_string())))?,
            ),
            v => return Err(fail(&v, None)),
        },
        ColumnType::Blob => match value {
            Value::Blob(..) => value,
            Value::Varchar(v) => Value::Blob(v.into_bytes().into_boxed_slice()),
            v => return Err(fail(&v, None)),
        },
        ColumnType::Uuid => match value {
            Value::Uuid(..) => value,
            Value::Varchar(ref v) => {
                Value::Uuid(Uuid::parse_str(v.trim()).map_err(|e| fail(&value, Some(e.to_string())))?)
            }
            Value::Blob(ref v) => {
                Value::Uuid(Uuid::from_slice(v).map_err(|e| fail(&value, Some(e.to_string())))?)
            }
            v => return Err(fail(&v, None)),
        },
        ColumnType::Json => match value {
            Value::Json(..) => value,
            Value::Varchar(ref v) => Value::Json(
                serde_json::from_str(v).map_err(|e| fail(&value, Some(e.to_string())))?,
            ),
            v => Value::Json(value_to_json(v)?),
        },
        ColumnType::Array(inner) => {
            let items = match value {
                Value::List(v) => v,
                Value::Varchar(ref v) => match serde_json::from_str(v) {
                    Ok(serde_json::Value::Array(v)) => v.into_iter().map(json_to_value).collect(),
                    Ok(..) => return Err(fail(&value, Some("expected a JSON array".into()))),
                    Err(e) => return Err(fail(&value, Some(e.to_string()))),
                },
                Value::Json(serde_json::Value::Array(v)) => {
                    v.into_iter().map(json_to_value).collect()
                }
                v => return Err(fail(&v, None)),
            };
            Value::List(
                items
                    .into_iter()
                    .map(|v| restore_value(v, inner))
                    .collect::<Result<_>>()?,
            )
        }
        ColumnType::DateTime | ColumnType::Timestamp => match value {
            Value::Timestamp(..) => value,
            Value::TimestampWithTimezone(v) => {
                let v = v.to_offset(UtcOffset::UTC);
                Value::Timestamp(PrimitiveDateTime::new(v.date(), v.time()))
            }
            Value::Date(v) => Value::Timestamp(PrimitiveDateTime::new(v, Time::MIDNIGHT)),
            Value::Varchar(ref v) => parse_timestamp(v).ok_or_else(|| fail(&value, None))?,
            v => match v.as_i128().and_then(|v| i64::try_from(v).ok()) {
                Some(seconds) => {
                    let v = OffsetDateTime::from_unix_timestamp(seconds)
                        .map_err(|e| fail(&v, Some(e.to_string())))?;
                    Value::Timestamp(PrimitiveDateTime::new(v.date(), v.time()))
                }
                None => return Err(fail(&v, None)),
            },
        },
        ColumnType::Date => match value {
            Value::Date(..) => value,
            Value::Timestamp(v) => Value::Date(v.date()),
            Value::Varchar(ref v) => Value::Date(
                Date::parse(v.trim(), format_description!("[year]-[month]-[day]"))
                    .map_err(|e| fail(&value, Some(e.to_string())))?,
            ),
            v => return Err(fail(&v, None)),
        },
        ColumnType::Time => match value {
            Value::Time(..) => value,
            Value::Timestamp(v) => Value::Time(v.time()),
            Value::Varchar(ref v) => Value::Time(parse_time(v).ok_or_else(|| fail(&value, None))?),
            v => return Err(fail(&v, None)),
        },
        ColumnType::Custom(..) => value,
    })
}

fn parse_time(value: &str) -> Option<Time> {
    let value = value.trim();
    Time::parse(
        value,
        format_description!("[hour]:[minute]:[second].[subsecond]"),
    )
    .or(Time::parse(
        value,
        format_description!("[hour]:[minute]:[second]"),
    ))
    .ok()
}

fn parse_timestamp(value: &str) -> Option<Value> {
    let value = value.trim();
    if let Ok(v) = OffsetDateTime::parse(value, &Rfc3339) {
        let v = v.to_offset(UtcOffset::UTC);
        return Some(Value::Timestamp(PrimitiveDateTime::new(v.date(), v.time())));
    }
    let value = value.replacen('T', " ", 1);
    PrimitiveDateTime::parse(
        &value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    )
    .or(PrimitiveDateTime::parse(
        &value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ))
    .ok()
    .map(Value::Timestamp)
}

fn write_date(out: &mut String, value: &Date) {
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        value.year(),
        value.month() as u8,
        value.day()
    );
}

fn write_time(out: &mut String, value: &Time) {
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    );
    let mut subsecond = value.nanosecond();
    if subsecond != 0 {
        let mut width = 9;
        while subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(out, ".{:0width$}", subsecond);
    }
}

/// ISO 8601 text of a temporal value, timestamps with time zone keep their offset.
pub fn temporal_text(value: &Value) -> Result<String> {
    let mut out = String::with_capacity(32);
    match value {
        Value::Date(v) => write_date(&mut out, v),
        Value::Time(v) => write_time(&mut out, v),
        Value::Timestamp(v) => {
            write_date(&mut out, &v.date());
            out.push(' ');
            write_time(&mut out, &v.time());
        }
        Value::TimestampWithTimezone(v) => {
            out = v.format(&Rfc3339).map_err(|e| {
                DialectError::type_conversion(value, "ISO 8601 text", Some(e.to_string()))
            })?;
        }
        v => {
            return Err(DialectError::type_conversion(v, "ISO 8601 text", None).into());
        }
    }
    Ok(out)
}

/// JSON representation of a value, used by list adapters.
pub fn value_to_json(value: Value) -> Result<serde_json::Value> {
    use serde_json::Value as Json;
    Ok(match value {
        Value::Null => Json::Null,
        Value::Boolean(v) => Json::Bool(v),
        Value::Int8(v) => v.into(),
        Value::Int16(v) => v.into(),
        Value::Int32(v) => v.into(),
        Value::Int64(v) => v.into(),
        Value::UInt8(v) => v.into(),
        Value::UInt16(v) => v.into(),
        Value::UInt32(v) => v.into(),
        Value::UInt64(v) => v.into(),
        Value::Float32(v) => serde_json::Number::from_f64(v as f64)
            .map(Json::Number)
            .ok_or_else(|| DialectError::type_conversion(v, "JSON", Some("not finite".into())))?,
        Value::Float64(v) => serde_json::Number::from_f64(v)
            .map(Json::Number)
            .ok_or_else(|| DialectError::type_conversion(v, "JSON", Some("not finite".into())))?,
        Value::Decimal(v) => Json::String(v.to_string()),
        Value::Varchar(v) => Json::String(v),
        Value::Blob(v) => Json::String(hex::encode(v)),
        v @ (Value::Date(..)
        | Value::Time(..)
        | Value::Timestamp(..)
        | Value::TimestampWithTimezone(..)) => Json::String(temporal_text(&v)?),
        Value::Uuid(v) => Json::String(v.hyphenated().to_string()),
        Value::Json(v) => v,
        Value::List(v) => Json::Array(v.into_iter().map(value_to_json).collect::<Result<_>>()?),
    })
}

pub fn json_to_value(value: serde_json::Value) -> Value {
    use serde_json::Value as Json;
    match value {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Boolean(v),
        Json::Number(v) => {
            if let Some(v) = v.as_i64() {
                Value::Int64(v)
            } else if let Some(v) = v.as_u64() {
                Value::UInt64(v)
            } else {
                Value::Float64(v.as_f64().unwrap_or_default())
            }
        }
        Json::String(v) => Value::Varchar(v),
        Json::Array(v) => Value::List(v.into_iter().map(json_to_value).collect()),
        v @ Json::Object(..) => Value::Json(v),
    }
}
