use crate::{DialectError, Result};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::any;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Dynamically typed value carried by parameter lists and result rows.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Varchar(String),
    Blob(Box<[u8]>),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    TimestampWithTimezone(OffsetDateTime),
    Uuid(Uuid),
    Json(serde_json::Value),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short variant name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(..) => "Boolean",
            Value::Int8(..) => "Int8",
            Value::Int16(..) => "Int16",
            Value::Int32(..) => "Int32",
            Value::Int64(..) => "Int64",
            Value::UInt8(..) => "UInt8",
            Value::UInt16(..) => "UInt16",
            Value::UInt32(..) => "UInt32",
            Value::UInt64(..) => "UInt64",
            Value::Float32(..) => "Float32",
            Value::Float64(..) => "Float64",
            Value::Decimal(..) => "Decimal",
            Value::Varchar(..) => "Varchar",
            Value::Blob(..) => "Blob",
            Value::Date(..) => "Date",
            Value::Time(..) => "Time",
            Value::Timestamp(..) => "Timestamp",
            Value::TimestampWithTimezone(..) => "TimestampWithTimezone",
            Value::Uuid(..) => "Uuid",
            Value::Json(..) => "Json",
            Value::List(..) => "List",
        }
    }

    /// Integer payload widened to `i128`, if the value is an integer.
    pub fn as_i128(&self) -> Option<i128> {
        Some(match self {
            Value::Int8(v) => *v as i128,
            Value::Int16(v) => *v as i128,
            Value::Int32(v) => *v as i128,
            Value::Int64(v) => *v as i128,
            Value::UInt8(v) => *v as i128,
            Value::UInt16(v) => *v as i128,
            Value::UInt32(v) => *v as i128,
            Value::UInt64(v) => *v as i128,
            _ => return None,
        })
    }

    /// Floating point payload, integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            v => v.as_i128().map(|v| v as f64),
        }
    }
}

/// Conversion between native Rust types and [`Value`].
///
/// `as_value` wraps the native value in its canonical variant. `try_from_value`
/// accepts the canonical variant and, for numbers, any other width that fits
/// after a range check.
///
/// ```rust
/// use rekord_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert_eq!(v, Value::Int32(42));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    fn as_value(self) -> Value;
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(value.into())
    }
}

fn mismatch<T>(value: Value) -> crate::Error {
    DialectError::type_conversion(value, any::type_name::<T>(), None).into()
}

macro_rules! impl_as_value_integer {
    ($source:ty, $variant:path) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                $variant(self)
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value.as_i128() {
                    Some(v) => <$source>::try_from(v).map_err(|_| {
                        DialectError::type_conversion(
                            &value,
                            stringify!($source),
                            Some("out of range".into()),
                        )
                        .into()
                    }),
                    None => match value {
                        Value::Boolean(v) => Ok(v as $source),
                        v => Err(mismatch::<Self>(v)),
                    },
                }
            }
        }
    };
}
impl_as_value_integer!(i8, Value::Int8);
impl_as_value_integer!(i16, Value::Int16);
impl_as_value_integer!(i32, Value::Int32);
impl_as_value_integer!(i64, Value::Int64);
impl_as_value_integer!(u8, Value::UInt8);
impl_as_value_integer!(u16, Value::UInt16);
impl_as_value_integer!(u32, Value::UInt32);
impl_as_value_integer!(u64, Value::UInt64);

impl AsValue for bool {
    fn as_value(self) -> Value {
        Value::Boolean(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(v) => Ok(v),
            v => match v.as_i128() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(mismatch::<Self>(v)),
            },
        }
    }
}

impl AsValue for f32 {
    fn as_value(self) -> Value {
        Value::Float32(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float32(v) => Ok(v),
            v => v.as_f64().map(|v| v as f32).ok_or_else(|| mismatch::<Self>(v)),
        }
    }
}

impl AsValue for f64 {
    fn as_value(self) -> Value {
        Value::Float64(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl AsValue for Decimal {
    fn as_value(self) -> Value {
        Value::Decimal(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(v) => Ok(v),
            Value::Float32(v) => {
                Decimal::from_f32(v).ok_or_else(|| mismatch::<Self>(Value::Float32(v)))
            }
            Value::Float64(v) => {
                Decimal::from_f64(v).ok_or_else(|| mismatch::<Self>(Value::Float64(v)))
            }
            v => match v.as_i128() {
                Some(i) => Decimal::from_i128(i).ok_or_else(|| mismatch::<Self>(v)),
                None => Err(mismatch::<Self>(v)),
            },
        }
    }
}

macro_rules! impl_as_value {
    ($source:ty, $variant:path) => {
        impl AsValue for $source {
            fn as_value(self) -> Value {
                $variant(self)
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $variant(v) => Ok(v),
                    v => Err(mismatch::<Self>(v)),
                }
            }
        }
    };
}
impl_as_value!(String, Value::Varchar);
impl_as_value!(Box<[u8]>, Value::Blob);
impl_as_value!(Date, Value::Date);
impl_as_value!(Time, Value::Time);
impl_as_value!(PrimitiveDateTime, Value::Timestamp);
impl_as_value!(OffsetDateTime, Value::TimestampWithTimezone);
impl_as_value!(Uuid, Value::Uuid);
impl_as_value!(serde_json::Value, Value::Json);

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            v => T::try_from_value(v).map(Some),
        }
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(self) -> Value {
        Value::List(self.into_iter().map(AsValue::as_value).collect())
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(v) => v.into_iter().map(T::try_from_value).collect(),
            v => Err(mismatch::<Self>(v)),
        }
    }
}
