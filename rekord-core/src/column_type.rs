use crate::Value;
use std::fmt::{self, Display};

/// Abstract column type, mapped to a native type string by every dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Boolean,
    Float,
    Blob,
    Uuid,
    Json,
    Array(Box<ColumnType>),
    DateTime,
    Timestamp,
    Date,
    Time,
    Decimal {
        precision: Option<u8>,
        scale: Option<u8>,
    },
    Varchar,
    Char,
    /// Native type written verbatim.
    Custom(String),
}

impl ColumnType {
    pub fn array(inner: ColumnType) -> Self {
        ColumnType::Array(Box::new(inner))
    }

    pub fn decimal(precision: u8, scale: u8) -> Self {
        ColumnType::Decimal {
            precision: Some(precision),
            scale: Some(scale),
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => f.write_str("INTEGER"),
            ColumnType::Text => f.write_str("TEXT"),
            ColumnType::Boolean => f.write_str("BOOLEAN"),
            ColumnType::Float => f.write_str("FLOAT"),
            ColumnType::Blob => f.write_str("BLOB"),
            ColumnType::Uuid => f.write_str("UUID"),
            ColumnType::Json => f.write_str("JSON"),
            ColumnType::Array(inner) => write!(f, "ARRAY<{inner}>"),
            ColumnType::DateTime => f.write_str("DATETIME"),
            ColumnType::Timestamp => f.write_str("TIMESTAMP"),
            ColumnType::Date => f.write_str("DATE"),
            ColumnType::Time => f.write_str("TIME"),
            ColumnType::Decimal { .. } => f.write_str("DECIMAL"),
            ColumnType::Varchar => f.write_str("VARCHAR"),
            ColumnType::Char => f.write_str("CHAR"),
            ColumnType::Custom(v) => f.write_str(v),
        }
    }
}

/// Value of a `DEFAULT` modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// Inlined as a literal after the storage adapter ran.
    Value(Value),
    /// Written verbatim, e.g. `CURRENT_TIMESTAMP`.
    Raw(String),
}

/// Column type plus modifiers.
///
/// Dialects render modifiers in a fixed order: `PRIMARY KEY`, autoincrement, `UNIQUE`,
/// `NOT NULL`, `DEFAULT`. Redundant combinations (`PRIMARY KEY UNIQUE`) are kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub column_type: ColumnType,
    pub length: Option<u32>,
    pub primary_key: bool,
    pub autoincrement: bool,
    pub unique: bool,
    pub not_null: bool,
    pub default: Option<ColumnDefault>,
}

impl ColumnDefinition {
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            length: None,
            primary_key: false,
            autoincrement: false,
            unique: false,
            not_null: false,
            default: None,
        }
    }
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
    pub fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(ColumnDefault::Value(value.into()));
        self
    }
    pub fn default_raw(mut self, sql: impl Into<String>) -> Self {
        self.default = Some(ColumnDefault::Raw(sql.into()));
        self
    }
}

impl From<ColumnType> for ColumnDefinition {
    fn from(value: ColumnType) -> Self {
        ColumnDefinition::new(value)
    }
}
