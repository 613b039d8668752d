use rekord_core::{
    Adapter, Capabilities, ColumnType, Context, CteCapabilities, Dialect, Fragment,
    JoinCapabilities, JsonCapabilities, ReturningCapabilities, ServerVersion,
    SetOperationCapabilities, TransactionCapabilities, TruncateCapabilities, UpsertCapabilities,
    UpsertStyle, Result, Value, ValueCategory, WindowCapabilities,
};

/// Sqlite stores booleans as integers and temporal, decimal, uuid and json values as text.
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    version: ServerVersion,
    capabilities: Capabilities,
}

impl SqliteDialect {
    /// Version assumed when the configuration does not name one.
    pub const DEFAULT_VERSION: ServerVersion = ServerVersion::new(3, 45, 0);

    pub fn new() -> Self {
        Self::with_version(Self::DEFAULT_VERSION)
    }

    pub fn with_version(version: ServerVersion) -> Self {
        Self {
            version,
            capabilities: Self::capabilities_for(version),
        }
    }

    pub fn capabilities_for(version: ServerVersion) -> Capabilities {
        let v = |minor, patch| version.at_least(3, minor, patch);
        Capabilities {
            cte: CteCapabilities {
                basic: v(8, 3),
                recursive: v(8, 3),
                materialized: v(35, 0),
                in_dml: false,
            },
            join: JoinCapabilities {
                inner: true,
                left: true,
                right: v(39, 0),
                full: v(39, 0),
                cross: true,
                natural: true,
            },
            json: JsonCapabilities {
                json_type: false,
                arrow_operators: v(38, 0),
                json_table: false,
            },
            window: WindowCapabilities {
                window_functions: v(25, 0),
                filter_clause: v(30, 0),
            },
            set_operation: SetOperationCapabilities {
                union: true,
                intersect: true,
                except: true,
            },
            returning: ReturningCapabilities {
                returning: v(35, 0),
            },
            upsert: UpsertCapabilities {
                style: if v(24, 0) {
                    UpsertStyle::OnConflict
                } else {
                    UpsertStyle::None
                },
            },
            truncate: TruncateCapabilities {
                statement: false,
                restart_identity: false,
                cascade: false,
            },
            transaction: TransactionCapabilities { savepoint: true },
            ..Default::default()
        }
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn server_version(&self) -> Option<ServerVersion> {
        Some(self.version)
    }

    fn write_column_type(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &ColumnType,
        _length: Option<u32>,
    ) -> Result<()> {
        match value {
            ColumnType::Integer | ColumnType::Boolean => out.push_str("INTEGER"),
            ColumnType::Float => out.push_str("REAL"),
            ColumnType::Blob => out.push_str("BLOB"),
            ColumnType::Text
            | ColumnType::Varchar
            | ColumnType::Char
            | ColumnType::Uuid
            | ColumnType::Json
            | ColumnType::Decimal { .. }
            | ColumnType::DateTime
            | ColumnType::Timestamp
            | ColumnType::Date
            | ColumnType::Time => out.push_str("TEXT"),
            ColumnType::Array(..) => return Err(self.unsupported_type(value)),
            ColumnType::Custom(v) => out.push_str(v),
        };
        Ok(())
    }

    /// OFFSET without LIMIT is written as `LIMIT -1 OFFSET ?`.
    fn write_limit_offset(
        &self,
        context: &mut Context,
        out: &mut String,
        limit: Option<&Value>,
        offset: Option<&Value>,
    ) {
        let mut context = context.switch_fragment(Fragment::SelectLimit);
        match limit {
            Some(limit) => {
                out.push_str("LIMIT ");
                self.write_parameter(&mut context, out, limit.clone());
            }
            None if offset.is_some() => out.push_str("LIMIT -1"),
            None => {}
        }
        if let Some(offset) = offset {
            out.push_str(" OFFSET ");
            self.write_parameter(&mut context, out, offset.clone());
        }
    }

    fn value_adapter(&self, category: ValueCategory) -> Adapter {
        match category {
            ValueCategory::Boolean => Adapter::BooleanAsInteger,
            ValueCategory::UnsignedInteger => Adapter::UnsignedAsSigned,
            ValueCategory::Decimal => Adapter::DecimalAsText,
            ValueCategory::Date
            | ValueCategory::Time
            | ValueCategory::Timestamp
            | ValueCategory::TimestampWithTimezone => Adapter::TemporalAsText,
            ValueCategory::Uuid => Adapter::UuidAsText,
            ValueCategory::Json => Adapter::JsonAsText,
            ValueCategory::List => Adapter::ListAsJson,
            _ => Adapter::Identity,
        }
    }
}
