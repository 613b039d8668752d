use rekord_core::{
    ATOMIC_PRECEDENCE, Adapter, BoxedExpression, Capabilities, ColumnType, ConflictAction, Context,
    CteCapabilities, Dialect, DialectError, Expression, Fragment, Grouping, GroupingCapabilities,
    JoinCapabilities, JsonCapabilities, JsonPath, LateralCapabilities, OnConflict, Result,
    ServerVersion, SetOperationCapabilities, TransactionCapabilities, TruncateCapabilities,
    UpsertCapabilities, UpsertStyle, Value, ValueCategory, WindowCapabilities, separated_by,
};

/// JSON path selecting the single member `key`, `$."a.b"`.
fn quoted_key_path(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 5);
    out.push_str("$.\"");
    for c in key.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[derive(Debug, Clone)]
pub struct MySqlDialect {
    version: ServerVersion,
    capabilities: Capabilities,
}

impl MySqlDialect {
    /// Version assumed when the configuration does not name one.
    pub const DEFAULT_VERSION: ServerVersion = ServerVersion::new(8, 0, 36);

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
        let v = |major, minor, patch| version.at_least(major, minor, patch);
        Capabilities {
            cte: CteCapabilities {
                basic: v(8, 0, 0),
                recursive: v(8, 0, 0),
                materialized: false,
                in_dml: false,
            },
            join: JoinCapabilities {
                inner: true,
                left: true,
                right: true,
                full: false,
                cross: true,
                natural: true,
            },
            lateral: LateralCapabilities {
                lateral: v(8, 0, 14),
            },
            json: JsonCapabilities {
                json_type: v(5, 7, 8),
                arrow_operators: v(5, 7, 8),
                json_table: v(8, 0, 4),
            },
            grouping: GroupingCapabilities {
                rollup: true,
                cube: false,
                grouping_sets: false,
            },
            window: WindowCapabilities {
                window_functions: v(8, 0, 0),
                filter_clause: false,
            },
            set_operation: SetOperationCapabilities {
                union: true,
                intersect: v(8, 0, 31),
                except: v(8, 0, 31),
            },
            upsert: UpsertCapabilities {
                style: UpsertStyle::OnDuplicateKey,
            },
            truncate: TruncateCapabilities {
                statement: true,
                restart_identity: false,
                cascade: false,
            },
            transaction: TransactionCapabilities { savepoint: true },
            ..Default::default()
        }
    }
}

impl Default for MySqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
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

    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('`');
        self.write_escaped(context, out, value, '`', "``");
        out.push('`');
    }

    /// Backslash is an escape character inside MySQL string literals.
    fn write_value_string(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('\'');
        let mut escaped = String::with_capacity(value.len());
        self.write_escaped(context, &mut escaped, value, '\\', "\\\\");
        self.write_escaped(context, out, &escaped, '\'', "''");
        out.push('\'');
    }

    /// Extraction is a function call.
    fn json_path_precedence(&self) -> i32 {
        ATOMIC_PRECEDENCE
    }

    /// `JSON_EXTRACT(target, ?)`, wrapped in `JSON_UNQUOTE` for text.
    fn write_json_path(&self, context: &mut Context, out: &mut String, value: &JsonPath) -> Result<()> {
        self.require(self.supports_json_arrows(), "JSON path extraction")?;
        let mut context = context.switch_fragment(Fragment::Operand);
        if value.as_text {
            out.push_str("JSON_UNQUOTE(");
        }
        out.push_str("JSON_EXTRACT(");
        value.target.write_query(self.as_dyn(), &mut context, out)?;
        out.push_str(", ");
        let path = if value.path.starts_with('$') {
            value.path.clone()
        } else {
            quoted_key_path(&value.path)
        };
        self.write_parameter(&mut context, out, Value::Varchar(path));
        out.push(')');
        if value.as_text {
            out.push(')');
        }
        Ok(())
    }

    /// Only `ROLLUP`, written as `a, b WITH ROLLUP`.
    fn write_grouping(&self, context: &mut Context, out: &mut String, value: &Grouping) -> Result<()> {
        match value {
            Grouping::Rollup(items) => {
                self.require(self.supports_rollup(), "ROLLUP")?;
                if items.is_empty() {
                    return Err(DialectError::invalid_expression(
                        "ROLLUP requires at least one expression",
                    )
                    .into());
                }
                let mut context = context.switch_fragment(Fragment::Operand);
                separated_by(
                    out,
                    items,
                    |out, v| v.write_query(self.as_dyn(), &mut context, out),
                    ", ",
                )?;
                out.push_str(" WITH ROLLUP");
                Ok(())
            }
            Grouping::Cube(..) => self.require(false, "CUBE"),
            Grouping::Sets(..) => self.require(false, "GROUPING SETS"),
        }
    }

    /// `WITH ROLLUP` closes the whole clause, so a rollup must be the only element.
    fn write_group_by(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &[BoxedExpression],
    ) -> Result<()> {
        if value.len() > 1 && value.iter().any(|v| v.is_grouping()) {
            return Err(DialectError::invalid_expression(
                "WITH ROLLUP must be the only GROUP BY element in mysql",
            )
            .into());
        }
        let mut context = context.switch_fragment(Fragment::SelectGroupBy);
        out.push_str("GROUP BY ");
        separated_by(
            out,
            value,
            |out, v| v.write_query(self.as_dyn(), &mut context, out),
            ", ",
        )
    }

    /// `ON DUPLICATE KEY UPDATE `c` = VALUES(`c`)`, the conflict target is implied by the keys.
    fn write_on_conflict(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &OnConflict,
    ) -> Result<()> {
        self.require(
            self.upsert_style() == UpsertStyle::OnDuplicateKey,
            "upsert (ON DUPLICATE KEY UPDATE)",
        )?;
        let ConflictAction::DoUpdate(columns) = &value.action else {
            return self.require(false, "ON CONFLICT DO NOTHING");
        };
        if columns.is_empty() {
            return Err(DialectError::invalid_expression(
                "ON DUPLICATE KEY UPDATE requires at least one column",
            )
            .into());
        }
        let mut context = context.switch_fragment(Fragment::InsertIntoOnConflict);
        out.push_str("ON DUPLICATE KEY UPDATE ");
        separated_by(
            out,
            columns,
            |out, v| {
                self.write_identifier_quoted(&mut context, out, v);
                out.push_str(" = VALUES(");
                self.write_identifier_quoted(&mut context, out, v);
                out.push(')');
                Ok(())
            },
            ", ",
        )
    }

    /// OFFSET without LIMIT uses the largest row count MySQL accepts.
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
            None if offset.is_some() => out.push_str("LIMIT 18446744073709551615"),
            None => {}
        }
        if let Some(offset) = offset {
            out.push_str(" OFFSET ");
            self.write_parameter(&mut context, out, offset.clone());
        }
    }

    fn write_column_type(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &ColumnType,
        length: Option<u32>,
    ) -> Result<()> {
        match value {
            ColumnType::Integer => out.push_str("INT"),
            ColumnType::Text => out.push_str("TEXT"),
            ColumnType::Boolean => out.push_str("TINYINT(1)"),
            ColumnType::Float => out.push_str("DOUBLE"),
            ColumnType::Blob => out.push_str("BLOB"),
            ColumnType::Uuid => out.push_str("CHAR(36)"),
            ColumnType::Json | ColumnType::Array(..) => {
                if !self.supports_json_type() {
                    return Err(self.unsupported_type(value));
                }
                out.push_str("JSON");
            }
            ColumnType::DateTime => out.push_str("DATETIME"),
            ColumnType::Timestamp => out.push_str("TIMESTAMP"),
            ColumnType::Date => out.push_str("DATE"),
            ColumnType::Time => out.push_str("TIME"),
            ColumnType::Decimal { precision, scale } => {
                out.push_str("DECIMAL");
                self.write_type_precision(out, precision.map(u32::from), *scale);
            }
            ColumnType::Varchar => {
                out.push_str("VARCHAR");
                self.write_type_precision(out, length.or(Some(255)), None);
            }
            ColumnType::Char => {
                out.push_str("CHAR");
                self.write_type_precision(out, length.or(Some(1)), None);
            }
            ColumnType::Custom(v) => out.push_str(v),
        };
        Ok(())
    }

    fn autoincrement_keyword(&self) -> Option<&'static str> {
        Some("AUTO_INCREMENT")
    }

    fn value_adapter(&self, category: ValueCategory) -> Adapter {
        match category {
            ValueCategory::Uuid => Adapter::UuidAsText,
            ValueCategory::List => Adapter::ListAsJson,
            ValueCategory::TimestampWithTimezone => Adapter::TimestampAsUtc,
            _ => Adapter::Identity,
        }
    }

    fn write_transaction_begin(&self, out: &mut String) {
        out.push_str("START TRANSACTION");
    }
}
