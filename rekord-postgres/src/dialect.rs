use rekord_core::{
    Adapter, ArrayCapabilities, Capabilities, ColumnType, Context, CteCapabilities, Dialect,
    DialectError, Expression, Fragment, GroupingCapabilities, JoinCapabilities, JsonCapabilities,
    JsonPath, LateralCapabilities, MergeCapabilities, OpPrecedence, PlaceholderStyle, Result,
    ReturningCapabilities, ServerVersion, SetOperationCapabilities, TransactionCapabilities,
    Truncate, TruncateCapabilities, UpsertCapabilities, UpsertStyle, Value, ValueCategory,
    WildcardCapabilities, WindowCapabilities, possibly_parenthesized,
};

#[derive(Debug, Clone)]
pub struct PostgresDialect {
    version: ServerVersion,
    capabilities: Capabilities,
}

impl PostgresDialect {
    /// Version assumed when the configuration does not name one.
    pub const DEFAULT_VERSION: ServerVersion = ServerVersion::new(16, 0, 0);

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
        let v = |major, minor| version.at_least(major, minor, 0);
        Capabilities {
            cte: CteCapabilities {
                basic: v(8, 4),
                recursive: v(8, 4),
                materialized: v(12, 0),
                in_dml: v(9, 1),
            },
            join: JoinCapabilities {
                inner: true,
                left: true,
                right: true,
                full: true,
                cross: true,
                natural: true,
            },
            lateral: LateralCapabilities { lateral: v(9, 3) },
            json: JsonCapabilities {
                json_type: v(9, 2),
                arrow_operators: v(9, 3),
                json_table: v(17, 0),
            },
            array: ArrayCapabilities {
                array_type: true,
                operators: true,
            },
            grouping: GroupingCapabilities {
                rollup: v(9, 5),
                cube: v(9, 5),
                grouping_sets: v(9, 5),
            },
            window: WindowCapabilities {
                window_functions: v(8, 4),
                filter_clause: v(9, 4),
            },
            set_operation: SetOperationCapabilities {
                union: true,
                intersect: true,
                except: true,
            },
            returning: ReturningCapabilities { returning: true },
            upsert: UpsertCapabilities {
                style: if v(9, 5) {
                    UpsertStyle::OnConflict
                } else {
                    UpsertStyle::None
                },
            },
            wildcard: WildcardCapabilities { qualified: true },
            truncate: TruncateCapabilities {
                statement: true,
                restart_identity: v(8, 4),
                cascade: true,
            },
            merge: MergeCapabilities { merge: v(15, 0) },
            transaction: TransactionCapabilities { savepoint: true },
        }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

/// Postgres text array literal of the path segments, `{a,b,0}`.
fn text_array(segments: &[&str]) -> String {
    let mut out = String::from("{");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if segment.is_empty()
            || segment
                .chars()
                .any(|c| matches!(c, ',' | '{' | '}' | '"' | '\\' | ' '))
        {
            out.push('"');
            for c in segment.chars() {
                if matches!(c, '"' | '\\') {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('"');
        } else {
            out.push_str(segment);
        }
    }
    out.push('}');
    out
}

fn switch_enabled(value: &str) -> bool {
    !matches!(value.trim(), "false" | "0" | "off" | "no")
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
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

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered
    }

    fn write_value_blob(&self, _context: &mut Context, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        out.push_str(&hex::encode(value));
        out.push('\'');
    }

    /// `target #> $n::text[]` / `target #>> $n::text[]`, the path is bound as a text array literal.
    fn write_json_path(&self, context: &mut Context, out: &mut String, value: &JsonPath) -> Result<()> {
        self.require(self.supports_json_arrows(), "JSON path operators")?;
        let mut context = context.switch_fragment(Fragment::Operand);
        possibly_parenthesized!(
            out,
            value.target.precedence(self.as_dyn()) < self.json_path_precedence(),
            value.target.write_query(self.as_dyn(), &mut context, out)?
        );
        out.push_str(if value.as_text { " #>> " } else { " #> " });
        self.write_parameter(
            &mut context,
            out,
            Value::Varchar(text_array(&value.segments())),
        );
        out.push_str("::text[]");
        Ok(())
    }

    fn write_column_type(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &ColumnType,
        length: Option<u32>,
    ) -> Result<()> {
        match value {
            ColumnType::Integer => out.push_str("INTEGER"),
            ColumnType::Text => out.push_str("TEXT"),
            ColumnType::Boolean => out.push_str("BOOLEAN"),
            ColumnType::Float => out.push_str("DOUBLE PRECISION"),
            ColumnType::Blob => out.push_str("BYTEA"),
            ColumnType::Uuid => out.push_str("UUID"),
            ColumnType::Json => {
                if !self.supports_json_type() {
                    return Err(self.unsupported_type(value));
                }
                out.push_str(if self.version.at_least(9, 4, 0) {
                    "JSONB"
                } else {
                    "JSON"
                });
            }
            ColumnType::Array(inner) => {
                self.write_column_type(context, out, inner, None)?;
                out.push_str("[]");
            }
            ColumnType::DateTime => out.push_str("TIMESTAMP"),
            ColumnType::Timestamp => out.push_str("TIMESTAMP WITH TIME ZONE"),
            ColumnType::Date => out.push_str("DATE"),
            ColumnType::Time => out.push_str("TIME"),
            ColumnType::Decimal { precision, scale } => {
                out.push_str("NUMERIC");
                self.write_type_precision(out, precision.map(u32::from), *scale);
            }
            ColumnType::Varchar => match length {
                Some(..) => {
                    out.push_str("VARCHAR");
                    self.write_type_precision(out, length, None);
                }
                None => out.push_str("TEXT"),
            },
            ColumnType::Char => {
                out.push_str("CHAR");
                self.write_type_precision(out, length.or(Some(1)), None);
            }
            ColumnType::Custom(v) => out.push_str(v),
        };
        Ok(())
    }

    /// `SERIAL` family instead of an autoincrement keyword.
    fn write_autoincrement_column_type(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &ColumnType,
        length: Option<u32>,
    ) -> Result<()> {
        match value {
            ColumnType::Integer => out.push_str("SERIAL"),
            _ => self.write_column_type(context, out, value, length)?,
        }
        Ok(())
    }

    fn autoincrement_keyword(&self) -> Option<&'static str> {
        None
    }

    /// Understands `restrict` and `continue_identity`.
    fn write_truncate_options(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &Truncate,
    ) -> Result<()> {
        for (name, switch) in &value.options {
            match name.as_str() {
                "continue_identity" if switch_enabled(switch) => {
                    if value.restart_identity {
                        return Err(DialectError::invalid_expression(
                            "TRUNCATE cannot both restart and continue identity",
                        )
                        .into());
                    }
                    out.push_str(" CONTINUE IDENTITY");
                }
                "restrict" if switch_enabled(switch) => {
                    if value.cascade {
                        return Err(DialectError::invalid_expression(
                            "TRUNCATE cannot be both CASCADE and RESTRICT",
                        )
                        .into());
                    }
                    out.push_str(" RESTRICT");
                }
                "continue_identity" | "restrict" => {}
                _ => log::warn!(
                    "Ignoring TRUNCATE option `{}`, not understood by the postgres dialect",
                    name
                ),
            }
        }
        Ok(())
    }

    fn value_adapter(&self, category: ValueCategory) -> Adapter {
        match category {
            ValueCategory::UnsignedInteger => Adapter::UnsignedAsSigned,
            _ => Adapter::Identity,
        }
    }
}
