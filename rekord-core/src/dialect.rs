use crate::{
    Adapter, ArrayExpression, ArrayOperation, ArrayOperator, BinaryOp, BinaryOpType,
    BoxedExpression, Capabilities, Column, ColumnDefault, ColumnDefinition, ColumnType,
    ConflictAction, Context, CreateTable, Cte, Delete, DialectError, DropTable, Error, Exists,
    Expression, FrameBound, FrameUnits, Fragment, Function, Grouping, Insert, InsertSource, Join,
    JoinConstraint, JoinType, JsonPath, JsonTable, JsonTableColumnKind, Lateral, Merge,
    MergeClause, OnConflict, OpPrecedence, Order, Ordered, Result, Select, ServerVersion, SetOperation,
    SetOperator, Subquery, TableExpression, TableFunction, Truncate, UnaryOp, UnaryOpType, Update,
    UpsertStyle, Value, ValueCategory, Wildcard, Window, WindowFunction, WindowSpec, WithQuery,
    build_group_by, build_order_by, possibly_parenthesized, restore_value, separated_by,
    temporal_text,
};
use std::fmt::Write;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $context:ident, $out:ident, $value:expr) => {{
        if $value.is_infinite() {
            $this.write_value_string(
                $context,
                $out,
                if $value.is_sign_negative() {
                    "-Infinity"
                } else {
                    "Infinity"
                },
            );
        } else if $value.is_nan() {
            $this.write_value_string($context, $out, "NaN");
        } else {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        }
    }};
}

/// How bound parameters are referenced in the SQL text.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Positional `?`.
    #[default]
    QuestionMark,
    /// Numbered `$1`, `$2`, ...
    Numbered,
}

/// Per backend rendering policy: quoting, placeholders, capabilities, type mapping, value
/// adapters and one renderer per expression node.
///
/// Every method has a default closest to standard SQL, backends override what differs.
/// Renderers of features only some backends have consult the matching `supports_*` query and
/// fail with [`DialectError::UnsupportedFeature`] instead of emitting invalid SQL. Array
/// construction and wildcards never gate.
pub trait Dialect: Send + Sync {
    /// Dialect name used in error messages.
    fn name(&self) -> &'static str;

    fn as_dyn(&self) -> &dyn Dialect;

    fn capabilities(&self) -> &Capabilities;

    /// Server version the capabilities were derived from, if known.
    fn server_version(&self) -> Option<ServerVersion> {
        None
    }

    /// Fail with [`DialectError::UnsupportedFeature`] unless `supported`.
    fn require(&self, supported: bool, feature: &'static str) -> Result<()> {
        if supported {
            Ok(())
        } else {
            Err(DialectError::unsupported_feature(feature, self.name()).into())
        }
    }

    fn supports_basic_cte(&self) -> bool {
        self.capabilities().cte.basic
    }
    fn supports_recursive_cte(&self) -> bool {
        self.capabilities().cte.recursive
    }
    fn supports_materialized_cte(&self) -> bool {
        self.capabilities().cte.materialized
    }
    fn supports_cte_in_dml(&self) -> bool {
        self.capabilities().cte.in_dml
    }
    fn supports_inner_join(&self) -> bool {
        self.capabilities().join.inner
    }
    fn supports_left_join(&self) -> bool {
        self.capabilities().join.left
    }
    fn supports_right_join(&self) -> bool {
        self.capabilities().join.right
    }
    fn supports_full_join(&self) -> bool {
        self.capabilities().join.full
    }
    fn supports_cross_join(&self) -> bool {
        self.capabilities().join.cross
    }
    fn supports_natural_join(&self) -> bool {
        self.capabilities().join.natural
    }
    fn supports_lateral_join(&self) -> bool {
        self.capabilities().lateral.lateral
    }
    fn supports_json_type(&self) -> bool {
        self.capabilities().json.json_type
    }
    fn supports_json_arrows(&self) -> bool {
        self.capabilities().json.arrow_operators
    }
    fn supports_json_table(&self) -> bool {
        self.capabilities().json.json_table
    }
    fn supports_array_type(&self) -> bool {
        self.capabilities().array.array_type
    }
    fn supports_array_operators(&self) -> bool {
        self.capabilities().array.operators
    }
    fn supports_rollup(&self) -> bool {
        self.capabilities().grouping.rollup
    }
    fn supports_cube(&self) -> bool {
        self.capabilities().grouping.cube
    }
    fn supports_grouping_sets(&self) -> bool {
        self.capabilities().grouping.grouping_sets
    }
    fn supports_window_functions(&self) -> bool {
        self.capabilities().window.window_functions
    }
    fn supports_filter_clause(&self) -> bool {
        self.capabilities().window.filter_clause
    }
    fn supports_union(&self) -> bool {
        self.capabilities().set_operation.union
    }
    fn supports_intersect(&self) -> bool {
        self.capabilities().set_operation.intersect
    }
    fn supports_except(&self) -> bool {
        self.capabilities().set_operation.except
    }
    fn supports_returning(&self) -> bool {
        self.capabilities().returning.returning
    }
    fn upsert_style(&self) -> UpsertStyle {
        self.capabilities().upsert.style
    }
    fn supports_upsert(&self) -> bool {
        self.upsert_style() != UpsertStyle::None
    }
    fn supports_qualified_wildcard(&self) -> bool {
        self.capabilities().wildcard.qualified
    }
    fn supports_truncate(&self) -> bool {
        self.capabilities().truncate.statement
    }
    fn supports_truncate_restart_identity(&self) -> bool {
        self.capabilities().truncate.restart_identity
    }
    fn supports_truncate_cascade(&self) -> bool {
        self.capabilities().truncate.cascade
    }
    fn supports_merge(&self) -> bool {
        self.capabilities().merge.merge
    }
    fn supports_savepoint(&self) -> bool {
        self.capabilities().transaction.savepoint
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &str,
        search: char,
        replace: &str,
    ) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(context, out, value, '"', "\"\"");
        out.push('"');
    }

    fn format_identifier(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_identifier_quoted(&mut Context::default(), &mut out, value);
        out
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(context, out, value, '\'', "''");
        out.push('\'');
    }

    fn format_string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_value_string(&mut Context::default(), &mut out, value);
        out
    }

    /// Render a value inline, used where parameters are not accepted (column defaults).
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_value_none(context, out),
            Value::Boolean(v) => self.write_value_bool(context, out, *v),
            Value::Int8(v) => write_integer!(out, *v),
            Value::Int16(v) => write_integer!(out, *v),
            Value::Int32(v) => write_integer!(out, *v),
            Value::Int64(v) => write_integer!(out, *v),
            Value::UInt8(v) => write_integer!(out, *v),
            Value::UInt16(v) => write_integer!(out, *v),
            Value::UInt32(v) => write_integer!(out, *v),
            Value::UInt64(v) => write_integer!(out, *v),
            Value::Float32(v) => write_float!(self, context, out, *v),
            Value::Float64(v) => write_float!(self, context, out, *v),
            Value::Decimal(v) => {
                let _ = write!(out, "{}", v);
            }
            Value::Varchar(v) => self.write_value_string(context, out, v),
            Value::Blob(v) => self.write_value_blob(context, out, v.as_ref()),
            Value::Date(..)
            | Value::Time(..)
            | Value::Timestamp(..)
            | Value::TimestampWithTimezone(..) => {
                self.write_value_string(context, out, &temporal_text(value)?)
            }
            Value::Uuid(v) => self.write_value_string(context, out, &v.hyphenated().to_string()),
            Value::Json(v) => self.write_value_string(context, out, &v.to_string()),
            Value::List(v) => {
                out.push_str("ARRAY[");
                separated_by(out, v, |out, v| self.write_value(context, out, v), ", ")?;
                out.push(']');
            }
        };
        Ok(())
    }

    /// Render NULL literal.
    fn write_value_none(&self, _context: &mut Context, out: &mut String) {
        out.push_str("NULL");
    }

    /// Render boolean literal.
    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// Render a blob literal, `X'0AFF'`.
    fn write_value_blob(&self, _context: &mut Context, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::QuestionMark
    }

    /// Placeholder text for the 1-based `position`, numbered styles default to `$1` without one.
    fn parameter_placeholder(&self, position: Option<usize>) -> String {
        match self.placeholder_style() {
            PlaceholderStyle::QuestionMark => "?".into(),
            PlaceholderStyle::Numbered => format!("${}", position.unwrap_or(1)),
        }
    }

    /// Render the placeholder of the parameter at 1-based `position`.
    fn write_placeholder(&self, _context: &mut Context, out: &mut String, position: usize) {
        match self.placeholder_style() {
            PlaceholderStyle::QuestionMark => out.push('?'),
            PlaceholderStyle::Numbered => {
                out.push('$');
                write_integer!(out, position);
            }
        }
    }

    /// Bind `value` and write its placeholder.
    fn write_parameter(&self, context: &mut Context, out: &mut String, value: Value) {
        context.params.push(value);
        let position = context.params.len();
        self.write_placeholder(context, out, position);
    }

    /// Precedence table for unary operators.
    fn expression_unary_op_precedence(&self, value: &UnaryOpType) -> i32 {
        match value {
            UnaryOpType::Negative => 1250,
            UnaryOpType::Not => 250,
            UnaryOpType::IsNull | UnaryOpType::IsNotNull => 400,
        }
    }

    /// Precedence table for binary operators.
    fn expression_binary_op_precedence(&self, value: &BinaryOpType) -> i32 {
        match value {
            BinaryOpType::Or => 100,
            BinaryOpType::And => 200,
            BinaryOpType::Equal => 300,
            BinaryOpType::NotEqual => 300,
            BinaryOpType::Less => 300,
            BinaryOpType::Greater => 300,
            BinaryOpType::LessEqual => 300,
            BinaryOpType::GreaterEqual => 300,
            BinaryOpType::Is => 400,
            BinaryOpType::IsNot => 400,
            BinaryOpType::Like => 400,
            BinaryOpType::NotLike => 400,
            BinaryOpType::In => 400,
            BinaryOpType::NotIn => 400,
            BinaryOpType::Concatenation => 750,
            BinaryOpType::Subtraction => 800,
            BinaryOpType::Addition => 800,
            BinaryOpType::Multiplication => 900,
            BinaryOpType::Division => 900,
            BinaryOpType::Remainder => 900,
        }
    }

    /// Precedence of JSON extraction.
    fn json_path_precedence(&self) -> i32 {
        1000
    }

    /// Render a column reference, the alias only where it can be declared.
    fn write_column(&self, context: &mut Context, out: &mut String, value: &Column) {
        if let Some(table) = &value.table {
            self.write_identifier_quoted(context, out, table);
            out.push('.');
        }
        self.write_identifier_quoted(context, out, &value.name);
        if let Some(alias) = &value.alias {
            if context.alias_declaration() {
                out.push_str(" AS ");
                self.write_identifier_quoted(context, out, alias);
            }
        }
    }

    /// Render a table reference with optional schema and alias.
    fn write_table(&self, context: &mut Context, out: &mut String, value: &TableExpression) {
        if let Some(schema) = &value.schema {
            self.write_identifier_quoted(context, out, schema);
            out.push('.');
        }
        self.write_identifier_quoted(context, out, &value.name);
        if let Some(alias) = &value.alias {
            if context.alias_declaration() {
                out.push_str(" AS ");
                self.write_identifier_quoted(context, out, alias);
            }
        }
    }

    /// Render `NAME([DISTINCT] args)` without alias.
    fn write_function_call(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &Function,
    ) -> Result<()> {
        out.push_str(&value.name);
        out.push('(');
        if value.distinct {
            out.push_str("DISTINCT ");
        }
        let mut context = context.switch_fragment(Fragment::Operand);
        separated_by(
            out,
            &value.args,
            |out, v| v.write_query(self.as_dyn(), &mut context, out),
            ", ",
        )?;
        out.push(')');
        Ok(())
    }

    fn write_function(&self, context: &mut Context, out: &mut String, value: &Function) -> Result<()> {
        self.write_function_call(context, out, value)?;
        if let Some(alias) = &value.alias {
            if context.alias_declaration() {
                out.push_str(" AS ");
                self.write_identifier_quoted(context, out, alias);
            }
        }
        Ok(())
    }

    /// Render `(a, b, c)`.
    fn write_tuple(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &[BoxedExpression],
    ) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::Operand);
        out.push('(');
        separated_by(
            out,
            value,
            |out, v| v.write_query(self.as_dyn(), &mut context, out),
            ", ",
        )?;
        out.push(')');
        Ok(())
    }

    /// Render unary operator expression.
    fn write_expression_unary_op(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &UnaryOp<&dyn Expression>,
    ) -> Result<()> {
        match value.op {
            UnaryOpType::Negative => out.push('-'),
            UnaryOpType::Not => out.push_str("NOT "),
            _ => {}
        };
        let mut context = context.switch_fragment(Fragment::Operand);
        possibly_parenthesized!(
            out,
            value.arg.precedence(self.as_dyn()) <= self.expression_unary_op_precedence(&value.op),
            value.arg.write_query(self.as_dyn(), &mut context, out)?
        );
        match value.op {
            UnaryOpType::IsNull => out.push_str(" IS NULL"),
            UnaryOpType::IsNotNull => out.push_str(" IS NOT NULL"),
            _ => {}
        };
        Ok(())
    }

    /// Render binary operator expression handling precedence / parenthesis.
    fn write_expression_binary_op(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &BinaryOp<&dyn Expression, &dyn Expression>,
    ) -> Result<()> {
        let infix = match value.op {
            BinaryOpType::Multiplication => " * ",
            BinaryOpType::Division => " / ",
            BinaryOpType::Remainder => " % ",
            BinaryOpType::Addition => " + ",
            BinaryOpType::Subtraction => " - ",
            BinaryOpType::Concatenation => " || ",
            BinaryOpType::Is => " IS ",
            BinaryOpType::IsNot => " IS NOT ",
            BinaryOpType::Like => " LIKE ",
            BinaryOpType::NotLike => " NOT LIKE ",
            BinaryOpType::In => " IN ",
            BinaryOpType::NotIn => " NOT IN ",
            BinaryOpType::Equal => " = ",
            BinaryOpType::NotEqual => " != ",
            BinaryOpType::Less => " < ",
            BinaryOpType::LessEqual => " <= ",
            BinaryOpType::Greater => " > ",
            BinaryOpType::GreaterEqual => " >= ",
            BinaryOpType::And => " AND ",
            BinaryOpType::Or => " OR ",
        };
        let mut context = context.switch_fragment(Fragment::Operand);
        let precedence = self.expression_binary_op_precedence(&value.op);
        possibly_parenthesized!(
            out,
            value.lhs.precedence(self.as_dyn()) < precedence,
            value.lhs.write_query(self.as_dyn(), &mut context, out)?
        );
        out.push_str(infix);
        possibly_parenthesized!(
            out,
            value.rhs.precedence(self.as_dyn()) <= precedence,
            value.rhs.write_query(self.as_dyn(), &mut context, out)?
        );
        Ok(())
    }

    /// Render `expr ASC` / `expr DESC`.
    fn write_expression_ordered(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &Ordered<&dyn Expression>,
    ) -> Result<()> {
        value.expression.write_query(self.as_dyn(), context, out)?;
        out.push_str(match value.order {
            Order::ASC => " ASC",
            Order::DESC => " DESC",
        });
        Ok(())
    }

    /// Render `(query) AS "alias"`, the alias only where it can be declared.
    fn write_subquery(&self, context: &mut Context, out: &mut String, value: &Subquery) -> Result<()> {
        out.push('(');
        value.query.write_query(self.as_dyn(), context, out)?;
        out.push(')');
        if let Some(alias) = &value.alias {
            if context.alias_declaration() {
                out.push_str(" AS ");
                self.write_identifier_quoted(context, out, alias);
            }
        }
        Ok(())
    }

    fn write_exists(&self, context: &mut Context, out: &mut String, value: &Exists) -> Result<()> {
        out.push_str(if value.negated {
            "NOT EXISTS ("
        } else {
            "EXISTS ("
        });
        value.query.write_query(self.as_dyn(), context, out)?;
        out.push(')');
        Ok(())
    }

    /// Render `WITH [RECURSIVE] ctes main`.
    fn write_with_query(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &WithQuery,
    ) -> Result<()> {
        self.require(self.supports_basic_cte(), "WITH (common table expressions)")?;
        if value.ctes.is_empty() {
            return Err(DialectError::invalid_expression("WITH requires at least one CTE").into());
        }
        let recursive = value.is_recursive();
        if recursive {
            self.require(self.supports_recursive_cte(), "WITH RECURSIVE")?;
        }
        if value.modifies_data() || value.ctes.iter().any(Expression::modifies_data) {
            self.require(
                self.supports_cte_in_dml(),
                "data modifying statements with WITH",
            )?;
        }
        {
            let mut context = context.switch_fragment(Fragment::With);
            out.push_str(if recursive { "WITH RECURSIVE " } else { "WITH " });
            separated_by(
                out,
                &value.ctes,
                |out, v| self.write_cte(&mut context, out, v),
                ", ",
            )?;
        }
        out.push('\n');
        value.main.write_query(self.as_dyn(), context, out)
    }

    /// Render one CTE definition `"name"("c") AS [[NOT] MATERIALIZED] (query)`.
    fn write_cte(&self, context: &mut Context, out: &mut String, value: &Cte) -> Result<()> {
        self.require(self.supports_basic_cte(), "WITH (common table expressions)")?;
        if value.recursive {
            self.require(self.supports_recursive_cte(), "WITH RECURSIVE")?;
        }
        if value.materialized.is_some() {
            self.require(self.supports_materialized_cte(), "MATERIALIZED CTE hints")?;
        }
        self.write_identifier_quoted(context, out, &value.name);
        if !value.columns.is_empty() {
            out.push('(');
            separated_by(
                out,
                &value.columns,
                |out, v| {
                    self.write_identifier_quoted(context, out, v);
                    Ok(())
                },
                ", ",
            )?;
            out.push(')');
        }
        out.push_str(match value.materialized {
            None => " AS (",
            Some(true) => " AS MATERIALIZED (",
            Some(false) => " AS NOT MATERIALIZED (",
        });
        value.query.write_query(self.as_dyn(), context, out)?;
        out.push(')');
        Ok(())
    }

    /// Render join keyword(s) for the given join type.
    fn write_join_type(&self, _context: &mut Context, out: &mut String, join_type: &JoinType) {
        out.push_str(match join_type {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL OUTER JOIN",
            JoinType::Cross => "CROSS JOIN",
            JoinType::Natural => "NATURAL JOIN",
        });
    }

    /// Render a JOIN clause.
    fn write_join(&self, context: &mut Context, out: &mut String, join: &Join) -> Result<()> {
        let (supported, feature) = match join.join {
            JoinType::Inner => (self.supports_inner_join(), "INNER JOIN"),
            JoinType::Left => (self.supports_left_join(), "LEFT JOIN"),
            JoinType::Right => (self.supports_right_join(), "RIGHT JOIN"),
            JoinType::Full => (self.supports_full_join(), "FULL OUTER JOIN"),
            JoinType::Cross => (self.supports_cross_join(), "CROSS JOIN"),
            JoinType::Natural => (self.supports_natural_join(), "NATURAL JOIN"),
        };
        self.require(supported, feature)?;
        match (join.join.needs_constraint(), &join.constraint) {
            (true, None) => {
                return Err(DialectError::invalid_expression(format!(
                    "{feature} requires an ON or USING constraint"
                ))
                .into());
            }
            (false, Some(..)) => {
                return Err(DialectError::invalid_expression(format!(
                    "{feature} does not take a constraint"
                ))
                .into());
            }
            _ => {}
        }
        let mut context = context.switch_fragment(Fragment::Join);
        join.lhs.write_query(self.as_dyn(), &mut context, out)?;
        out.push(' ');
        self.write_join_type(&mut context, out, &join.join);
        out.push(' ');
        join.rhs.write_query(self.as_dyn(), &mut context, out)?;
        match &join.constraint {
            Some(JoinConstraint::On(on)) => {
                let mut context = context.switch_fragment(Fragment::JoinOn);
                out.push_str(" ON ");
                on.write_query(self.as_dyn(), &mut context, out)?;
            }
            Some(JoinConstraint::Using(columns)) => {
                out.push_str(" USING (");
                separated_by(
                    out,
                    columns,
                    |out, v| {
                        self.write_identifier_quoted(&mut context, out, v);
                        Ok(())
                    },
                    ", ",
                )?;
                out.push(')');
            }
            None => {}
        }
        Ok(())
    }

    fn write_lateral(&self, context: &mut Context, out: &mut String, value: &Lateral) -> Result<()> {
        self.require(self.supports_lateral_join(), "LATERAL")?;
        out.push_str("LATERAL ");
        value.source.write_query(self.as_dyn(), context, out)
    }

    /// Render `fn(args) AS "alias"("c1", "c2")`.
    fn write_table_function(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &TableFunction,
    ) -> Result<()> {
        if value.alias.is_none() && !value.columns.is_empty() {
            return Err(DialectError::invalid_expression(format!(
                "Column aliases of table function {} require a table alias",
                value.name
            ))
            .into());
        }
        out.push_str(&value.name);
        out.push('(');
        {
            let mut context = context.switch_fragment(Fragment::Operand);
            separated_by(
                out,
                &value.args,
                |out, v| v.write_query(self.as_dyn(), &mut context, out),
                ", ",
            )?;
        }
        out.push(')');
        if let Some(alias) = &value.alias {
            out.push_str(" AS ");
            self.write_identifier_quoted(context, out, alias);
            if !value.columns.is_empty() {
                out.push('(');
                separated_by(
                    out,
                    &value.columns,
                    |out, v| {
                        self.write_identifier_quoted(context, out, v);
                        Ok(())
                    },
                    ", ",
                )?;
                out.push(')');
            }
        }
        Ok(())
    }

    /// Render `JSON_TABLE(source, 'path' COLUMNS (...)) AS "alias"`.
    fn write_json_table(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &JsonTable,
    ) -> Result<()> {
        self.require(self.supports_json_table(), "JSON_TABLE")?;
        if value.columns.is_empty() {
            return Err(
                DialectError::invalid_expression("JSON_TABLE requires at least one column").into(),
            );
        }
        out.push_str("JSON_TABLE(");
        {
            let mut context = context.switch_fragment(Fragment::Operand);
            value.source.write_query(self.as_dyn(), &mut context, out)?;
        }
        out.push_str(", ");
        self.write_value_string(context, out, &value.path);
        out.push_str(" COLUMNS (");
        separated_by(
            out,
            &value.columns,
            |out, v| {
                self.write_identifier_quoted(context, out, &v.name);
                match &v.kind {
                    JsonTableColumnKind::Path { column_type, path } => {
                        out.push(' ');
                        self.write_column_type(context, out, column_type, None)?;
                        out.push_str(" PATH ");
                        self.write_value_string(context, out, path);
                    }
                    JsonTableColumnKind::Ordinality => out.push_str(" FOR ORDINALITY"),
                }
                Ok(())
            },
            ", ",
        )?;
        out.push_str("))");
        if let Some(alias) = &value.alias {
            out.push_str(" AS ");
            self.write_identifier_quoted(context, out, alias);
        }
        Ok(())
    }

    /// Render `target -> ?` or `target ->> ?`, the path is bound.
    fn write_json_path(&self, context: &mut Context, out: &mut String, value: &JsonPath) -> Result<()> {
        self.require(self.supports_json_arrows(), "JSON path operators")?;
        let mut context = context.switch_fragment(Fragment::Operand);
        possibly_parenthesized!(
            out,
            value.target.precedence(self.as_dyn()) < self.json_path_precedence(),
            value.target.write_query(self.as_dyn(), &mut context, out)?
        );
        out.push_str(if value.as_text { " ->> " } else { " -> " });
        self.write_parameter(&mut context, out, Value::Varchar(value.path.clone()));
        Ok(())
    }

    /// Render `ARRAY[a, b]`, never gated.
    fn write_array_expression(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &ArrayExpression,
    ) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::Operand);
        out.push_str("ARRAY[");
        separated_by(
            out,
            &value.elements,
            |out, v| v.write_query(self.as_dyn(), &mut context, out),
            ", ",
        )?;
        out.push(']');
        Ok(())
    }

    fn write_array_operation(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &ArrayOperation,
    ) -> Result<()> {
        self.require(self.supports_array_operators(), "array operators")?;
        let mut context = context.switch_fragment(Fragment::Operand);
        let precedence = self.expression_binary_op_precedence(&BinaryOpType::Equal);
        possibly_parenthesized!(
            out,
            value.lhs.precedence(self.as_dyn()) <= precedence,
            value.lhs.write_query(self.as_dyn(), &mut context, out)?
        );
        let any = value.op == ArrayOperator::Any;
        out.push_str(match value.op {
            ArrayOperator::Contains => " @> ",
            ArrayOperator::ContainedBy => " <@ ",
            ArrayOperator::Overlaps => " && ",
            ArrayOperator::Any => " = ANY(",
        });
        possibly_parenthesized!(
            out,
            !any && value.rhs.precedence(self.as_dyn()) <= precedence,
            value.rhs.write_query(self.as_dyn(), &mut context, out)?
        );
        if any {
            out.push(')');
        }
        Ok(())
    }

    /// Render `ROLLUP(..)`, `CUBE(..)` or `GROUPING SETS (..)`.
    fn write_grouping(&self, context: &mut Context, out: &mut String, value: &Grouping) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::Operand);
        let (keyword, sets) = match value {
            Grouping::Rollup(v) => {
                self.require(self.supports_rollup(), "ROLLUP")?;
                ("ROLLUP", v.as_slice())
            }
            Grouping::Cube(v) => {
                self.require(self.supports_cube(), "CUBE")?;
                ("CUBE", v.as_slice())
            }
            Grouping::Sets(sets) => {
                self.require(self.supports_grouping_sets(), "GROUPING SETS")?;
                if sets.is_empty() {
                    return Err(DialectError::invalid_expression(
                        "GROUPING SETS requires at least one set",
                    )
                    .into());
                }
                out.push_str("GROUPING SETS (");
                separated_by(
                    out,
                    sets,
                    |out, set| self.write_tuple(&mut context, out, set),
                    ", ",
                )?;
                out.push(')');
                return Ok(());
            }
        };
        if sets.is_empty() {
            return Err(DialectError::invalid_expression(format!(
                "{keyword} requires at least one expression"
            ))
            .into());
        }
        out.push_str(keyword);
        self.write_tuple(&mut context, out, sets)
    }

    fn write_frame_bound(&self, _context: &mut Context, out: &mut String, value: &FrameBound) {
        match value {
            FrameBound::UnboundedPreceding => out.push_str("UNBOUNDED PRECEDING"),
            FrameBound::Preceding(v) => {
                write_integer!(out, *v);
                out.push_str(" PRECEDING");
            }
            FrameBound::CurrentRow => out.push_str("CURRENT ROW"),
            FrameBound::Following(v) => {
                write_integer!(out, *v);
                out.push_str(" FOLLOWING");
            }
            FrameBound::UnboundedFollowing => out.push_str("UNBOUNDED FOLLOWING"),
        }
    }

    /// Render the inside of `OVER (...)` or `WINDOW "w" AS (...)`.
    fn write_window_spec(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &WindowSpec,
    ) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::Window);
        let start = out.len();
        if !value.partition_by.is_empty() {
            out.push_str("PARTITION BY ");
            separated_by(
                out,
                &value.partition_by,
                |out, v| v.write_query(self.as_dyn(), &mut context, out),
                ", ",
            )?;
        }
        if !value.order_by.is_empty() {
            if out.len() > start {
                out.push(' ');
            }
            out.push_str("ORDER BY ");
            separated_by(
                out,
                &value.order_by,
                |out, v| v.write_query(self.as_dyn(), &mut context, out),
                ", ",
            )?;
        }
        if let Some(frame) = &value.frame {
            if out.len() > start {
                out.push(' ');
            }
            out.push_str(match frame.units {
                FrameUnits::Rows => "ROWS ",
                FrameUnits::Range => "RANGE ",
                FrameUnits::Groups => "GROUPS ",
            });
            if let Some(end) = &frame.end {
                out.push_str("BETWEEN ");
                self.write_frame_bound(&mut context, out, &frame.start);
                out.push_str(" AND ");
                self.write_frame_bound(&mut context, out, end);
            } else {
                self.write_frame_bound(&mut context, out, &frame.start);
            }
        }
        Ok(())
    }

    /// Render `fn(args) [FILTER (WHERE ..)] OVER (...) [AS "alias"]`.
    fn write_window_function(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &WindowFunction,
    ) -> Result<()> {
        self.require(self.supports_window_functions(), "window functions")?;
        self.write_function_call(context, out, &value.function)?;
        if let Some(filter) = &value.filter {
            self.require(self.supports_filter_clause(), "FILTER clause")?;
            let mut context = context.switch_fragment(Fragment::Operand);
            out.push_str(" FILTER (WHERE ");
            filter.write_query(self.as_dyn(), &mut context, out)?;
            out.push(')');
        }
        out.push_str(" OVER ");
        match &value.window {
            Window::Named(name) => self.write_identifier_quoted(context, out, name),
            Window::Spec(spec) => {
                out.push('(');
                self.write_window_spec(context, out, spec)?;
                out.push(')');
            }
        }
        if let Some(alias) = &value.function.alias {
            if context.alias_declaration() {
                out.push_str(" AS ");
                self.write_identifier_quoted(context, out, alias);
            }
        }
        Ok(())
    }

    /// Render `lhs UNION [ALL] rhs`, members on their own lines.
    fn write_set_operation(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &SetOperation,
    ) -> Result<()> {
        let (supported, keyword) = match value.op {
            SetOperator::Union => (self.supports_union(), "UNION"),
            SetOperator::Intersect => (self.supports_intersect(), "INTERSECT"),
            SetOperator::Except => (self.supports_except(), "EXCEPT"),
        };
        self.require(supported, keyword)?;
        value.lhs.write_query(self.as_dyn(), context, out)?;
        out.push('\n');
        out.push_str(keyword);
        if value.all {
            out.push_str(" ALL");
        }
        out.push('\n');
        value.rhs.write_query(self.as_dyn(), context, out)
    }

    /// Render `RETURNING a, b`, nothing for an empty list.
    fn write_returning(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &[BoxedExpression],
    ) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.require(self.supports_returning(), "RETURNING")?;
        let mut context = context.switch_fragment(Fragment::Returning);
        out.push_str("RETURNING ");
        separated_by(
            out,
            value,
            |out, v| v.write_query(self.as_dyn(), &mut context, out),
            ", ",
        )
    }

    /// Render `ON CONFLICT ("target") DO NOTHING | DO UPDATE SET "c" = EXCLUDED."c"`.
    fn write_on_conflict(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &OnConflict,
    ) -> Result<()> {
        self.require(
            self.upsert_style() == UpsertStyle::OnConflict,
            "upsert (ON CONFLICT)",
        )?;
        let mut context = context.switch_fragment(Fragment::InsertIntoOnConflict);
        out.push_str("ON CONFLICT");
        if !value.target.is_empty() {
            out.push_str(" (");
            separated_by(
                out,
                &value.target,
                |out, v| {
                    self.write_identifier_quoted(&mut context, out, v);
                    Ok(())
                },
                ", ",
            )?;
            out.push(')');
        }
        match &value.action {
            ConflictAction::DoNothing => out.push_str(" DO NOTHING"),
            ConflictAction::DoUpdate(columns) => {
                if value.target.is_empty() {
                    return Err(DialectError::invalid_expression(
                        "ON CONFLICT DO UPDATE requires a conflict target",
                    )
                    .into());
                }
                if columns.is_empty() {
                    return Err(DialectError::invalid_expression(
                        "ON CONFLICT DO UPDATE requires at least one column",
                    )
                    .into());
                }
                out.push_str(" DO UPDATE SET ");
                separated_by(
                    out,
                    columns,
                    |out, v| {
                        self.write_identifier_quoted(&mut context, out, v);
                        out.push_str(" = EXCLUDED.");
                        self.write_identifier_quoted(&mut context, out, v);
                        Ok(())
                    },
                    ", ",
                )?;
            }
        }
        Ok(())
    }

    /// Render `*` or `"table".*`, never gated.
    fn write_wildcard(&self, context: &mut Context, out: &mut String, value: &Wildcard) {
        if let Some(table) = &value.table {
            self.write_identifier_quoted(context, out, table);
            out.push('.');
        }
        out.push('*');
    }

    /// Render `TRUNCATE TABLE "name" [RESTART IDENTITY] [CASCADE]` plus dialect options.
    fn write_truncate(&self, context: &mut Context, out: &mut String, value: &Truncate) -> Result<()> {
        self.require(self.supports_truncate(), "TRUNCATE")?;
        if value.restart_identity {
            self.require(
                self.supports_truncate_restart_identity(),
                "TRUNCATE RESTART IDENTITY",
            )?;
        }
        if value.cascade {
            self.require(self.supports_truncate_cascade(), "TRUNCATE CASCADE")?;
        }
        let mut context = context.switch_fragment(Fragment::Truncate);
        out.push_str("TRUNCATE TABLE ");
        self.write_table(&mut context, out, &value.table);
        if value.restart_identity {
            out.push_str(" RESTART IDENTITY");
        }
        if value.cascade {
            out.push_str(" CASCADE");
        }
        self.write_truncate_options(&mut context, out, value)
    }

    /// Trailing dialect specific TRUNCATE options, unknown options are ignored.
    fn write_truncate_options(
        &self,
        _context: &mut Context,
        _out: &mut String,
        value: &Truncate,
    ) -> Result<()> {
        for name in value.options.keys() {
            log::warn!(
                "Ignoring TRUNCATE option `{}`, not understood by the {} dialect",
                name,
                self.name()
            );
        }
        Ok(())
    }

    /// Render `MERGE INTO target USING source ON cond WHEN ...`.
    fn write_merge(&self, context: &mut Context, out: &mut String, value: &Merge) -> Result<()> {
        self.require(self.supports_merge(), "MERGE")?;
        if value.clauses.is_empty() {
            return Err(
                DialectError::invalid_expression("MERGE requires at least one WHEN clause").into(),
            );
        }
        let mut context = context.switch_fragment(Fragment::Merge);
        out.push_str("MERGE INTO ");
        self.write_table(&mut context, out, &value.target);
        out.push_str("\nUSING ");
        value.source.write_query(self.as_dyn(), &mut context, out)?;
        out.push_str(" ON ");
        {
            let mut context = context.switch_fragment(Fragment::MergeOn);
            value.on.write_query(self.as_dyn(), &mut context, out)?;
        }
        let mut context = context.switch_fragment(Fragment::MergeOn);
        for clause in &value.clauses {
            let (matched, condition) = match clause {
                MergeClause::MatchedUpdate { condition, .. }
                | MergeClause::MatchedDelete { condition } => (true, condition),
                MergeClause::NotMatchedInsert { condition, .. }
                | MergeClause::NotMatchedDoNothing { condition } => (false, condition),
            };
            out.push_str(if matched {
                "\nWHEN MATCHED"
            } else {
                "\nWHEN NOT MATCHED"
            });
            if let Some(condition) = condition {
                out.push_str(" AND ");
                condition.write_query(self.as_dyn(), &mut context, out)?;
            }
            out.push_str(" THEN ");
            match clause {
                MergeClause::MatchedUpdate { set, .. } => {
                    if set.is_empty() {
                        return Err(DialectError::invalid_expression(
                            "MERGE UPDATE requires at least one assignment",
                        )
                        .into());
                    }
                    out.push_str("UPDATE SET ");
                    self.write_assignments(&mut context, out, set)?;
                }
                MergeClause::MatchedDelete { .. } => out.push_str("DELETE"),
                MergeClause::NotMatchedInsert {
                    columns, values, ..
                } => {
                    if values.is_empty() || (!columns.is_empty() && columns.len() != values.len())
                    {
                        return Err(DialectError::invalid_expression(format!(
                            "MERGE INSERT has {} columns but {} values",
                            columns.len(),
                            values.len()
                        ))
                        .into());
                    }
                    out.push_str("INSERT ");
                    if !columns.is_empty() {
                        out.push('(');
                        separated_by(
                            out,
                            columns,
                            |out, v| {
                                self.write_identifier_quoted(&mut context, out, v);
                                Ok(())
                            },
                            ", ",
                        )?;
                        out.push_str(") ");
                    }
                    out.push_str("VALUES ");
                    self.write_tuple(&mut context, out, values)?;
                }
                MergeClause::NotMatchedDoNothing { .. } => out.push_str("DO NOTHING"),
            }
        }
        Ok(())
    }

    /// Render `"a" = expr, "b" = expr`.
    fn write_assignments(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &[(String, BoxedExpression)],
    ) -> Result<()> {
        separated_by(
            out,
            value,
            |out, (column, expression)| {
                self.write_identifier_quoted(context, out, column);
                out.push_str(" = ");
                let mut context = context.switch_fragment(Fragment::Operand);
                expression.write_query(self.as_dyn(), &mut context, out)
            },
            ", ",
        )
    }

    /// Render `keyword cond1 AND cond2`, nothing when there are no conditions.
    fn write_conditions(
        &self,
        context: &mut Context,
        out: &mut String,
        fragment: Fragment,
        keyword: &str,
        conditions: &[BoxedExpression],
    ) -> Result<()> {
        if conditions.is_empty() {
            return Ok(());
        }
        let mut context = context.switch_fragment(fragment);
        let precedence = self.expression_binary_op_precedence(&BinaryOpType::And);
        out.push_str(keyword);
        separated_by(
            out,
            conditions,
            |out, v| {
                possibly_parenthesized!(
                    out,
                    v.precedence(self.as_dyn()) < precedence,
                    v.write_query(self.as_dyn(), &mut context, out)?
                );
                Ok(())
            },
            " AND ",
        )
    }

    /// Emit SELECT statement.
    fn write_select(&self, context: &mut Context, out: &mut String, value: &Select) -> Result<()> {
        if let Some(join) = value.unsourced_joins.first() {
            return Err(DialectError::invalid_expression(format!(
                "{:?} JOIN has no left side, set the source with Select::from before joining",
                join
            ))
            .into());
        }
        let mut context = context.switch_fragment(Fragment::Select);
        out.push_str("SELECT ");
        if value.distinct {
            out.push_str("DISTINCT ");
        }
        if value.columns.is_empty() {
            out.push('*');
        } else {
            separated_by(
                out,
                &value.columns,
                |out, v| v.write_query(self.as_dyn(), &mut context, out),
                ", ",
            )?;
        }
        if let Some(from) = &value.from {
            let mut context = context.switch_fragment(Fragment::SelectFrom);
            out.push_str("\nFROM ");
            from.write_query(self.as_dyn(), &mut context, out)?;
        }
        self.write_conditions(
            &mut context,
            out,
            Fragment::SelectWhere,
            "\nWHERE ",
            &value.conditions,
        )?;
        if !value.group_by.is_empty() {
            out.push('\n');
            self.write_group_by(&mut context, out, &value.group_by)?;
        }
        self.write_conditions(
            &mut context,
            out,
            Fragment::SelectHaving,
            "\nHAVING ",
            &value.having,
        )?;
        if !value.windows.is_empty() {
            self.require(self.supports_window_functions(), "window functions")?;
            out.push_str("\nWINDOW ");
            separated_by(
                out,
                &value.windows,
                |out, (name, spec)| {
                    self.write_identifier_quoted(&mut context, out, name);
                    out.push_str(" AS (");
                    self.write_window_spec(&mut context, out, spec)?;
                    out.push(')');
                    Ok(())
                },
                ", ",
            )?;
        }
        if !value.order_by.is_empty() {
            let mut context = context.switch_fragment(Fragment::SelectOrderBy);
            let items = value
                .order_by
                .iter()
                .map(|v| {
                    let mut item = String::new();
                    v.write_query(self.as_dyn(), &mut context, &mut item)?;
                    Ok(item)
                })
                .collect::<Result<Vec<_>>>()?;
            out.push('\n');
            out.push_str(&build_order_by(&items));
        }
        if value.limit.is_some() || value.offset.is_some() {
            out.push('\n');
            self.write_limit_offset(
                &mut context,
                out,
                value.limit.as_ref(),
                value.offset.as_ref(),
            );
        }
        Ok(())
    }

    /// Render `GROUP BY a, b`.
    fn write_group_by(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &[BoxedExpression],
    ) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::SelectGroupBy);
        let items = value
            .iter()
            .map(|v| {
                let mut item = String::new();
                v.write_query(self.as_dyn(), &mut context, &mut item)?;
                Ok(item)
            })
            .collect::<Result<Vec<_>>>()?;
        out.push_str(&build_group_by(&items));
        Ok(())
    }

    /// Render `LIMIT ? OFFSET ?`, values are always bound.
    fn write_limit_offset(
        &self,
        context: &mut Context,
        out: &mut String,
        limit: Option<&Value>,
        offset: Option<&Value>,
    ) {
        let mut context = context.switch_fragment(Fragment::SelectLimit);
        if let Some(limit) = limit {
            out.push_str("LIMIT ");
            self.write_parameter(&mut context, out, limit.clone());
        }
        if let Some(offset) = offset {
            if limit.is_some() {
                out.push(' ');
            }
            out.push_str("OFFSET ");
            self.write_parameter(&mut context, out, offset.clone());
        }
    }

    /// Standalone `(fragment, params)` of the LIMIT/OFFSET clause, `(None, [])` without values.
    ///
    /// Backends that cannot express OFFSET alone prepend a sentinel LIMIT to an offset only
    /// clause (`LIMIT -1 OFFSET ?` in SQLite).
    fn format_limit_offset(
        &self,
        limit: Option<Value>,
        offset: Option<Value>,
    ) -> (Option<String>, Vec<Value>) {
        let mut context = Context::new(Fragment::SelectLimit);
        let mut out = String::new();
        self.write_limit_offset(&mut context, &mut out, limit.as_ref(), offset.as_ref());
        ((!out.is_empty()).then_some(out), context.params)
    }

    /// Emit INSERT statement.
    fn write_insert(&self, context: &mut Context, out: &mut String, value: &Insert) -> Result<()> {
        match &value.source {
            InsertSource::Values(rows) => {
                if rows.is_empty() {
                    return Err(DialectError::invalid_expression("INSERT without values").into());
                }
                let width = if value.columns.is_empty() {
                    rows[0].len()
                } else {
                    value.columns.len()
                };
                if let Some((i, row)) = rows
                    .iter()
                    .enumerate()
                    .find(|(_, row)| row.is_empty() || row.len() != width)
                {
                    return Err(DialectError::invalid_expression(format!(
                        "INSERT row {} has {} values, expected {}",
                        i,
                        row.len(),
                        width
                    ))
                    .into());
                }
            }
            InsertSource::DefaultValues if !value.columns.is_empty() => {
                return Err(DialectError::invalid_expression(
                    "INSERT DEFAULT VALUES does not take columns",
                )
                .into());
            }
            _ => {}
        }
        let mut context = context.switch_fragment(Fragment::InsertInto);
        out.push_str("INSERT INTO ");
        self.write_table(&mut context, out, &value.table);
        if !value.columns.is_empty() {
            out.push_str(" (");
            separated_by(
                out,
                &value.columns,
                |out, v| {
                    self.write_identifier_quoted(&mut context, out, v);
                    Ok(())
                },
                ", ",
            )?;
            out.push(')');
        }
        match &value.source {
            InsertSource::Values(rows) => {
                let mut context = context.switch_fragment(Fragment::InsertIntoValues);
                out.push_str("\nVALUES ");
                separated_by(
                    out,
                    rows,
                    |out, row| self.write_tuple(&mut context, out, row),
                    ", ",
                )?;
            }
            InsertSource::Select(query) => {
                out.push('\n');
                query.write_query(self.as_dyn(), &mut context, out)?;
            }
            InsertSource::DefaultValues => out.push_str(" DEFAULT VALUES"),
        }
        if let Some(on_conflict) = &value.on_conflict {
            out.push('\n');
            self.write_on_conflict(&mut context, out, on_conflict)?;
        }
        if !value.returning.is_empty() {
            out.push('\n');
            self.write_returning(&mut context, out, &value.returning)?;
        }
        Ok(())
    }

    /// Emit UPDATE statement.
    fn write_update(&self, context: &mut Context, out: &mut String, value: &Update) -> Result<()> {
        if value.set.is_empty() {
            return Err(DialectError::invalid_expression("UPDATE without SET assignments").into());
        }
        let mut context = context.switch_fragment(Fragment::Update);
        out.push_str("UPDATE ");
        self.write_table(&mut context, out, &value.table);
        out.push_str("\nSET ");
        {
            let mut context = context.switch_fragment(Fragment::UpdateSet);
            self.write_assignments(&mut context, out, &value.set)?;
        }
        self.write_conditions(
            &mut context,
            out,
            Fragment::UpdateWhere,
            "\nWHERE ",
            &value.conditions,
        )?;
        if !value.returning.is_empty() {
            out.push('\n');
            self.write_returning(&mut context, out, &value.returning)?;
        }
        Ok(())
    }

    /// Emit DELETE statement.
    fn write_delete(&self, context: &mut Context, out: &mut String, value: &Delete) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::DeleteFrom);
        out.push_str("DELETE FROM ");
        self.write_table(&mut context, out, &value.table);
        self.write_conditions(
            &mut context,
            out,
            Fragment::DeleteFromWhere,
            "\nWHERE ",
            &value.conditions,
        )?;
        if !value.returning.is_empty() {
            out.push('\n');
            self.write_returning(&mut context, out, &value.returning)?;
        }
        Ok(())
    }

    /// Emit CREATE TABLE with columns and composite primary key.
    fn write_create_table(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &CreateTable,
    ) -> Result<()> {
        if value.columns.is_empty() {
            return Err(DialectError::invalid_expression("CREATE TABLE without columns").into());
        }
        let mut context = context.switch_fragment(Fragment::CreateTable);
        out.push_str("CREATE TABLE ");
        if value.if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        self.write_table(&mut context, out, &value.table);
        out.push_str(" (\n");
        separated_by(
            out,
            &value.columns,
            |out, (name, definition)| {
                self.write_identifier_quoted(&mut context, out, name);
                out.push(' ');
                self.write_column_definition(&mut context, out, definition)
            },
            ",\n",
        )?;
        if !value.primary_key.is_empty() {
            out.push_str(",\nPRIMARY KEY (");
            separated_by(
                out,
                &value.primary_key,
                |out, v| {
                    self.write_identifier_quoted(&mut context, out, v);
                    Ok(())
                },
                ", ",
            )?;
            out.push(')');
        }
        out.push_str("\n)");
        Ok(())
    }

    /// Emit DROP TABLE statement.
    fn write_drop_table(&self, context: &mut Context, out: &mut String, value: &DropTable) {
        out.push_str("DROP TABLE ");
        if value.if_exists {
            out.push_str("IF EXISTS ");
        }
        self.write_table(context, out, &value.table);
    }

    fn unsupported_type(&self, value: &ColumnType) -> Error {
        DialectError::UnsupportedType {
            column_type: value.to_string(),
            dialect: self.name(),
        }
        .into()
    }

    /// Render the native type of an abstract column type.
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
            ColumnType::Float => out.push_str("FLOAT"),
            ColumnType::Blob => out.push_str("BLOB"),
            ColumnType::Uuid => out.push_str("UUID"),
            ColumnType::Json => out.push_str("JSON"),
            ColumnType::Array(inner) => {
                if !self.supports_array_type() {
                    return Err(self.unsupported_type(value));
                }
                self.write_column_type(context, out, inner, None)?;
                out.push_str("[]");
            }
            ColumnType::DateTime | ColumnType::Timestamp => out.push_str("TIMESTAMP"),
            ColumnType::Date => out.push_str("DATE"),
            ColumnType::Time => out.push_str("TIME"),
            ColumnType::Decimal { precision, scale } => {
                out.push_str("DECIMAL");
                self.write_type_precision(out, precision.map(u32::from), *scale);
            }
            ColumnType::Varchar => {
                out.push_str("VARCHAR");
                self.write_type_precision(out, length, None);
            }
            ColumnType::Char => {
                out.push_str("CHAR");
                self.write_type_precision(out, length, None);
            }
            ColumnType::Custom(v) => out.push_str(v),
        };
        Ok(())
    }

    /// `(p)` or `(p, s)`, nothing without precision.
    fn write_type_precision(&self, out: &mut String, precision: Option<u32>, scale: Option<u8>) {
        if let Some(precision) = precision {
            out.push('(');
            write_integer!(out, precision);
            if let Some(scale) = scale {
                out.push_str(", ");
                write_integer!(out, scale);
            }
            out.push(')');
        }
    }

    fn format_column_type(&self, value: &ColumnType, length: Option<u32>) -> Result<String> {
        let mut out = String::with_capacity(16);
        self.write_column_type(&mut Context::default(), &mut out, value, length)?;
        Ok(out)
    }

    /// Type written for autoincrement columns, dialects with serial types replace it here.
    fn write_autoincrement_column_type(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &ColumnType,
        length: Option<u32>,
    ) -> Result<()> {
        self.write_column_type(context, out, value, length)
    }

    /// Keyword written after `PRIMARY KEY` for autoincrement columns.
    fn autoincrement_keyword(&self) -> Option<&'static str> {
        Some("AUTOINCREMENT")
    }

    /// Render `TYPE [PRIMARY KEY] [AUTOINCREMENT] [UNIQUE] [NOT NULL] [DEFAULT v]`.
    fn write_column_definition(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &ColumnDefinition,
    ) -> Result<()> {
        if value.autoincrement {
            self.write_autoincrement_column_type(context, out, &value.column_type, value.length)?;
        } else {
            self.write_column_type(context, out, &value.column_type, value.length)?;
        }
        if value.primary_key {
            out.push_str(" PRIMARY KEY");
        }
        if let (true, Some(keyword)) = (value.autoincrement, self.autoincrement_keyword()) {
            out.push(' ');
            out.push_str(keyword);
        }
        if value.unique {
            out.push_str(" UNIQUE");
        }
        if value.not_null {
            out.push_str(" NOT NULL");
        }
        match &value.default {
            Some(ColumnDefault::Value(v)) => {
                out.push_str(" DEFAULT ");
                let v = self.to_storage(v.clone())?;
                self.write_value(context, out, &v)?;
            }
            Some(ColumnDefault::Raw(v)) => {
                out.push_str(" DEFAULT ");
                out.push_str(v);
            }
            None => {}
        }
        Ok(())
    }

    fn format_column_definition(&self, value: &ColumnDefinition) -> Result<String> {
        let mut out = String::with_capacity(32);
        self.write_column_definition(&mut Context::new(Fragment::CreateTable), &mut out, value)?;
        Ok(out)
    }

    /// Adapter applied to values of `category` before binding.
    fn value_adapter(&self, _category: ValueCategory) -> Adapter {
        Adapter::Identity
    }

    /// Convert a value to its storage representation, `Null` stays `Null`.
    fn to_storage(&self, value: Value) -> Result<Value> {
        self.value_adapter(value.category()).to_storage(value)
    }

    /// Convert every bound parameter to storage, keeping positions.
    fn params_to_storage(&self, params: Vec<Value>) -> Result<Vec<Value>> {
        params.into_iter().map(|v| self.to_storage(v)).collect()
    }

    /// Convert a storage value back to the declared column type.
    fn from_storage(&self, value: Value, column_type: &ColumnType) -> Result<Value> {
        restore_value(value, column_type)
    }

    /// Emit BEGIN statement.
    fn write_transaction_begin(&self, out: &mut String) {
        out.push_str("BEGIN");
    }

    /// Emit COMMIT statement.
    fn write_transaction_commit(&self, out: &mut String) {
        out.push_str("COMMIT");
    }

    /// Emit ROLLBACK statement.
    fn write_transaction_rollback(&self, out: &mut String) {
        out.push_str("ROLLBACK");
    }

    fn write_savepoint(&self, out: &mut String, name: &str) {
        out.push_str("SAVEPOINT ");
        self.write_identifier_quoted(&mut Context::default(), out, name);
    }

    fn write_release_savepoint(&self, out: &mut String, name: &str) {
        out.push_str("RELEASE SAVEPOINT ");
        self.write_identifier_quoted(&mut Context::default(), out, name);
    }

    fn write_rollback_to_savepoint(&self, out: &mut String, name: &str) {
        out.push_str("ROLLBACK TO SAVEPOINT ");
        self.write_identifier_quoted(&mut Context::default(), out, name);
    }
}

/// Dialect closest to standard SQL, `?` placeholders and configurable capabilities.
#[derive(Default, Debug, Clone)]
pub struct GenericDialect {
    capabilities: Capabilities,
}

impl GenericDialect {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }
    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}
