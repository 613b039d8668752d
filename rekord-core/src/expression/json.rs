use crate::{
    BoxedExpression, ColumnType, Context, Dialect, Expression, Result, impl_atomic_precedence,
};

/// JSON extraction, `target -> path` or `target ->> path` when `as_text`.
///
/// The path (`$.a.b[0]` or a plain key) is bound as a parameter.
#[derive(Debug)]
pub struct JsonPath {
    pub target: BoxedExpression,
    pub path: String,
    pub as_text: bool,
}

impl JsonPath {
    pub fn new(target: impl Expression + 'static, path: impl Into<String>) -> Self {
        Self {
            target: Box::new(target),
            path: path.into(),
            as_text: false,
        }
    }
    /// Extract as text instead of JSON.
    pub fn text(mut self) -> Self {
        self.as_text = true;
        self
    }
    /// Path split into keys and indexes: `$.a.b[0]` -> `["a", "b", "0"]`.
    pub fn segments(&self) -> Vec<&str> {
        let Some(path) = self.path.strip_prefix('$') else {
            return vec![self.path.as_str()];
        };
        path.split(['.', '[', ']'])
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_matches('"'))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsonTableColumnKind {
    /// `TYPE PATH 'p'`
    Path { column_type: ColumnType, path: String },
    /// `FOR ORDINALITY`
    Ordinality,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonTableColumn {
    pub name: String,
    pub kind: JsonTableColumnKind,
}

impl JsonTableColumn {
    pub fn path(name: impl Into<String>, column_type: ColumnType, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: JsonTableColumnKind::Path {
                column_type,
                path: path.into(),
            },
        }
    }
    pub fn ordinality(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: JsonTableColumnKind::Ordinality,
        }
    }
}

/// `JSON_TABLE(source, 'path' COLUMNS (...)) AS "alias"`
///
/// Paths are part of the statement structure and are written as string literals.
#[derive(Debug)]
pub struct JsonTable {
    pub source: BoxedExpression,
    pub path: String,
    pub columns: Vec<JsonTableColumn>,
    pub alias: Option<String>,
}

impl JsonTable {
    pub fn new(source: impl Expression + 'static, path: impl Into<String>) -> Self {
        Self {
            source: Box::new(source),
            path: path.into(),
            columns: Vec::new(),
            alias: None,
        }
    }
    pub fn column(mut self, column: JsonTableColumn) -> Self {
        self.columns.push(column);
        self
    }
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl_atomic_precedence!(JsonTable);

impl crate::OpPrecedence for JsonPath {
    fn precedence(&self, dialect: &dyn Dialect) -> i32 {
        dialect.json_path_precedence()
    }
}

impl Expression for JsonPath {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_json_path(context, out, self)
    }
}

impl Expression for JsonTable {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_json_table(context, out, self)
    }
}
