use crate::{Context, Dialect, Expression, Result, TableExpression, impl_atomic_precedence};
use std::collections::BTreeMap;

/// `TRUNCATE TABLE "name" [RESTART IDENTITY] [CASCADE] [dialect options]`
///
/// `options` carries dialect specific switches, dialects that do not know an option ignore it
/// with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Truncate {
    pub table: TableExpression,
    pub restart_identity: bool,
    pub cascade: bool,
    pub options: BTreeMap<String, String>,
}

impl Truncate {
    pub fn table(table: impl Into<TableExpression>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }
    pub fn restart_identity(mut self) -> Self {
        self.restart_identity = true;
        self
    }
    pub fn cascade(mut self) -> Self {
        self.cascade = true;
        self
    }
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

impl_atomic_precedence!(Truncate);

impl Expression for Truncate {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_truncate(context, out, self)
    }
    fn modifies_data(&self) -> bool {
        true
    }
}
