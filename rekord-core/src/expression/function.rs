use crate::{BoxedExpression, Context, Dialect, Expression, Result, impl_atomic_precedence};

/// Function call `NAME(arg1, arg2)`, the name is written verbatim.
#[derive(Debug)]
pub struct Function {
    pub name: String,
    pub args: Vec<BoxedExpression>,
    pub distinct: bool,
    pub alias: Option<String>,
}

pub fn func(name: impl Into<String>, args: impl IntoIterator<Item = BoxedExpression>) -> Function {
    Function::new(name, args)
}

impl Function {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = BoxedExpression>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
            distinct: false,
            alias: None,
        }
    }
    /// `NAME(DISTINCT args)`
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl_atomic_precedence!(Function);

impl Expression for Function {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_function(context, out, self)
    }
}
