use crate::{BoxedExpression, Context, Dialect, Expression, Function, Result, impl_atomic_precedence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameUnits {
    Rows,
    Range,
    Groups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBound {
    UnboundedPreceding,
    Preceding(u64),
    CurrentRow,
    Following(u64),
    UnboundedFollowing,
}

/// `ROWS BETWEEN start AND end`, or `ROWS start` when `end` is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    pub units: FrameUnits,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
}

/// `PARTITION BY .. ORDER BY .. frame`
#[derive(Debug, Default)]
pub struct WindowSpec {
    pub partition_by: Vec<BoxedExpression>,
    pub order_by: Vec<BoxedExpression>,
    pub frame: Option<WindowFrame>,
}

impl WindowSpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn partition_by(mut self, expression: impl Expression + 'static) -> Self {
        self.partition_by.push(Box::new(expression));
        self
    }
    pub fn order_by(mut self, expression: impl Expression + 'static) -> Self {
        self.order_by.push(Box::new(expression));
        self
    }
    pub fn frame(mut self, frame: WindowFrame) -> Self {
        self.frame = Some(frame);
        self
    }
}

#[derive(Debug)]
pub enum Window {
    /// Reference to a window declared in the `WINDOW` clause.
    Named(String),
    Spec(WindowSpec),
}

/// `fn(args) [FILTER (WHERE ..)] OVER ("w" | (...)) [AS "alias"]`
#[derive(Debug)]
pub struct WindowFunction {
    pub function: Function,
    pub filter: Option<BoxedExpression>,
    pub window: Window,
}

impl WindowFunction {
    pub fn new(function: Function, window: WindowSpec) -> Self {
        Self {
            function,
            filter: None,
            window: Window::Spec(window),
        }
    }
    pub fn named(function: Function, window: impl Into<String>) -> Self {
        Self {
            function,
            filter: None,
            window: Window::Named(window.into()),
        }
    }
    pub fn filter(mut self, condition: impl Expression + 'static) -> Self {
        self.filter = Some(Box::new(condition));
        self
    }
}

impl_atomic_precedence!(WindowFunction);

impl Expression for WindowFunction {
    fn write_query(
        &self,
        dialect: &dyn Dialect,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        dialect.write_window_function(context, out, self)
    }
}
