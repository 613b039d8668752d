use crate::{
    ArrayOperation, ArrayOperator, BinaryOp, BinaryOpType, BoxedExpression, Expression, JsonPath,
    Order, Ordered, Tuple, UnaryOp, UnaryOpType,
};

/// Builder methods available on every expression.
///
/// ```rust
/// use rekord_core::{Expression, ExpressionExt, GenericDialect, col, lit};
/// let condition = col("age").gt(lit(18)).and(col("active").eq(lit(true)));
/// let (sql, params) = condition.render(&GenericDialect::new()).unwrap();
/// assert_eq!(sql, r#""age" > ? AND "active" = ?"#);
/// assert_eq!(params.len(), 2);
/// ```
pub trait ExpressionExt: Expression + Sized + 'static {
    fn boxed(self) -> BoxedExpression {
        Box::new(self)
    }
    fn binary<R: Expression>(self, op: BinaryOpType, rhs: R) -> BinaryOp<Self, R> {
        BinaryOp::new(op, self, rhs)
    }
    fn eq<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Equal, rhs)
    }
    fn ne<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::NotEqual, rhs)
    }
    fn lt<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Less, rhs)
    }
    fn le<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::LessEqual, rhs)
    }
    fn gt<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Greater, rhs)
    }
    fn ge<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::GreaterEqual, rhs)
    }
    fn and<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::And, rhs)
    }
    fn or<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Or, rhs)
    }
    fn like<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Like, rhs)
    }
    fn not_like<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::NotLike, rhs)
    }
    /// `lhs IN rhs`, the right side is usually a [`Tuple`], a list [`crate::Literal`] or a subquery.
    fn in_<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::In, rhs)
    }
    fn not_in<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::NotIn, rhs)
    }
    /// `lhs IN (a, b, c)`
    fn in_list(self, values: impl IntoIterator<Item = BoxedExpression>) -> BinaryOp<Self, Tuple> {
        self.binary(BinaryOpType::In, Tuple(values.into_iter().collect()))
    }
    fn add<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Addition, rhs)
    }
    fn sub<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Subtraction, rhs)
    }
    fn mul<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Multiplication, rhs)
    }
    fn div<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        self.binary(BinaryOpType::Division, rhs)
    }
    fn not(self) -> UnaryOp<Self> {
        UnaryOp::new(UnaryOpType::Not, self)
    }
    fn neg(self) -> UnaryOp<Self> {
        UnaryOp::new(UnaryOpType::Negative, self)
    }
    fn is_null(self) -> UnaryOp<Self> {
        UnaryOp::new(UnaryOpType::IsNull, self)
    }
    fn is_not_null(self) -> UnaryOp<Self> {
        UnaryOp::new(UnaryOpType::IsNotNull, self)
    }
    fn asc(self) -> Ordered<Self> {
        Ordered {
            order: Order::ASC,
            expression: self,
        }
    }
    fn desc(self) -> Ordered<Self> {
        Ordered {
            order: Order::DESC,
            expression: self,
        }
    }
    /// JSON extraction `self -> path`.
    fn json(self, path: impl Into<String>) -> JsonPath {
        JsonPath::new(self, path)
    }
    fn contains<R: Expression + 'static>(self, rhs: R) -> ArrayOperation {
        ArrayOperation::new(ArrayOperator::Contains, self, rhs)
    }
    fn contained_by<R: Expression + 'static>(self, rhs: R) -> ArrayOperation {
        ArrayOperation::new(ArrayOperator::ContainedBy, self, rhs)
    }
    fn overlaps<R: Expression + 'static>(self, rhs: R) -> ArrayOperation {
        ArrayOperation::new(ArrayOperator::Overlaps, self, rhs)
    }
    /// `self = ANY(rhs)`
    fn any<R: Expression + 'static>(self, rhs: R) -> ArrayOperation {
        ArrayOperation::new(ArrayOperator::Any, self, rhs)
    }
}

impl<T: Expression + 'static> ExpressionExt for T {}
