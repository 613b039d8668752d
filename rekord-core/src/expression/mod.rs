mod array;
mod binary_op;
mod column;
mod cte;
mod expression;
mod expression_ext;
mod function;
mod grouping;
mod join;
mod json;
mod literal;
mod op_precedence;
mod ordered;
mod set_operation;
mod subquery;
mod table;
mod unary_op;
mod wildcard;
mod window;

pub use array::*;
pub use binary_op::*;
pub use column::*;
pub use cte::*;
pub use expression::*;
pub use expression_ext::*;
pub use function::*;
pub use grouping::*;
pub use join::*;
pub use json::*;
pub use literal::*;
pub use op_precedence::*;
pub use ordered::*;
pub use set_operation::*;
pub use subquery::*;
pub use table::*;
pub use unary_op::*;
pub use wildcard::*;
pub use window::*;
