mod dialect;
mod driver;

pub use dialect::*;
pub use driver::*;
