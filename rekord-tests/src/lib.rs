mod adapters;
mod gating;
mod placeholders;
mod recording;
mod statements;
mod transactions;

use crate::{
    adapters::adapters,
    gating::{gating, never_gated},
    placeholders::{idempotence, placeholders},
    statements::statements,
    transactions::{executor_run, transactions},
};
use log::LevelFilter;
use rekord::Dialect;
use std::env;

pub use placeholders::{assert_placeholders, placeholder_positions};
pub use recording::RecordingExecutor;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Checks every dialect must pass, whatever its capabilities.
pub async fn execute_tests<D: Dialect + Clone>(dialect: D) {
    placeholders(&dialect).await;
    idempotence(&dialect).await;
    gating(&dialect).await;
    never_gated(&dialect).await;
    statements(&dialect).await;
    adapters(&dialect).await;
    transactions(dialect.clone())
        .await
        .expect("Transaction scopes test did not succeed");
    executor_run(dialect)
        .await
        .expect("Executor test did not succeed");
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        let result = { $($code)+ };
        log::set_max_level(level);
        result
    }};
}
