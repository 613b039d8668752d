use crate::SqliteDialect;
use rekord_core::{BackendConfig, Driver, Result};

#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteDriver {}

impl SqliteDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for SqliteDriver {
    type Dialect = SqliteDialect;

    const NAME: &'static str = "sqlite";

    fn schemes(&self) -> &'static [&'static str] {
        &["sqlite"]
    }

    fn dialect(&self, config: &BackendConfig) -> Result<SqliteDialect> {
        config.expect_scheme(self.schemes(), Self::NAME)?;
        for name in config.options.keys().filter(|v| *v != "mode") {
            log::warn!("Option `{}` is not used by the sqlite dialect", name);
        }
        Ok(match config.server_version {
            Some(version) => SqliteDialect::with_version(version),
            None => SqliteDialect::new(),
        })
    }
}
