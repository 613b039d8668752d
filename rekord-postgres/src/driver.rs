use crate::PostgresDialect;
use rekord_core::{BackendConfig, Driver, Result};

#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresDriver {}

impl PostgresDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for PostgresDriver {
    type Dialect = PostgresDialect;

    const NAME: &'static str = "postgres";

    fn schemes(&self) -> &'static [&'static str] {
        &["postgres", "postgresql"]
    }

    fn dialect(&self, config: &BackendConfig) -> Result<PostgresDialect> {
        config.expect_scheme(self.schemes(), Self::NAME)?;
        for name in config.options.keys() {
            log::warn!("Option `{}` is not used by the postgres dialect", name);
        }
        Ok(match config.server_version {
            Some(version) => PostgresDialect::with_version(version),
            None => PostgresDialect::new(),
        })
    }
}
