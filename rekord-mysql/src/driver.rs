use crate::MySqlDialect;
use rekord_core::{BackendConfig, Driver, Result};

#[derive(Default, Debug, Clone, Copy)]
pub struct MySqlDriver {}

impl MySqlDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for MySqlDriver {
    type Dialect = MySqlDialect;

    const NAME: &'static str = "mysql";

    fn schemes(&self) -> &'static [&'static str] {
        &["mysql"]
    }

    fn dialect(&self, config: &BackendConfig) -> Result<MySqlDialect> {
        config.expect_scheme(self.schemes(), Self::NAME)?;
        for name in config.options.keys() {
            log::warn!("Option `{}` is not used by the mysql dialect", name);
        }
        Ok(match config.server_version {
            Some(version) => MySqlDialect::with_version(version),
            None => MySqlDialect::new(),
        })
    }
}
