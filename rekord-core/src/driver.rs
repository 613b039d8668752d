use crate::{BackendConfig, Dialect, Result};

/// Entry point of a backend crate: recognizes its urls and builds the matching dialect.
pub trait Driver: Default {
    type Dialect: Dialect;

    /// Backend name used in logs and errors.
    const NAME: &'static str;

    /// Url schemes accepted by this backend.
    fn schemes(&self) -> &'static [&'static str];

    /// Dialect for the server version the configuration names, the newest supported otherwise.
    fn dialect(&self, config: &BackendConfig) -> Result<Self::Dialect>;

    fn dialect_from_url(&self, url: &str) -> Result<Self::Dialect> {
        let config = BackendConfig::from_url(url)?;
        config.expect_scheme(self.schemes(), Self::NAME)?;
        self.dialect(&config)
    }
}
