use crate::{DialectError, ErrorContext, Result, ServerVersion};
use std::collections::BTreeMap;
use url::Url;
use urlencoding::decode;

/// Backend selection parsed from a connection url.
///
/// `postgres://user@localhost:5432/shop?server_version=15.4&search_path=app` yields scheme
/// `postgres`, database `shop`, server version `15.4.0` and the remaining query pairs as options.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub scheme: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub server_version: Option<ServerVersion>,
    pub options: BTreeMap<String, String>,
}

impl BackendConfig {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            ..Default::default()
        }
    }

    pub fn server_version(mut self, version: ServerVersion) -> Self {
        self.server_version = Some(version);
        self
    }

    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let context = || format!("While parsing the backend url `{}`", url);
        let mut parsed = Url::parse(url)
            .map_err(|e| DialectError::InvalidConfiguration(e.to_string()))
            .with_context(context)?;
        let scheme = parsed.scheme().to_string();
        let host = parsed.host_str().filter(|v| !v.is_empty()).map(String::from);
        let port = parsed.port();
        let database = {
            let path = parsed.path().trim_start_matches('/');
            if path.is_empty() {
                None
            } else {
                Some(
                    decode(path)
                        .map_err(|e| DialectError::InvalidConfiguration(e.to_string()))
                        .with_context(context)?
                        .into_owned(),
                )
            }
        };
        let mut options: BTreeMap<String, String> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let server_version = options
            .remove("server_version")
            .map(|v| v.parse::<ServerVersion>())
            .transpose()
            .with_context(context)?;
        parsed.set_query(None);
        let config = Self {
            scheme,
            host,
            port,
            database,
            server_version,
            options,
        };
        log::debug!("Backend configuration from `{}`: {:?}", parsed, config);
        Ok(config)
    }

    /// Fail unless the scheme is one of `schemes`.
    pub fn expect_scheme(&self, schemes: &[&str], backend: &str) -> Result<()> {
        if schemes.contains(&self.scheme.as_str()) {
            return Ok(());
        }
        let error = DialectError::InvalidConfiguration(format!(
            "{} url must start with one of {}, found `{}://`",
            backend,
            schemes
                .iter()
                .map(|v| format!("`{}://`", v))
                .collect::<Vec<_>>()
                .join(", "),
            self.scheme,
        ));
        log::error!("{}", error);
        Err(error.into())
    }
}
