#[cfg(test)]
mod tests {
    use rekord_core::{BackendConfig, DialectError, ServerVersion};

    #[test]
    fn server_versions() {
        assert_eq!(
            "16".parse::<ServerVersion>().unwrap(),
            ServerVersion::new(16, 0, 0)
        );
        assert_eq!(
            "8.0".parse::<ServerVersion>().unwrap(),
            ServerVersion::new(8, 0, 0)
        );
        assert_eq!(
            "8.0.36-log".parse::<ServerVersion>().unwrap(),
            ServerVersion::new(8, 0, 36)
        );
        assert_eq!(
            " 15.4 (Debian 15.4-1.pgdg120+1)".parse::<ServerVersion>().unwrap(),
            ServerVersion::new(15, 4, 0)
        );
        assert!("".parse::<ServerVersion>().is_err());
        assert!("latest".parse::<ServerVersion>().is_err());
        assert_eq!(ServerVersion::new(3, 35, 0).to_string(), "3.35.0");

        let version = ServerVersion::new(9, 5, 2);
        assert!(version.at_least(9, 5, 0));
        assert!(version.at_least(9, 5, 2));
        assert!(!version.at_least(9, 6, 0));
        assert!(!version.at_least(10, 0, 0));
        assert!(ServerVersion::new(10, 0, 0) > ServerVersion::new(9, 99, 99));
    }

    #[test]
    fn backend_urls() {
        let config =
            BackendConfig::from_url("postgres://app@db.local:5433/shop?server_version=15.4&search_path=app")
                .expect("Could not parse the url");
        assert_eq!(config.scheme, "postgres");
        assert_eq!(config.host.as_deref(), Some("db.local"));
        assert_eq!(config.port, Some(5433));
        assert_eq!(config.database.as_deref(), Some("shop"));
        assert_eq!(config.server_version, Some(ServerVersion::new(15, 4, 0)));
        assert_eq!(
            config.options.get("search_path").map(String::as_str),
            Some("app")
        );
        assert!(!config.options.contains_key("server_version"));

        let config = BackendConfig::from_url("sqlite://data/my%20db.sqlite")
            .expect("Could not parse the url");
        assert_eq!(config.host.as_deref(), Some("data"));
        assert_eq!(config.database.as_deref(), Some("my db.sqlite"));
        assert_eq!(config.server_version, None);

        let config = BackendConfig::from_url("mysql://localhost").expect("Could not parse the url");
        assert_eq!(config.database, None);
        assert!(config.options.is_empty());

        let error = BackendConfig::from_url("no scheme here").expect_err("Not a url");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidConfiguration(..))
        ));
        let error = BackendConfig::from_url("postgres://localhost/db?server_version=v")
            .expect_err("Unreadable version");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidConfiguration(..))
        ));
    }

    #[test]
    fn builder() {
        let config = BackendConfig::new("postgres")
            .server_version(ServerVersion::new(12, 0, 0))
            .option("sslmode", "require");
        assert_eq!(config.scheme, "postgres");
        assert_eq!(config.server_version, Some(ServerVersion::new(12, 0, 0)));
        assert_eq!(config.options.len(), 1);
        assert!(config.expect_scheme(&["postgres", "postgresql"], "postgres").is_ok());
        let error = config
            .expect_scheme(&["mysql"], "mysql")
            .expect_err("Wrong scheme");
        assert!(matches!(
            DialectError::of(&error),
            Some(DialectError::InvalidConfiguration(..))
        ));
        assert!(error.to_string().contains("`mysql://`"));
    }
}
