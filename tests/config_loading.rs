//! Layered configuration loading tests.

use figment::Jail;
use rewardly::config::{AppConfig, ConfigError};

#[test]
fn defaults_apply_when_only_the_url_is_set() {
    Jail::expect_with(|jail| {
        jail.set_env("REWARDLY_DATABASE__URL", "postgres://localhost/rewardly");

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.database.url, "postgres://localhost/rewardly");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.connection_timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn toml_file_is_read_from_the_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "rewardly.toml",
            r#"
                [database]
                url = "postgres://db.internal/rewardly"
                max_connections = 4
            "#,
        )?;

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.database.url, "postgres://db.internal/rewardly");
        assert_eq!(config.database.max_connections, 4);
        Ok(())
    });
}

#[test]
fn environment_overrides_the_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "rewardly.toml",
            r#"
                [database]
                url = "postgres://db.internal/rewardly"
                max_connections = 4
            "#,
        )?;
        jail.set_env("REWARDLY_DATABASE__MAX_CONNECTIONS", "16");

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.database.max_connections, 16);
        assert_eq!(config.database.url, "postgres://db.internal/rewardly");
        Ok(())
    });
}

#[test]
fn missing_url_fails_validation() {
    Jail::expect_with(|_jail| {
        let result = AppConfig::load();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "database.url",
                ..
            })
        ));
        Ok(())
    });
}

#[test]
fn zero_pool_size_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("REWARDLY_DATABASE__URL", "postgres://localhost/rewardly");
        jail.set_env("REWARDLY_DATABASE__MAX_CONNECTIONS", "0");

        let result = AppConfig::load();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                ..
            })
        ));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("REWARDLY_DATABASE__URL", "postgres://localhost/rewardly");
        jail.set_env("REWARDLY_DATABASE__CONNECTION_TIMEOUT_SECS", "soon");

        assert!(matches!(AppConfig::load(), Err(ConfigError::Figment(_))));
        Ok(())
    });
}
