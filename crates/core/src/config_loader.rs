use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads application configuration by merging struct defaults, a TOML
    /// file, environment variables, and an optional JSON overlay. Missing
    /// files fall back to the defaults, so a bare checkout still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_from(path: &str) -> Result<AppConfig> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("APP_").split("__"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from("does-not-exist.toml").unwrap();
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.radar.top_n, 20);
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "Config.toml",
                r#"
                [server]
                host = "127.0.0.1"
                port = 9090

                [radar]
                top_n = 5
                "#,
            )?;
            let config = ConfigLoader::load_from("Config.toml").unwrap();
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.radar.top_n, 5);
            // Untouched sections keep their defaults.
            assert_eq!(config.radar.refresh_interval_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn env_vars_override_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("Config.toml", "[server]\nport = 9090\n")?;
            jail.set_env("APP_SERVER__PORT", "7070");
            jail.set_env("APP_RADAR__BUILDER_ADDRESS", "0xabc");
            let config = ConfigLoader::load_from("Config.toml").unwrap();
            assert_eq!(config.server.port, 7070);
            assert_eq!(config.radar.builder_address, "0xabc");
            Ok(())
        });
    }
}
