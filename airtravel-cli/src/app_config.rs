use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Flights to open. Empty means the built-in demo manifest.
    #[serde(default)]
    pub flights: Vec<FlightConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "airtravel=info,airtravel_core=info,airtravel_cards=info".into()
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FlightConfig {
    pub number: String,
    pub aircraft: AircraftConfig,
    #[serde(default)]
    pub allocations: Vec<AllocationConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AircraftConfig {
    Airbus319 {
        registration: String,
    },
    Boeing777 {
        registration: String,
    },
    Generic {
        registration: String,
        model: String,
        rows: u32,
        seats_per_row: usize,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AllocationConfig {
    pub seat: String,
    pub passenger: String,
}

impl Config {
    /// Layered load: `config/default`, `config/{RUN_MODE}`, `config/local`, the
    /// optional `extra` file, then `AIRTRAVEL_*` environment variables
    /// (e.g. `AIRTRAVEL_LOGGING__FILTER=debug`).
    pub fn load(extra: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path));
        }

        builder
            .add_source(
                config::Environment::with_prefix("AIRTRAVEL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    #[cfg(test)]
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
