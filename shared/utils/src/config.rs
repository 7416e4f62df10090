use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::NeoResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub linking: LinkingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub neo_csv_path: String,
    pub cad_json_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkingConfig {
    pub duplicate_policy: DuplicatePolicy,
}

/// What the linker does when two objects share a designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the load.
    #[default]
    Reject,
    /// Later objects shadow earlier ones in the designation index.
    LastWins,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> NeoResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            .add_source(File::with_name("config/local").required(false))
            // e.g. NEO__DATA__NEO_CSV_PATH=/data/neos.csv
            .add_source(Environment::with_prefix("NEO").separator("__"));

        Ok(config.build()?.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                neo_csv_path: "data/neos.csv".to_string(),
                cad_json_path: "data/cad.json".to_string(),
            },
            linking: LinkingConfig {
                duplicate_policy: DuplicatePolicy::Reject,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
                file_path: None,
            },
        }
    }
}
