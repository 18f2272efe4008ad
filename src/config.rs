use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path of the JSON file backing the persistence slot.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// URL of the static seed data set imported when storage is empty.
    #[serde(default = "default_seed_url")]
    pub seed_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_storage_path() -> String {
    "data/invoices.json".to_string()
}

fn default_seed_url() -> String {
    "http://localhost:4200/data/invoices.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    10
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
