use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    /// Directory holding the collection files.
    pub data_dir: String,
    /// Directory the demo binary writes its rolling log into.
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}
