use std::fs;

use serde::Deserialize;

use crate::error::StartupError;

#[derive(Deserialize, Debug)]
pub struct BotConfig {
    pub tokens: Tokens,
    pub database: Database,
    #[serde(default)]
    pub purge: PurgeSchedule,
}

#[derive(Deserialize, Debug)]
pub struct Tokens {
    pub discord: String,
}

#[derive(Deserialize, Debug)]
pub struct Database {
    pub postgres: String,
}

/// Wall clock time (UTC) at which the daily purge pass starts.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct PurgeSchedule {
    #[serde(default = "default_purge_hour")]
    pub hour: u32,
    #[serde(default = "default_purge_minute")]
    pub minute: u32,
}

impl Default for PurgeSchedule {
    fn default() -> Self {
        PurgeSchedule {
            hour: default_purge_hour(),
            minute: default_purge_minute(),
        }
    }
}

fn default_purge_hour() -> u32 {
    23
}

fn default_purge_minute() -> u32 {
    30
}

impl BotConfig {
    pub fn new(filename: &str) -> Result<Self, StartupError> {
        let config_file = fs::read_to_string(filename).map_err(|_| StartupError::NoConfig)?;
        let config: BotConfig = match toml::from_str(&config_file) {
            Err(_) => return Err(StartupError::InvalidConfig),
            Ok(c) => c,
        };

        if config.purge.hour > 23 || config.purge.minute > 59 {
            return Err(StartupError::InvalidConfig);
        }

        Ok(config)
    }
}
