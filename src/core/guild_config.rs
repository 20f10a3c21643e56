use serde::{Deserialize, Serialize};

use crate::commands::screen::ScreenElement;

/// Everything the bot remembers about a guild, stored wholesale as one json
/// blob and rewritten on every mutation.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GuildConfig {
    pub prefix: String,
    #[serde(default)]
    pub screen: Vec<ScreenElement>,
    #[serde(default)]
    pub invites: InviteModConfig,
    #[serde(default)]
    pub purge: PurgeConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct InviteModConfig {
    /// Guild ids whose invites are tolerated.
    pub whitelist: Vec<u64>,
    /// Channel to report removals in, 0 means disabled.
    pub log_channel: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PurgeConfig {
    /// Channels subject to the daily purge.
    pub channels: Vec<u64>,
}

impl Default for GuildConfig {
    fn default() -> Self {
        GuildConfig {
            prefix: "!".to_string(),
            screen: vec![],
            invites: InviteModConfig::default(),
            purge: PurgeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips() {
        let config = GuildConfig::default();
        let value = serde_json::to_value(&config).unwrap();
        let back: GuildConfig = serde_json::from_value(value).unwrap();

        assert_eq!(back.prefix, "!");
        assert!(back.screen.is_empty());
        assert!(back.invites.whitelist.is_empty());
        assert_eq!(back.invites.log_channel, 0);
        assert!(back.purge.channels.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: GuildConfig = serde_json::from_str(r#"{"prefix": "?"}"#).unwrap();

        assert_eq!(config.prefix, "?");
        assert!(config.screen.is_empty());
        assert!(config.purge.channels.is_empty());
    }
}
