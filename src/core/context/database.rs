use std::sync::Arc;

use twilight_model::id::{ChannelId, GuildId};

use crate::core::BotContext;
use crate::core::GuildConfig;
use crate::database;
use crate::error::DatabaseError;

impl BotContext {
    /// Read-through cached guild config, creating and persisting a default
    /// one the first time a guild is seen.
    pub async fn get_config(&self, guild_id: GuildId) -> Result<Arc<GuildConfig>, DatabaseError> {
        match self.configs.get(&guild_id) {
            Some(config) => Ok(config.value().clone()),
            None => {
                let config = match database::get_guild_config(&self.pool, guild_id.0 as i64).await? {
                    Some(value) => serde_json::from_value(value).map_err(DatabaseError::Deserializing)?,
                    None => {
                        let config = GuildConfig::default();
                        let value = serde_json::to_value(&config).map_err(DatabaseError::Serializing)?;
                        database::create_guild_config(&self.pool, guild_id.0 as i64, value).await?;
                        config
                    }
                };
                let config = Arc::new(config);
                self.configs.insert(guild_id, config.clone());
                Ok(config)
            }
        }
    }

    /// Persists the full config and refreshes the cache. Last write wins when
    /// two moderators race.
    pub async fn set_config(&self, guild_id: GuildId, config: GuildConfig) -> Result<(), DatabaseError> {
        let value = serde_json::to_value(&config).map_err(DatabaseError::Serializing)?;
        database::set_guild_config(&self.pool, guild_id.0 as i64, value).await?;
        self.configs.insert(guild_id, Arc::new(config));
        Ok(())
    }

    /// Every channel any guild has scheduled for the daily purge.
    pub async fn get_all_purge_channels(&self) -> Result<Vec<ChannelId>, DatabaseError> {
        let rows = database::get_all_guild_configs(&self.pool).await?;
        let mut channels = Vec::new();
        for (_, value) in rows {
            let config: GuildConfig = serde_json::from_value(value).map_err(DatabaseError::Deserializing)?;
            channels.extend(config.purge.channels.into_iter().map(ChannelId));
        }
        Ok(channels)
    }
}
