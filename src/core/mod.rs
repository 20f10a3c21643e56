pub use bot_config::{BotConfig, PurgeSchedule};
pub use context::{BotContext, CommandContext, CommandMessage};
pub use guild_config::{GuildConfig, InviteModConfig, PurgeConfig};

mod bot_config;
pub mod cache;
pub mod cogbot;
mod context;
mod guild_config;
mod handlers;
pub mod logging;
pub mod purger;
