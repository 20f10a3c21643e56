use std::sync::Arc;

use twilight_model::gateway::payload::MessageCreate;
use twilight_model::id::{ChannelId, GuildId};

use crate::cogbot_error;
use crate::core::{BotContext, InviteModConfig};
use crate::error::CommandError;
use crate::utils::{self, matchers};

/// Scans a guild message for invite links to servers outside the whitelist
/// and removes the message when one is found. Returns whether it was removed.
pub async fn handle_message(message: &MessageCreate, ctx: &Arc<BotContext>) -> bool {
    let guild_id = match message.guild_id {
        Some(guild_id) => guild_id,
        None => return false,
    };

    let codes = matchers::get_invite_codes(&message.content);
    if codes.is_empty() {
        return false;
    }

    let config = match ctx.get_config(guild_id).await {
        Ok(config) => config,
        Err(e) => {
            cogbot_error!("Failed to load the config for guild {}: {}", guild_id, e);
            return false;
        }
    };

    for code in codes {
        match check_code(ctx, message, guild_id, &config.invites, &code).await {
            // one removal is enough, the message is gone
            Ok(true) => return true,
            Ok(false) => {}
            Err(e) => cogbot_error!("Failed to act on invite code {} in guild {}: {}", code, guild_id, e),
        }
    }

    false
}

async fn check_code(
    ctx: &Arc<BotContext>,
    message: &MessageCreate,
    guild_id: GuildId,
    config: &InviteModConfig,
    code: &str,
) -> Result<bool, CommandError> {
    let invite = match ctx.http.invite(code).await? {
        Some(invite) => invite,
        // expired or revoked, nothing to moderate
        None => return Ok(false),
    };

    let target = match invite.guild {
        Some(guild) => guild,
        None => return Ok(false),
    };

    if config.whitelist.contains(&target.id.0) {
        return Ok(false);
    }

    ctx.http.delete_message(message.channel_id, message.id).await?;

    if config.log_channel != 0 {
        let log_channel = ChannelId(config.log_channel);
        if ctx.cache.guild_has_channel(guild_id, log_channel) {
            let report = format!(
                "`[{}]` :space_invader: {}#{} (`{}`) posted an invite link to a server ({}, `{}`) that is not whitelisted and their message was removed.",
                utils::snowflake_timestamp(message.id.0).format("%H:%M:%S"),
                message.author.name,
                message.author.discriminator,
                message.author.id,
                target.name,
                code
            );
            ctx.send_message(log_channel, report).await?;
        }
    }

    Ok(true)
}
