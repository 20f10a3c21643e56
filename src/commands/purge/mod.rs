use twilight_model::id::ChannelId;

use crate::cogbot_info;
use crate::core::{purger, CommandContext};
use crate::error::CommandResult;

/// Purges the invoking channel right away, after a confirmation.
pub async fn purge(ctx: CommandContext) -> CommandResult {
    let channel_id = ctx.message.channel_id;
    let prompt = format!(
        "Are you sure you want to purge <#{}> right now? Type `yes` to confirm.",
        channel_id
    );

    if ctx.confirm(prompt).await? {
        let removed = purger::clean_channel(&ctx.bot_context, channel_id).await?;
        cogbot_info!("Purged {} messages from channel {} on demand", removed, channel_id);
    } else {
        ctx.reply("Aborting purge.").await?;
    }
    Ok(())
}

/// Runs the daily purge routine for this guild without waiting for the timer.
pub async fn purgedailynow(ctx: CommandContext) -> CommandResult {
    if ctx
        .confirm("Commence daily purge for this server? Type `yes` to confirm.")
        .await?
    {
        let config = ctx.get_config().await?;
        let channels = config.purge.channels.iter().map(|id| ChannelId(*id)).collect();
        purger::purge_channels(&ctx.bot_context, channels).await;
    } else {
        ctx.reply("Aborting daily purge.").await?;
    }
    Ok(())
}

pub async fn purgeadd(ctx: CommandContext) -> CommandResult {
    let channel_id = ctx.message.channel_id;
    let mut config = (*ctx.get_config().await?).clone();

    if config.purge.channels.contains(&channel_id.0) {
        ctx.reply(format!("I am already purging <#{}> daily.", channel_id)).await?;
    } else {
        config.purge.channels.push(channel_id.0);
        ctx.set_config(config).await?;
        ctx.reply(format!("I will now purge <#{}> daily.", channel_id)).await?;
    }
    Ok(())
}

pub async fn purgeremove(ctx: CommandContext) -> CommandResult {
    let channel_id = ctx.message.channel_id;
    let mut config = (*ctx.get_config().await?).clone();

    match config.purge.channels.iter().position(|id| *id == channel_id.0) {
        Some(position) => {
            config.purge.channels.remove(position);
            ctx.set_config(config).await?;
            ctx.reply(format!("I am no longer purging <#{}> daily.", channel_id)).await?;
        }
        None => {
            ctx.reply(format!("I am not purging <#{}> daily.", channel_id)).await?;
        }
    }
    Ok(())
}

pub async fn purging(ctx: CommandContext) -> CommandResult {
    let channel_id = ctx.message.channel_id;
    let config = ctx.get_config().await?;

    if config.purge.channels.contains(&channel_id.0) {
        ctx.reply(format!("I purge <#{}> daily.", channel_id)).await?;
    } else {
        ctx.reply(format!("I don't purge <#{}> daily.", channel_id)).await?;
    }
    Ok(())
}

/// Lists the purged channels, dropping entries for channels that are gone.
pub async fn purgelist(ctx: CommandContext) -> CommandResult {
    let mut config = (*ctx.get_config().await?).clone();

    let before = config.purge.channels.len();
    config
        .purge
        .channels
        .retain(|id| ctx.bot_context.cache.channel_exists(ChannelId(*id)));
    let channels = config.purge.channels.clone();
    if channels.len() != before {
        ctx.set_config(config).await?;
    }

    if channels.is_empty() {
        ctx.reply("I don't purge any channels in this server.").await?;
    } else {
        let mentions = channels
            .iter()
            .map(|id| format!("<#{}>", id))
            .collect::<Vec<String>>()
            .join("\n");
        ctx.reply(format!("I purge the following channels:\n{}", mentions)).await?;
    }
    Ok(())
}
