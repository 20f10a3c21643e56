use std::sync::Arc;

use twilight_model::gateway::event::Event;

use crate::core::BotContext;
use crate::error::EventHandlerError;

mod commands;
mod general;
mod invites;

pub async fn handle_event(shard_id: u64, event: Event, ctx: Arc<BotContext>) -> Result<(), EventHandlerError> {
    ctx.cache.update(&event);
    general::handle_event(shard_id, &event)?;

    if let Event::MessageCreate(message) = event {
        if message.author.bot {
            return Ok(());
        }

        // every non-bot message goes through the invite scan, prompt answers included
        let removed = invites::handle_message(&message, &ctx).await;

        // a suspended prompt gets the content even when the message was removed
        if ctx.route_reply(message.channel_id, message.author.id, message.content.clone()) {
            return Ok(());
        }

        if removed {
            // the message no longer exists
            return Ok(());
        }

        commands::handle_message(message, ctx).await?;
    }

    Ok(())
}
