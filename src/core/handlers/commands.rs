use std::sync::Arc;

use twilight_model::gateway::payload::MessageCreate;

use crate::core::BotContext;
use crate::error::EventHandlerError;
use crate::parser::Parser;

const DEFAULT_PREFIX: &str = "!";

pub async fn handle_message(message: Box<MessageCreate>, ctx: Arc<BotContext>) -> Result<(), EventHandlerError> {
    let prefix = match message.guild_id {
        Some(guild_id) => ctx.get_config(guild_id).await?.prefix.clone(),
        None => DEFAULT_PREFIX.to_string(),
    };

    let mention = format!("<@{}>", ctx.bot_user.id.0);
    let nickname_mention = format!("<@!{}>", ctx.bot_user.id.0);

    let prefix = if message.content.starts_with(&prefix) {
        prefix
    } else if message.content.starts_with(&mention) {
        mention
    } else if message.content.starts_with(&nickname_mention) {
        nickname_mention
    } else {
        return Ok(());
    };

    Parser::figure_it_out(&prefix, message, ctx).await
}
