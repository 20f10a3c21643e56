use std::sync::Arc;

use dashmap::DashMap;
use sqlx::PgPool;
use tokio::sync::oneshot;
use twilight_gateway::Cluster;
use twilight_http::Client as HttpClient;
use twilight_model::channel::embed::Embed;
use twilight_model::channel::Message;
use twilight_model::id::{ChannelId, GuildId, MessageId, UserId};
use twilight_model::user::{CurrentUser, User};

use crate::core::cache::Cache;
use crate::core::GuildConfig;
use crate::error::CommandError;
use crate::parser::Parser;

mod database;
mod replies;

pub struct BotContext {
    pub cluster: Cluster,
    pub http: HttpClient,
    pub cache: Cache,
    pub bot_user: CurrentUser,
    configs: DashMap<GuildId, Arc<GuildConfig>>,
    replies: DashMap<(ChannelId, UserId), oneshot::Sender<String>>,
    pool: PgPool,
}

impl BotContext {
    pub fn new(cluster: Cluster, http: HttpClient, bot_user: CurrentUser, pool: PgPool) -> Self {
        BotContext {
            cluster,
            http,
            cache: Cache::new(),
            bot_user,
            configs: DashMap::new(),
            replies: DashMap::new(),
            pool,
        }
    }

    pub async fn send_message(
        &self,
        channel_id: ChannelId,
        content: impl Into<String>,
    ) -> Result<Message, CommandError> {
        Ok(self.http.create_message(channel_id).content(content)?.await?)
    }

    pub async fn send_embed(&self, channel_id: ChannelId, embed: Embed) -> Result<Message, CommandError> {
        Ok(self.http.create_message(channel_id).embed(embed)?.await?)
    }
}

/// The fields of the triggering message a command is allowed to look at.
pub struct CommandMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author: User,
    pub content: String,
}

pub struct CommandContext {
    pub bot_context: Arc<BotContext>,
    pub message: CommandMessage,
    guild_id: Option<GuildId>,
    pub parser: Parser,
}

impl CommandContext {
    pub fn new(
        bot_context: Arc<BotContext>,
        message: CommandMessage,
        guild_id: Option<GuildId>,
        parser: Parser,
    ) -> Self {
        CommandContext {
            bot_context,
            message,
            guild_id,
            parser,
        }
    }

    pub fn guild_id(&self) -> Result<GuildId, CommandError> {
        self.guild_id.ok_or(CommandError::NoDM)
    }

    pub async fn reply(&self, content: impl Into<String>) -> Result<Message, CommandError> {
        self.bot_context.send_message(self.message.channel_id, content).await
    }

    pub async fn reply_embed(&self, embed: Embed) -> Result<Message, CommandError> {
        self.bot_context.send_embed(self.message.channel_id, embed).await
    }

    pub async fn get_config(&self) -> Result<Arc<GuildConfig>, CommandError> {
        Ok(self.bot_context.get_config(self.guild_id()?).await?)
    }

    pub async fn set_config(&self, config: GuildConfig) -> Result<(), CommandError> {
        Ok(self.bot_context.set_config(self.guild_id()?, config).await?)
    }

    /// Sends ``prompt`` and suspends until the invoker's next message in this
    /// channel. Suspends forever if they never answer.
    pub async fn await_reply(&self, prompt: impl Into<String>) -> Result<String, CommandError> {
        self.reply(prompt).await?;
        self.next_reply().await
    }

    /// Suspends for the invoker's next message without prompting first.
    pub async fn next_reply(&self) -> Result<String, CommandError> {
        self.bot_context
            .await_reply(self.message.channel_id, self.message.author.id)
            .await
    }

    /// Prompt that only passes on a literal ``yes``.
    pub async fn confirm(&self, prompt: impl Into<String>) -> Result<bool, CommandError> {
        let answer = self.await_reply(prompt).await?;
        Ok(answer.trim().to_lowercase() == "yes")
    }
}
