use std::sync::Arc;

use futures_util::StreamExt;
use sqlx::PgPool;
use twilight_gateway::cluster::ShardScheme;
use twilight_gateway::Cluster;
use twilight_http::Client as HttpClient;
use twilight_model::gateway::Intents;
use twilight_model::user::CurrentUser;

use crate::core::{handlers, purger, BotConfig, BotContext};
use crate::error::StartupError;
use crate::{cogbot_error, cogbot_important};

pub struct CogBot;

impl CogBot {
    pub async fn run(
        config: BotConfig,
        http: HttpClient,
        bot_user: CurrentUser,
        pool: PgPool,
    ) -> Result<(), StartupError> {
        let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::GUILD_INVITES;

        let cluster = Cluster::builder(&config.tokens.discord, intents)
            .shard_scheme(ShardScheme::Auto)
            .build()
            .await?;

        let context = Arc::new(BotContext::new(cluster, http, bot_user, pool));

        purger::start(context.clone(), config.purge);

        cogbot_important!("The cluster is going online!");
        context.cluster.up().await;

        let mut events = context.cluster.events();
        while let Some((shard_id, event)) = events.next().await {
            let context = context.clone();
            // commands can suspend waiting for a reply, so handling an event
            // must never block the stream
            tokio::spawn(async move {
                if let Err(e) = handlers::handle_event(shard_id, event, context).await {
                    cogbot_error!("Error while handling an event on shard {}: {}", shard_id, e);
                }
            });
        }

        Ok(())
    }
}
