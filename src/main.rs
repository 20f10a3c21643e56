use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Runtime;
use twilight_http::request::channel::message::allowed_mentions::AllowedMentionsBuilder;
use twilight_http::Client as HttpClient;

use git_version::git_version;

use crate::core::cogbot::CogBot;
use crate::core::{logging, BotConfig};
use crate::error::StartupError;

mod commands;
mod core;
mod database;
mod error;
mod parser;
mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_VERSION: &str = git_version!(fallback = "unknown");

fn main() -> Result<(), StartupError> {
    let runtime = Runtime::new()?;

    runtime.block_on(async move { real_main().await })?;

    runtime.shutdown_timeout(Duration::from_secs(90));
    Ok(())
}

async fn real_main() -> Result<(), StartupError> {
    if let Err(e) = logging::initialize() {
        eprintln!("Failed to initialize the logging system: {}", e);
        return Err(e);
    }

    info!("CogBot v{} ({}) starting!", VERSION, GIT_VERSION);

    let config = BotConfig::new("config.toml")?;
    debug!("Loaded config file");

    let mut builder = HttpClient::builder();
    builder = builder
        .token(&config.tokens.discord)
        .default_allowed_mentions(AllowedMentionsBuilder::new().build_solo());

    let http = builder.build()?;

    debug!("Built the http client");

    // Validate the token and figure out who we are
    let user = http.current_user().await?;
    info!(
        "Token validated, connecting to discord as {}#{}",
        user.name, user.discriminator
    );

    let postgres_pool = sqlx::PgPool::connect(&config.database.postgres).await?;
    info!("Connected to postgres!");

    info!("Handling database migrations...");
    sqlx::migrate!("./migrations")
        .run(&postgres_pool)
        .await
        .map_err(|e| StartupError::DatabaseMigration(e.to_string()))?;
    info!("Finished migrations!");

    {
        info!("Populating command list");
        let count = commands::get_root().command_list.len();
        info!("Command list populated, {} commands registered", count);
    }

    // end of the critical failure zone, everything from here on out should be properly wrapped
    // and handled

    if let Err(e) = CogBot::run(config, http, user, postgres_pool).await {
        cogbot_error!("Failed to start the bot: {}", e);
    }

    Ok(())
}
