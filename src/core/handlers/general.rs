use log::info;
use twilight_model::gateway::event::Event;

use crate::error::EventHandlerError;
use crate::{cogbot_info, cogbot_warn};

pub fn handle_event(shard_id: u64, event: &Event) -> Result<(), EventHandlerError> {
    match event {
        Event::ShardConnecting(_) => info!("Shard {} is connecting", shard_id),
        Event::ShardConnected(_) => cogbot_info!("Shard {} has connected", shard_id),
        Event::ShardDisconnected(_) => cogbot_info!("Shard {} has disconnected", shard_id),
        Event::ShardReconnecting(_) => cogbot_info!("Shard {} is attempting to reconnect", shard_id),
        Event::ShardResuming(_) => cogbot_info!("Shard {} is resuming", shard_id),
        Event::Ready(ready) => cogbot_info!(
            "Connected to the gateway on shard {}, {} guilds pending",
            shard_id,
            ready.guilds.len()
        ),
        Event::Resumed => info!("Shard {} resumed its session", shard_id),
        Event::GuildCreate(guild) => info!("Now serving guild {} ({})", guild.0.name, guild.0.id),
        Event::GuildDelete(guild) => info!("Lost access to guild {}", guild.id),
        Event::GatewayInvalidateSession(reconnectable) => {
            if *reconnectable {
                cogbot_warn!("The gateway invalidated our session, but it can be reconnected!");
            } else {
                return Err(EventHandlerError::InvalidSession(shard_id));
            }
        }
        Event::GatewayReconnect => info!("Shard {} reconnected to the gateway", shard_id),
        _ => (),
    }
    Ok(())
}
