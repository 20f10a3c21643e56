use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use twilight_model::channel::GuildChannel;
use twilight_model::gateway::event::Event;
use twilight_model::guild::{Guild, PartialGuild, Permissions, Role};
use twilight_model::id::{ChannelId, GuildId, RoleId, UserId};

/// The slice of gateway state we actually need: who owns a guild, what
/// permissions its roles grant and which channels still exist.
pub struct Cache {
    guilds: DashMap<GuildId, Arc<CachedGuild>>,
}

pub struct CachedGuild {
    pub id: GuildId,
    owner: AtomicU64,
    roles: DashMap<RoleId, Permissions>,
    channels: DashSet<ChannelId>,
}

impl CachedGuild {
    fn from_guild(guild: &Guild) -> Self {
        let cached = CachedGuild {
            id: guild.id,
            owner: AtomicU64::new(guild.owner_id.0),
            roles: DashMap::new(),
            channels: DashSet::new(),
        };
        for role in guild.roles.values() {
            cached.roles.insert(role.id, role.permissions);
        }
        for channel in guild.channels.keys() {
            cached.channels.insert(*channel);
        }
        cached
    }

    fn insert_role(&self, role: &Role) {
        self.roles.insert(role.id, role.permissions);
    }
}

impl Cache {
    pub fn new() -> Self {
        Cache {
            guilds: DashMap::new(),
        }
    }

    pub fn update(&self, event: &Event) {
        match event {
            Event::GuildCreate(guild) => {
                self.guilds
                    .insert(guild.0.id, Arc::new(CachedGuild::from_guild(&guild.0)));
            }
            Event::GuildUpdate(update) => self.apply_guild_update(&update.0),
            Event::GuildDelete(guild) => {
                self.guilds.remove(&guild.id);
            }
            Event::RoleCreate(event) => {
                if let Some(guild) = self.get_guild(event.guild_id) {
                    guild.insert_role(&event.role);
                }
            }
            Event::RoleUpdate(event) => {
                if let Some(guild) = self.get_guild(event.guild_id) {
                    guild.insert_role(&event.role);
                }
            }
            Event::RoleDelete(event) => {
                if let Some(guild) = self.get_guild(event.guild_id) {
                    guild.roles.remove(&event.role_id);
                }
            }
            Event::ChannelCreate(event) => {
                if let twilight_model::channel::Channel::Guild(channel) = &event.0 {
                    self.insert_channel(channel);
                }
            }
            Event::ChannelDelete(event) => {
                if let twilight_model::channel::Channel::Guild(channel) = &event.0 {
                    self.remove_channel(channel);
                }
            }
            _ => {}
        }
    }

    fn apply_guild_update(&self, update: &PartialGuild) {
        if let Some(guild) = self.get_guild(update.id) {
            guild.owner.store(update.owner_id.0, Ordering::SeqCst);
            guild.roles.clear();
            for role in update.roles.values() {
                guild.roles.insert(role.id, role.permissions);
            }
        }
    }

    fn insert_channel(&self, channel: &GuildChannel) {
        if let Some(guild_id) = channel_guild_id(channel) {
            if let Some(guild) = self.get_guild(guild_id) {
                guild.channels.insert(channel_id(channel));
            }
        }
    }

    fn remove_channel(&self, channel: &GuildChannel) {
        if let Some(guild_id) = channel_guild_id(channel) {
            if let Some(guild) = self.get_guild(guild_id) {
                guild.channels.remove(&channel_id(channel));
            }
        }
    }

    pub fn get_guild(&self, guild_id: GuildId) -> Option<Arc<CachedGuild>> {
        self.guilds.get(&guild_id).map(|guard| guard.value().clone())
    }

    /// Does the member hold all of ``required`` in this guild? The owner and
    /// anyone with ADMINISTRATOR pass regardless.
    pub fn has_permissions(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        member_roles: &[RoleId],
        required: Permissions,
    ) -> bool {
        let guild = match self.get_guild(guild_id) {
            Some(guild) => guild,
            None => return false,
        };

        if guild.owner.load(Ordering::SeqCst) == user_id.0 {
            return true;
        }

        let permissions = self.member_permissions(&guild, member_roles);
        if permissions.contains(Permissions::ADMINISTRATOR) {
            return true;
        }

        permissions.contains(required)
    }

    fn member_permissions(&self, guild: &CachedGuild, member_roles: &[RoleId]) -> Permissions {
        // the @everyone role shares the guild's id
        let mut permissions = guild
            .roles
            .get(&RoleId(guild.id.0))
            .map(|role| *role.value())
            .unwrap_or_else(Permissions::empty);

        for role_id in member_roles {
            if let Some(role) = guild.roles.get(role_id) {
                permissions |= *role.value();
            }
        }

        permissions
    }

    /// Whether any guild we can see still has this channel.
    pub fn channel_exists(&self, channel_id: ChannelId) -> bool {
        self.guilds
            .iter()
            .any(|guild| guild.channels.contains(&channel_id))
    }

    pub fn guild_has_channel(&self, guild_id: GuildId, channel_id: ChannelId) -> bool {
        match self.get_guild(guild_id) {
            Some(guild) => guild.channels.contains(&channel_id),
            None => false,
        }
    }
}

fn channel_guild_id(channel: &GuildChannel) -> Option<GuildId> {
    match channel {
        GuildChannel::Category(c) => c.guild_id,
        GuildChannel::Text(c) => c.guild_id,
        GuildChannel::Voice(c) => c.guild_id,
    }
}

fn channel_id(channel: &GuildChannel) -> ChannelId {
    match channel {
        GuildChannel::Category(c) => c.id,
        GuildChannel::Text(c) => c.id,
        GuildChannel::Voice(c) => c.id,
    }
}
