use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use twilight_model::guild::Permissions;

use crate::command;
use crate::commands::meta::nodes::{CommandGroup, CommandNode, RootNode};

mod invites;
pub mod meta;
mod purge;
pub mod screen;

lazy_static! {
    pub static ref ROOT_NODE: RootNode = {
        let command_list = vec![
            command!(
                "infosend",
                screen::infosend,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "infolist",
                screen::infolist,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "infoadd",
                screen::infoadd,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "infoedit",
                screen::infoedit,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "inforemove",
                screen::inforemove,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "infomove",
                screen::infomove,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "infoswap",
                screen::infoswap,
                Permissions::MANAGE_GUILD,
                CommandGroup::Screen
            ),
            command!(
                "invite_whitelist",
                invites::invite_whitelist,
                Permissions::MANAGE_GUILD,
                CommandGroup::Invites
            ),
            command!(
                "invite_whitelist_add",
                invites::invite_whitelist_add,
                Permissions::MANAGE_GUILD,
                CommandGroup::Invites
            ),
            command!(
                "invite_whitelist_remove",
                invites::invite_whitelist_remove,
                Permissions::MANAGE_GUILD,
                CommandGroup::Invites
            ),
            command!(
                "invite_whitelist_logging",
                invites::invite_whitelist_logging,
                Permissions::MANAGE_GUILD,
                CommandGroup::Invites
            ),
            command!("purge", purge::purge, Permissions::MANAGE_GUILD, CommandGroup::Purge),
            command!(
                "purgedailynow",
                purge::purgedailynow,
                Permissions::MANAGE_GUILD,
                CommandGroup::Purge
            ),
            command!(
                "purgeadd",
                purge::purgeadd,
                Permissions::MANAGE_GUILD,
                CommandGroup::Purge
            ),
            command!(
                "purgeremove",
                purge::purgeremove,
                Permissions::MANAGE_GUILD,
                CommandGroup::Purge
            ),
            command!(
                "purging",
                purge::purging,
                Permissions::MANAGE_GUILD,
                CommandGroup::Purge
            ),
            command!(
                "purgelist",
                purge::purgelist,
                Permissions::MANAGE_GUILD,
                CommandGroup::Purge
            ),
        ];

        let mut all_commands = HashMap::new();

        for command in &command_list {
            for alias in &command.aliases {
                all_commands.insert(alias.clone(), command.clone());
            }
            all_commands.insert(command.name.clone(), command.clone());
        }

        RootNode {
            all_commands,
            command_list,
        }
    };
}

pub fn get_root() -> &'static RootNode {
    &ROOT_NODE
}
