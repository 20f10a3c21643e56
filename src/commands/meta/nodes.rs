use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use twilight_model::guild::Permissions;

use crate::core::CommandContext;
use crate::error::CommandResult;

pub type CommandResultOuter = Pin<Box<dyn Future<Output = CommandResult> + Send>>;
pub type CommandHandler = Box<dyn Fn(CommandContext) -> CommandResultOuter + Send + Sync>;

pub struct RootNode {
    pub all_commands: HashMap<String, Arc<CommandNode>>,
    pub command_list: Vec<Arc<CommandNode>>,
}

#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub enum CommandGroup {
    Screen,
    Invites,
    Purge,
}

impl CommandGroup {
    pub fn get_name(&self) -> &'static str {
        match self {
            CommandGroup::Screen => "screen",
            CommandGroup::Invites => "invites",
            CommandGroup::Purge => "purge",
        }
    }
}

pub struct CommandNode {
    pub name: String,
    pub handler: CommandHandler,
    /// Guild permissions the invoking member must hold, the guild owner and
    /// administrators always pass.
    pub invoker_permissions: Permissions,
    pub group: CommandGroup,
    pub aliases: Vec<String>,
}

impl CommandNode {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub async fn execute(&self, ctx: CommandContext) -> CommandResult {
        (self.handler)(ctx).await
    }
}
