use std::sync::Arc;

use log::debug;
use twilight_model::gateway::payload::MessageCreate;
use twilight_model::guild::Permissions;

use crate::commands;
use crate::commands::meta::nodes::CommandNode;
use crate::core::{BotContext, CommandContext, CommandMessage};
use crate::error::{CommandError, EventHandlerError, OtherFailure, ParseError};
use crate::cogbot_error;

#[derive(Debug, Clone)]
pub struct Parser {
    pub parts: Vec<String>,
    index: usize,
}

impl Parser {
    pub fn new(content: &str) -> Self {
        Parser {
            parts: content
                .split_whitespace()
                .map(std::borrow::ToOwned::to_owned)
                .collect::<Vec<String>>(),
            index: 0,
        }
    }

    pub fn get_command(&mut self) -> Option<Arc<CommandNode>> {
        let target = self.parts.get(self.index)?.to_lowercase();

        match commands::get_root().all_commands.get(&target) {
            Some(node) => {
                debug!("Found a command node: {}", node.get_name());
                self.index += 1;
                Some(node.clone())
            }
            None => {
                debug!("No command node found for {}", target);
                None
            }
        }
    }

    pub fn get_next(&mut self) -> Result<String, ParseError> {
        match self.parts.get(self.index) {
            Some(part) => {
                self.index += 1;
                Ok(part.clone())
            }
            None => Err(ParseError::MissingArgument),
        }
    }

    pub fn get_optional(&mut self) -> Option<String> {
        self.get_next().ok()
    }

    pub fn has_next(&self) -> bool {
        self.index < self.parts.len()
    }

    pub async fn figure_it_out(
        prefix: &str,
        message: Box<MessageCreate>,
        ctx: Arc<BotContext>,
    ) -> Result<(), EventHandlerError> {
        let stripped = message.content[prefix.len()..].trim_start();
        let mut parser = Parser::new(stripped);

        let node = match parser.get_command() {
            Some(node) => node,
            None => return Ok(()),
        };
        debug!("Executing command: {} ({})", node.get_name(), node.group.get_name());

        let channel_id = message.channel_id;
        let authorized = node.invoker_permissions == Permissions::empty()
            || match (message.guild_id, &message.member) {
                (Some(guild_id), Some(member)) => ctx.cache.has_permissions(
                    guild_id,
                    message.author.id,
                    &member.roles,
                    node.invoker_permissions,
                ),
                _ => false,
            };

        let command_message = CommandMessage {
            id: message.id,
            channel_id,
            author: message.author.clone(),
            content: message.content.clone(),
        };
        let context = CommandContext::new(ctx.clone(), command_message, message.guild_id, parser);

        let result = if authorized {
            node.execute(context).await
        } else {
            Err(CommandError::InvalidPermissions)
        };

        if let Err(error) = result {
            if let CommandError::OtherFailure(OtherFailure::DatabaseError(ref e)) = error {
                cogbot_error!("Database error while executing {}: {}", node.get_name(), e);
            }
            if let Err(e) = ctx.send_message(channel_id, error.to_string()).await {
                cogbot_error!("Failed to report a command failure to channel {}: {}", channel_id, e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_lookup_is_case_insensitive() {
        let mut parser = Parser::new("INFOSEND");
        let node = parser.get_command().unwrap();
        assert_eq!(node.get_name(), "infosend");
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let mut parser = Parser::new("definitelynotacommand 1 2");
        assert!(parser.get_command().is_none());
    }

    #[test]
    fn arguments_are_served_in_order() {
        let mut parser = Parser::new("infomove 2 5");
        parser.get_command().unwrap();
        assert_eq!(parser.get_next().unwrap(), "2");
        assert_eq!(parser.get_next().unwrap(), "5");
        assert!(parser.get_next().is_err());
        assert!(!parser.has_next());
    }
}
