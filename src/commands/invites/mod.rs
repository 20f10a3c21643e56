use crate::core::CommandContext;
use crate::error::{CommandResult, ParseError};
use crate::utils::matchers;

pub async fn invite_whitelist(ctx: CommandContext) -> CommandResult {
    let config = ctx.get_config().await?;

    let formatted = if config.invites.whitelist.is_empty() {
        "None".to_string()
    } else {
        config
            .invites
            .whitelist
            .iter()
            .enumerate()
            .map(|(index, guild_id)| format!("{}. {}", index + 1, guild_id))
            .collect::<Vec<String>>()
            .join("\n")
    };

    ctx.reply(format!("The following guild IDs are whitelisted:```\n{}\n```", formatted))
        .await?;
    Ok(())
}

pub async fn invite_whitelist_add(mut ctx: CommandContext) -> CommandResult {
    let raw = ctx.parser.get_next()?;
    let guild_id: u64 = raw
        .parse()
        .map_err(|_| ParseError::WrongArgumentType("guild id".to_string()))?;

    let mut config = (*ctx.get_config().await?).clone();
    if whitelist_add(&mut config.invites.whitelist, guild_id) {
        ctx.set_config(config).await?;
        ctx.reply(format!("Added {} to the whitelist.", guild_id)).await?;
    } else {
        ctx.reply(format!("{} is already whitelisted.", guild_id)).await?;
    }
    Ok(())
}

pub async fn invite_whitelist_remove(mut ctx: CommandContext) -> CommandResult {
    let raw = ctx.parser.get_next()?;
    let guild_id: u64 = raw
        .parse()
        .map_err(|_| ParseError::WrongArgumentType("guild id".to_string()))?;

    let mut config = (*ctx.get_config().await?).clone();
    if whitelist_remove(&mut config.invites.whitelist, guild_id) {
        ctx.set_config(config).await?;
        ctx.reply(format!("Removed {} from the whitelist.", guild_id)).await?;
    } else {
        ctx.reply(format!("{} is not on the whitelist.", guild_id)).await?;
    }
    Ok(())
}

/// Adds the guild id unless it is already listed. Reports whether the list changed.
fn whitelist_add(whitelist: &mut Vec<u64>, guild_id: u64) -> bool {
    if whitelist.contains(&guild_id) {
        false
    } else {
        whitelist.push(guild_id);
        true
    }
}

/// Drops the guild id if it is listed. Reports whether the list changed.
fn whitelist_remove(whitelist: &mut Vec<u64>, guild_id: u64) -> bool {
    match whitelist.iter().position(|id| *id == guild_id) {
        Some(position) => {
            whitelist.remove(position);
            true
        }
        None => false,
    }
}

pub async fn invite_whitelist_logging(mut ctx: CommandContext) -> CommandResult {
    let mut config = (*ctx.get_config().await?).clone();

    match ctx.parser.get_optional() {
        Some(raw) => {
            let channel_id = matchers::extract_channel_id(&raw)
                .ok_or_else(|| ParseError::WrongArgumentType("channel".to_string()))?;
            config.invites.log_channel = channel_id;
            ctx.set_config(config).await?;
            ctx.reply(format!("Set logging channel to <#{}>.", channel_id)).await?;
        }
        None => {
            config.invites.log_channel = 0;
            ctx.set_config(config).await?;
            ctx.reply("Cleared logging channel.").await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_new_guild_appends() {
        let mut whitelist = vec![1];
        assert!(whitelist_add(&mut whitelist, 2));
        assert_eq!(whitelist, vec![1, 2]);
    }

    #[test]
    fn adding_a_duplicate_guild_changes_nothing() {
        let mut whitelist = vec![1, 2];
        assert!(!whitelist_add(&mut whitelist, 2));
        assert_eq!(whitelist, vec![1, 2]);
    }

    #[test]
    fn removing_a_listed_guild_drops_it() {
        let mut whitelist = vec![1, 2, 3];
        assert!(whitelist_remove(&mut whitelist, 2));
        assert_eq!(whitelist, vec![1, 3]);
    }

    #[test]
    fn removing_an_absent_guild_is_a_noop() {
        let mut whitelist = vec![1];
        assert!(!whitelist_remove(&mut whitelist, 2));
        assert_eq!(whitelist, vec![1]);
    }
}
