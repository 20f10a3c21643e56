use twilight_embed_builder::{EmbedBuilder, EmbedFieldBuilder, ImageSource};

use crate::core::CommandContext;
use crate::error::{CommandError, CommandResult};

mod editor;
mod elements;

pub use elements::{ListEntry, ScreenElement};

use elements::IndexError;

/// Renders the configured info screen into the invoking channel.
pub async fn infosend(ctx: CommandContext) -> CommandResult {
    let config = ctx.get_config().await?;
    if config.screen.is_empty() {
        ctx.reply("The info screen is empty.").await?;
        return Ok(());
    }
    send_screen(&ctx, &config.screen).await
}

pub async fn infolist(ctx: CommandContext) -> CommandResult {
    let config = ctx.get_config().await?;
    if config.screen.is_empty() {
        ctx.reply("The info screen is empty.").await?;
        return Ok(());
    }

    let mut message = String::from("Entries in info screen:\n");
    message += &config
        .screen
        .iter()
        .enumerate()
        .map(|(index, element)| format!("{}. {}", index + 1, elements::describe(element)))
        .collect::<Vec<String>>()
        .join("\n");
    ctx.reply(message).await?;
    Ok(())
}

pub async fn infoadd(mut ctx: CommandContext) -> CommandResult {
    let raw_index = ctx.parser.get_optional();
    let mut config = (*ctx.get_config().await?).clone();

    let index = match raw_index {
        Some(raw) => match validated_index(&ctx, &raw, config.screen.len()).await? {
            Some(index) => Some(index),
            None => return Ok(()),
        },
        None => None,
    };

    let choice = ctx
        .await_reply("What type of entry? ([T]ext, text[b]ox, [l]ist, or [i]mage)")
        .await?
        .trim()
        .to_lowercase();

    match choice.as_str() {
        "t" | "text" => {
            let text = ctx.await_reply("Text:").await?;
            insert_element(&mut config.screen, index, ScreenElement::Text { text });
            ctx.reply("The text entry has been created.").await?;
        }
        "b" | "textbox" => {
            let position = insert_element(
                &mut config.screen,
                index,
                ScreenElement::TextBox {
                    title: None,
                    description: None,
                    color: None,
                },
            );
            ctx.reply("The text box entry has been created.").await?;
            editor::edit_element(&ctx, &mut config.screen[position]).await?;
        }
        "l" | "list" => {
            let position = insert_element(
                &mut config.screen,
                index,
                ScreenElement::List {
                    title: None,
                    description: None,
                    color: None,
                    enumerated: false,
                    entries: vec![],
                },
            );
            ctx.reply("The list entry has been created.").await?;
            editor::edit_element(&ctx, &mut config.screen[position]).await?;
        }
        "i" | "image" => {
            let url = ctx.await_reply("URL:").await?;
            insert_element(
                &mut config.screen,
                index,
                ScreenElement::Image {
                    url,
                    raw: false,
                    color: None,
                },
            );
            ctx.reply("The image entry has been created.").await?;
        }
        _ => {
            ctx.reply("Invalid type. Aborting.").await?;
            return Ok(());
        }
    }

    ctx.set_config(config).await
}

pub async fn infoedit(mut ctx: CommandContext) -> CommandResult {
    let raw = ctx.parser.get_next()?;
    let mut config = (*ctx.get_config().await?).clone();

    let index = match validated_index(&ctx, &raw, config.screen.len()).await? {
        Some(index) => index,
        None => return Ok(()),
    };

    editor::edit_element(&ctx, &mut config.screen[index]).await?;
    ctx.set_config(config).await
}

pub async fn inforemove(mut ctx: CommandContext) -> CommandResult {
    let raw = ctx.parser.get_next()?;
    let mut config = (*ctx.get_config().await?).clone();

    let index = match validated_index(&ctx, &raw, config.screen.len()).await? {
        Some(index) => index,
        None => return Ok(()),
    };

    config.screen.remove(index);
    ctx.set_config(config).await?;
    ctx.reply(format!("The entry at index {} has been removed.", index + 1))
        .await?;
    Ok(())
}

pub async fn infomove(mut ctx: CommandContext) -> CommandResult {
    let raw_from = ctx.parser.get_next()?;
    let raw_to = ctx.parser.get_next()?;
    let mut config = (*ctx.get_config().await?).clone();

    let from = validated_index(&ctx, &raw_from, config.screen.len()).await?;
    let to = validated_index(&ctx, &raw_to, config.screen.len()).await?;
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Ok(()),
    };

    elements::move_element(&mut config.screen, from, to);
    ctx.set_config(config).await?;
    ctx.reply(format!("The entry at index {} was moved to index {}", from + 1, to + 1))
        .await?;
    Ok(())
}

pub async fn infoswap(mut ctx: CommandContext) -> CommandResult {
    let raw_first = ctx.parser.get_next()?;
    let raw_second = ctx.parser.get_next()?;
    let mut config = (*ctx.get_config().await?).clone();

    let first = validated_index(&ctx, &raw_first, config.screen.len()).await?;
    let second = validated_index(&ctx, &raw_second, config.screen.len()).await?;
    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        _ => return Ok(()),
    };

    config.screen.swap(first, second);
    ctx.set_config(config).await?;
    ctx.reply(format!(
        "The entry at index {} has been swapped with the entry at index {}",
        first + 1,
        second + 1
    ))
    .await?;
    Ok(())
}

async fn send_screen(ctx: &CommandContext, screen: &[ScreenElement]) -> CommandResult {
    for element in screen {
        match element {
            ScreenElement::Text { text } => {
                ctx.reply(text.clone()).await?;
            }
            // a raw image leans on the client unfurling the bare link
            ScreenElement::Image { url, raw: true, .. } => {
                ctx.reply(url.clone()).await?;
            }
            ScreenElement::Image { url, color, .. } => {
                let mut builder = EmbedBuilder::new().image(ImageSource::url(url)?);
                if let Some(color) = color {
                    builder = builder.color(*color)?;
                }
                ctx.reply_embed(builder.build()?).await?;
            }
            ScreenElement::TextBox {
                title,
                description,
                color,
            } => {
                let builder = basic_embed(title, description, color)?;
                ctx.reply_embed(builder.build()?).await?;
            }
            ScreenElement::List {
                title,
                description,
                color,
                enumerated,
                entries,
            } => {
                let mut builder = basic_embed(title, description, color)?;
                for (index, entry) in entries.iter().enumerate() {
                    let name = if *enumerated {
                        format!("{}. {}", index + 1, entry.name)
                    } else {
                        entry.name.clone()
                    };
                    builder = builder.field(EmbedFieldBuilder::new(name, entry.value.clone())?.build());
                }
                ctx.reply_embed(builder.build()?).await?;
            }
        }
    }
    Ok(())
}

fn insert_element(screen: &mut Vec<ScreenElement>, index: Option<usize>, element: ScreenElement) -> usize {
    match index {
        Some(index) => {
            screen.insert(index, element);
            index
        }
        None => {
            screen.push(element);
            screen.len() - 1
        }
    }
}

fn basic_embed(
    title: &Option<String>,
    description: &Option<String>,
    color: &Option<u32>,
) -> Result<EmbedBuilder, CommandError> {
    let mut builder = EmbedBuilder::new();
    if let Some(title) = title {
        builder = builder.title(title)?;
    }
    if let Some(description) = description {
        builder = builder.description(description)?;
    }
    if let Some(color) = color {
        builder = builder.color(*color)?;
    }
    Ok(builder)
}

async fn validated_index(ctx: &CommandContext, raw: &str, len: usize) -> Result<Option<usize>, CommandError> {
    if len == 0 {
        ctx.reply("The info screen is empty.").await?;
        return Ok(None);
    }
    match elements::parse_index(raw, len) {
        Ok(index) => Ok(Some(index)),
        Err(IndexError::NotANumber) => {
            ctx.reply("The index should be a number.").await?;
            Ok(None)
        }
        Err(IndexError::OutOfRange(len)) => {
            ctx.reply(format!("The index should be between 1 and {} inclusive.", len))
                .await?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(text: &str) -> ScreenElement {
        ScreenElement::Text {
            text: text.to_string(),
        }
    }

    fn contents(screen: &[ScreenElement]) -> Vec<&str> {
        screen
            .iter()
            .map(|element| match element {
                ScreenElement::Text { text } => text.as_str(),
                _ => panic!("not a text element"),
            })
            .collect()
    }

    #[test]
    fn inserting_without_an_index_appends() {
        let mut screen = vec![text("a"), text("b")];
        let position = insert_element(&mut screen, None, text("c"));

        assert_eq!(position, 2);
        assert_eq!(contents(&screen), vec!["a", "b", "c"]);
    }

    #[test]
    fn inserting_at_an_index_shifts_the_rest() {
        let mut screen = vec![text("a"), text("b")];
        let position = insert_element(&mut screen, Some(1), text("c"));

        assert_eq!(position, 1);
        assert_eq!(contents(&screen), vec!["a", "c", "b"]);
    }

    #[test]
    fn swapping_twice_restores_the_order() {
        let mut screen = vec![text("a"), text("b"), text("c")];
        screen.swap(0, 2);
        screen.swap(0, 2);

        assert_eq!(contents(&screen), vec!["a", "b", "c"]);
    }

    #[test]
    fn add_then_remove_restores_the_sequence() {
        let mut screen = vec![text("a"), text("b")];
        let position = insert_element(&mut screen, Some(0), text("c"));
        screen.remove(position);

        assert_eq!(contents(&screen), vec!["a", "b"]);
    }
}
