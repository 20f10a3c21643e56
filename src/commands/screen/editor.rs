use crate::commands::screen::elements::{self, IndexError, ListEntry, ScreenElement};
use crate::core::CommandContext;
use crate::error::{CommandError, CommandResult};

/// Interactive editing session for a single element. Keeps the invoker in a
/// menu loop until they decline to edit more.
pub async fn edit_element(ctx: &CommandContext, element: &mut ScreenElement) -> CommandResult {
    // plain text has only one thing to edit, no menu needed
    if let ScreenElement::Text { text } = element {
        let value = ctx.await_reply("Enter a new text:").await?;
        *text = value.clone();
        ctx.reply(format!("Text is now set to: \"{}\"", value)).await?;
        return Ok(());
    }

    loop {
        match element {
            ScreenElement::Text { .. } => return Ok(()),
            ScreenElement::TextBox {
                title,
                description,
                color,
            } => {
                let choice = prompt_choice(ctx, "Do you want to edit the [c]olor, [t]itle, or [d]escription?").await?;
                match choice.as_str() {
                    "c" | "color" => edit_color(ctx, color).await?,
                    "t" | "title" => edit_optional_field(ctx, title, "title", "Title").await?,
                    "d" | "desc" | "description" => {
                        edit_optional_field(ctx, description, "description", "Description").await?
                    }
                    _ => {
                        ctx.reply("That's not a valid option.").await?;
                        continue;
                    }
                }
            }
            ScreenElement::Image { url, raw, color } => {
                let choice = prompt_choice(ctx, "Do you want to edit the [c]olor, [u]rl, or [r]aw?").await?;
                match choice.as_str() {
                    "c" | "color" => edit_color(ctx, color).await?,
                    "u" | "url" => {
                        let value = ctx.await_reply("Enter a new url:").await?;
                        *url = value.clone();
                        ctx.reply(format!("Url is now set to: \"{}\"", value)).await?;
                    }
                    "r" | "raw" => {
                        *raw = !*raw;
                        if *raw {
                            ctx.reply("The image will now be sent raw.").await?;
                        } else {
                            ctx.reply("The image will now be sent in an embed.").await?;
                        }
                    }
                    _ => {
                        ctx.reply("That's not a valid option.").await?;
                        continue;
                    }
                }
            }
            ScreenElement::List {
                title,
                description,
                color,
                enumerated,
                entries,
            } => {
                let choice = prompt_choice(
                    ctx,
                    "Do you want to edit the [c]olor, [t]itle, [d]escription, t[o]ggle numbers, or [e]ntries?",
                )
                .await?;
                match choice.as_str() {
                    "c" | "color" => edit_color(ctx, color).await?,
                    "t" | "title" => edit_optional_field(ctx, title, "title", "Title").await?,
                    "d" | "desc" | "description" => {
                        edit_optional_field(ctx, description, "description", "Description").await?
                    }
                    "o" | "toggle" | "toggle numbers" => {
                        *enumerated = !*enumerated;
                        if *enumerated {
                            ctx.reply("Numbering is now enabled.").await?;
                        } else {
                            ctx.reply("Numbering is now disabled.").await?;
                        }
                    }
                    "e" | "entries" | "entry" => edit_entries(ctx, entries).await?,
                    _ => {
                        ctx.reply("That's not a valid option.").await?;
                        continue;
                    }
                }
            }
        }

        let more = prompt_choice(ctx, "Do you want to edit more? ([y]es/[n]o)").await?;
        if more != "y" && more != "yes" {
            return Ok(());
        }
    }
}

async fn prompt_choice(ctx: &CommandContext, prompt: &str) -> Result<String, CommandError> {
    Ok(ctx.await_reply(prompt).await?.trim().to_lowercase())
}

async fn edit_optional_field(
    ctx: &CommandContext,
    field: &mut Option<String>,
    name: &str,
    display: &str,
) -> CommandResult {
    let value = ctx.await_reply(format!("Enter a new {} (type ! to delete):", name)).await?;
    if value.trim() == "!" {
        *field = None;
        ctx.reply(format!("{} has been deleted.", display)).await?;
    } else {
        *field = Some(value.clone());
        ctx.reply(format!("{} is now set to: \"{}\"", display, value)).await?;
    }
    Ok(())
}

async fn edit_color(ctx: &CommandContext, color: &mut Option<u32>) -> CommandResult {
    let value = ctx
        .await_reply("Enter a new color HEX (type ! to delete):")
        .await?
        .trim()
        .to_lowercase();
    if value == "!" {
        *color = None;
        ctx.reply("Color has been deleted.").await?;
    } else {
        match u32::from_str_radix(&value.replace('#', ""), 16) {
            Ok(parsed) => {
                *color = Some(parsed);
                ctx.reply(format!("Color is now set to: \"{}\"", value)).await?;
            }
            Err(_) => {
                ctx.reply("This is not a valid color. Aborting.").await?;
            }
        }
    }
    Ok(())
}

async fn edit_entries(ctx: &CommandContext, entries: &mut Vec<ListEntry>) -> CommandResult {
    ctx.reply(format!(
        "You're editing a list containing {} entries.\n\
         Add with `a [#]`.\n\
         Edit with `e [#]`.\n\
         Delete with `d #`.\n\
         Move with `m # #`.\n\
         Swap with `s # #`.\n\
         Get overview with `l`.\n\
         Quit with `q`.",
        entries.len()
    ))
    .await?;

    loop {
        let input = ctx.next_reply().await?.trim().to_lowercase();
        let args: Vec<&str> = input.split(' ').collect();
        match args[0] {
            "q" => return Ok(()),
            "l" => {
                if entries.is_empty() {
                    ctx.reply("The list is empty.").await?;
                } else {
                    let overview = entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| format!("{}. {}", index + 1, entry.name))
                        .collect::<Vec<String>>()
                        .join("\n");
                    ctx.reply(overview).await?;
                }
            }
            "a" => {
                let index = if args.len() > 1 {
                    match entry_index(ctx, args[1], entries.len()).await? {
                        Some(index) => Some(index),
                        None => continue,
                    }
                } else {
                    None
                };
                let name = ctx.await_reply("Title:").await?;
                let value = ctx.await_reply("Description:").await?;
                let entry = ListEntry { name, value };
                match index {
                    Some(index) => entries.insert(index, entry),
                    None => entries.push(entry),
                }
                ctx.reply("The list entry has been added.").await?;
            }
            "e" => {
                if args.len() != 2 {
                    ctx.reply("You must provide an index: `e #`. Try again.").await?;
                    continue;
                }
                let index = match entry_index(ctx, args[1], entries.len()).await? {
                    Some(index) => index,
                    None => continue,
                };
                let name = ctx.await_reply("Title:").await?;
                let value = ctx.await_reply("Description:").await?;
                entries[index] = ListEntry { name, value };
                ctx.reply("The list entry has been edited.").await?;
            }
            "d" => {
                if args.len() != 2 {
                    ctx.reply("You must provide an index: `d #`. Try again.").await?;
                    continue;
                }
                let index = match entry_index(ctx, args[1], entries.len()).await? {
                    Some(index) => index,
                    None => continue,
                };
                entries.remove(index);
                ctx.reply(format!("The entry at index {} has been deleted.", index + 1))
                    .await?;
            }
            "m" => {
                if args.len() != 3 {
                    ctx.reply("You must provide two indexes: `m # #`. Try again.").await?;
                    continue;
                }
                let from = entry_index(ctx, args[1], entries.len()).await?;
                let to = entry_index(ctx, args[2], entries.len()).await?;
                let (from, to) = match (from, to) {
                    (Some(from), Some(to)) => (from, to),
                    _ => continue,
                };
                elements::move_element(entries, from, to);
                ctx.reply(format!("The entry at index {} was moved to index {}", from + 1, to + 1))
                    .await?;
            }
            "s" => {
                if args.len() != 3 {
                    ctx.reply("You must provide two indexes: `s # #`. Try again.").await?;
                    continue;
                }
                let first = entry_index(ctx, args[1], entries.len()).await?;
                let second = entry_index(ctx, args[2], entries.len()).await?;
                let (first, second) = match (first, second) {
                    (Some(first), Some(second)) => (first, second),
                    _ => continue,
                };
                entries.swap(first, second);
                ctx.reply(format!(
                    "The entry at index {} has been swapped with the entry at index {}",
                    first + 1,
                    second + 1
                ))
                .await?;
            }
            _ => {
                ctx.reply("Invalid option. Try again.").await?;
            }
        }
    }
}

async fn entry_index(ctx: &CommandContext, raw: &str, len: usize) -> Result<Option<usize>, CommandError> {
    match elements::parse_index(raw, len) {
        Ok(index) => Ok(Some(index)),
        Err(IndexError::NotANumber) => {
            ctx.reply("That's not a valid number.").await?;
            Ok(None)
        }
        Err(IndexError::OutOfRange(len)) => {
            ctx.reply(format!("The index should be between 1 and {} inclusive.", len))
                .await?;
            Ok(None)
        }
    }
}
