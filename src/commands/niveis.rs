// Niveis command - show the level table

use poise::serenity_prelude as serenity;

use crate::ladder::levels::{levels, Level};
use crate::utils::config::colors;
use crate::utils::formatters::format_number;
use crate::{Context, Error};

/// Show every level of the success ladder
#[poise::command(slash_command, prefix_command)]
pub async fn niveis(ctx: Context<'_>) -> Result<(), Error> {
    let description = levels()
        .iter()
        .map(level_line)
        .collect::<Vec<_>>()
        .join("\n");

    let embed = serenity::CreateEmbed::new()
        .title("🪜 Escada do Sucesso - Níveis")
        .description(description)
        .color(colors::PRIMARY);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

fn level_line(level: &Level) -> String {
    if level.is_unbounded() {
        format!(
            "**{}. {}** - {}+ pts",
            level.id,
            level.name,
            format_number(level.min_points)
        )
    } else {
        format!(
            "**{}. {}** - {} a {} pts",
            level.id,
            level.name,
            format_number(level.min_points),
            format_number(level.max_points)
        )
    }
}
