// Escada command - view a member's position on the success ladder

use poise::serenity_prelude as serenity;
use tracing::error;

use crate::commands::member_lookup::resolve_member;
use crate::ladder::levels::MemberLevelStatus;
use crate::utils::config::{colors, parse_hex_color};
use crate::utils::formatters::{escape_markdown, format_number, progress_bar};
use crate::{Context, Error};

/// View your level on the success ladder
#[poise::command(slash_command, prefix_command)]
pub async fn escada(
    ctx: Context<'_>,
    #[description = "Membro para consultar (padrão: você)"] membro: Option<serenity::User>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let user = membro.as_ref().unwrap_or_else(|| ctx.author());
    let data = ctx.data();

    let member = match resolve_member(data, user.id.get()).await {
        Ok(Some(m)) => m,
        Ok(None) => {
            let embed = serenity::CreateEmbed::new()
                .title(format!("Escada do Sucesso - {}", escape_markdown(&user.name)))
                .description("Nenhum cadastro de membro vinculado a esta conta do Discord.")
                .color(colors::INFO);
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
            return Ok(());
        }
        Err(e) => {
            error!("Failed to fetch member for {}: {:?}", user.id, e);
            ctx.say("Não foi possível buscar os dados do membro. Tente novamente.")
                .await?;
            return Ok(());
        }
    };

    let status = member.level_status();
    let embed = status_embed(&member.full_name, &status).thumbnail(user.face());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Embed describing one member's ladder status
fn status_embed(name: &str, status: &MemberLevelStatus) -> serenity::CreateEmbed {
    let level = status.current_level;
    let color = parse_hex_color(level.color).unwrap_or(colors::PRIMARY);

    let next = if status.is_max_level() {
        "Nível máximo alcançado 🎉".to_string()
    } else {
        format!(
            "**{}** em {} pts",
            status.next_level.map(|l| l.name).unwrap_or_default(),
            format_number(status.points_to_next_level.unwrap_or_default())
        )
    };

    serenity::CreateEmbed::new()
        .title(format!("Escada do Sucesso - {}", escape_markdown(name)))
        .description(format!(
            "**Nível {} · {}**\n{} pts",
            level.id,
            level.name,
            format_number(status.points)
        ))
        .color(color)
        .field("Progresso", progress_bar(status.progress_percent, 10), false)
        .field("Próximo nível", next, false)
}
