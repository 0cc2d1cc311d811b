// Help command - show usage guide

use poise::serenity_prelude as serenity;
use crate::{Context, Error};
use crate::utils::config::colors;

/// Show help and usage guide
#[poise::command(slash_command, prefix_command, rename = "ajuda")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("🪜 Escada do Sucesso - Ajuda")
        .description("Acompanhe sua caminhada na Escada do Sucesso")
        .color(colors::PRIMARY)
        .field(
            "📈 Meu nível",
            "`/escada` - Seu nível, pontos e progresso\n\
            `/escada membro:@alguém` - Nível de outro membro",
            false,
        )
        .field(
            "🏆 Ranking",
            "`/ranking` - Ranking da igreja\n\
            `/ranking celula:Betel` - Ranking de uma célula",
            false,
        )
        .field(
            "🎖️ Insígnias",
            "`/insignias` - Suas insígnias conquistadas e bloqueadas\n\
            `/insignias categoria:Serviço` - Apenas uma categoria",
            false,
        )
        .field(
            "🪜 Níveis",
            "`/niveis` - Todos os níveis e faixas de pontos",
            false,
        )
        .footer(serenity::CreateEmbedFooter::new(
            "Os pontos são atualizados pela secretaria da igreja",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
