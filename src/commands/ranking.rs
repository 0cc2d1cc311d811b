// Ranking command - success ladder leaderboard

use poise::serenity_prelude as serenity;
use tracing::{error, warn};

use crate::ladder::leaderboard::{level_distribution, rank_members, RankedEntry};
use crate::utils::config::{colors, MAX_LEADERBOARD_SIZE};
use crate::utils::formatters::{escape_markdown, format_number, rank_label, truncate};
use crate::{Context, Error};

/// View the success ladder leaderboard
#[poise::command(slash_command, prefix_command)]
pub async fn ranking(
    ctx: Context<'_>,
    #[description = "Nome da célula (padrão: igreja inteira)"] celula: Option<String>,
    #[description = "Quantidade de membros"]
    #[min = 1]
    #[max = 25]
    limite: Option<u32>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let data = ctx.data();
    // #[min]/#[max] only bind slash invocations, leaderboard_description clamps
    let limit = limite
        .map(|l| l as usize)
        .unwrap_or(data.settings.leaderboard_size);

    // Resolve the cell filter first
    let (cell_id, scope) = match celula.as_deref() {
        Some(name) => match data.supabase.find_cell(name).await {
            Ok(Some(cell)) => (Some(cell.id), format!("Célula {}", escape_markdown(&cell.name))),
            Ok(None) => {
                ctx.say(format!("Célula **{}** não encontrada.", escape_markdown(name)))
                    .await?;
                return Ok(());
            }
            Err(e) => {
                error!("Failed to look up cell {}: {:?}", name, e);
                ctx.say("Não foi possível buscar a célula.").await?;
                return Ok(());
            }
        },
        None => (None, "Igreja".to_string()),
    };

    let members = match data.supabase.get_members(cell_id.as_deref()).await {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to fetch members: {:?}", e);
            ctx.say("Não foi possível carregar o ranking.").await?;
            return Ok(());
        }
    };

    if members.is_empty() {
        let embed = serenity::CreateEmbed::new()
            .title(format!("Ranking - {}", scope))
            .description("Nenhum membro encontrado.")
            .color(colors::INFO);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        return Ok(());
    }

    let negative = members
        .iter()
        .filter(|m| m.success_ladder_score.is_some_and(|s| s < 0))
        .count();
    if negative > 0 {
        warn!("{} members have a negative score, counted as 0", negative);
    }

    let distribution = level_distribution(members.iter().map(|m| m.points()));
    let ranked = rank_members(members.iter().map(|m| m.score_entry()).collect());

    // Only the cached link is used here; no extra lookup for the highlight
    let own_id = data
        .member_links
        .get(&ctx.author().id.get())
        .map(|id| id.value().clone());
    let description = leaderboard_description(&ranked, limit, own_id.as_deref());

    let summary: String = distribution
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(level, count)| format!("{}: {}", level.name, count))
        .collect::<Vec<_>>()
        .join("\n");

    let embed = serenity::CreateEmbed::new()
        .title(format!("Ranking - {}", scope))
        .description(description)
        .color(colors::PRIMARY)
        .field("Membros por nível", summary, false)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "{} membros · atualizado {}",
            ranked.len(),
            chrono::Utc::now().format("%d/%m/%Y %H:%M UTC")
        )));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Leaderboard lines for the embed description.
/// `limit` is clamped to `1..=MAX_LEADERBOARD_SIZE` so the embed stays under Discord's size cap.
fn leaderboard_description(ranked: &[RankedEntry], limit: usize, highlight: Option<&str>) -> String {
    let limit = limit.clamp(1, MAX_LEADERBOARD_SIZE);

    let mut description = String::new();
    for entry in ranked.iter().take(limit) {
        let marker = if highlight == Some(entry.member_id.as_str()) {
            " ◀"
        } else {
            ""
        };
        description.push_str(&format!(
            "**{}** {} · {} pts · _{}_{}\n",
            rank_label(entry.rank),
            escape_markdown(&truncate(&entry.name, 32)),
            format_number(entry.points),
            entry.level.name,
            marker
        ));
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::leaderboard::ScoreEntry;

    fn board(n: u32) -> Vec<RankedEntry> {
        rank_members(
            (0..n)
                .map(|i| ScoreEntry {
                    member_id: format!("m{}", i),
                    name: format!("Membro com um nome bem comprido {}", i),
                    points: 10_000 + i,
                })
                .collect(),
        )
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        let ranked = board(500);
        let description = leaderboard_description(&ranked, 500, None);
        assert_eq!(description.lines().count(), MAX_LEADERBOARD_SIZE);
        assert!(description.chars().count() < 4096);
    }

    #[test]
    fn test_zero_limit_shows_first_row() {
        let ranked = board(3);
        let description = leaderboard_description(&ranked, 0, None);
        assert_eq!(description.lines().count(), 1);
        assert!(description.starts_with("**🥇**"));
    }

    #[test]
    fn test_names_are_escaped() {
        let ranked = rank_members(vec![ScoreEntry {
            member_id: "m1".to_string(),
            name: "**Ana**".to_string(),
            points: 120,
        }]);
        let description = leaderboard_description(&ranked, 10, None);
        assert!(description.contains("\\*\\*Ana\\*\\*"));
    }

    #[test]
    fn test_own_row_is_marked() {
        let ranked = board(3);
        let description = leaderboard_description(&ranked, 10, Some("m1"));
        let marked: Vec<&str> = description.lines().filter(|l| l.ends_with('◀')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("10.001 pts"));
    }
}
