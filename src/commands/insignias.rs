// Insignias command - badge board of a member

use poise::serenity_prelude as serenity;
use tracing::{error, warn};

use crate::commands::member_lookup::resolve_member;
use crate::ladder::badges::{badge_board, BadgeCategory, CategoryBoard};
use crate::utils::config::colors;
use crate::utils::formatters::escape_markdown;
use crate::{Context, Error};

/// Badge category choices
#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum CategoryChoice {
    #[name = "Frequência"]
    Frequency,
    #[name = "Liderança"]
    Leadership,
    #[name = "Aprendizado"]
    Learning,
    #[name = "Serviço"]
    Service,
}

impl From<CategoryChoice> for BadgeCategory {
    fn from(choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::Frequency => BadgeCategory::Frequency,
            CategoryChoice::Leadership => BadgeCategory::Leadership,
            CategoryChoice::Learning => BadgeCategory::Learning,
            CategoryChoice::Service => BadgeCategory::Service,
        }
    }
}

/// View your badges
#[poise::command(slash_command, prefix_command)]
pub async fn insignias(
    ctx: Context<'_>,
    #[description = "Categoria de insígnias"] categoria: Option<CategoryChoice>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let user = ctx.author();
    let data = ctx.data();

    let member = match resolve_member(data, user.id.get()).await {
        Ok(Some(m)) => m,
        Ok(None) => {
            ctx.say("Nenhum cadastro de membro vinculado a esta conta do Discord.")
                .await?;
            return Ok(());
        }
        Err(e) => {
            error!("Failed to fetch member for {}: {:?}", user.id, e);
            ctx.say("Não foi possível buscar os dados do membro.").await?;
            return Ok(());
        }
    };

    let unlocked = match data.supabase.get_unlocked_badges(&member.id).await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Failed to fetch badges for {}: {:?}", member.id, e);
            ctx.say("Não foi possível carregar as insígnias.").await?;
            return Ok(());
        }
    };

    let board = badge_board(&unlocked);
    if !board.unknown_ids.is_empty() {
        warn!(
            "Member {} has badges missing from the catalog: {:?}",
            member.id, board.unknown_ids
        );
    }

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("Insígnias - {}", escape_markdown(&member.full_name)))
        .description(format!(
            "**{} de {}** insígnias conquistadas",
            board.unlocked_count(),
            board.total_count()
        ))
        .color(colors::SUCCESS)
        .thumbnail(user.face());

    let selected: Vec<&CategoryBoard> = match categoria {
        Some(choice) => board.category(choice.into()).into_iter().collect(),
        None => board.categories.iter().collect(),
    };

    for category in selected {
        embed = embed.field(
            format!(
                "{} {} ({}/{})",
                category.category.emoji(),
                category.category.label(),
                category.unlocked_count(),
                category.slots.len()
            ),
            category_field(category),
            false,
        );
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// One line per badge: state, icon, name and how to unlock it
fn category_field(category: &CategoryBoard) -> String {
    if category.slots.is_empty() {
        return "Nenhuma insígnia nesta categoria.".to_string();
    }

    category
        .slots
        .iter()
        .map(|slot| {
            let mark = if slot.unlocked { "✅" } else { "🔒" };
            format!(
                "{} {} **{}** - {}",
                mark, slot.badge.icon, slot.badge.name, slot.badge.criteria
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
