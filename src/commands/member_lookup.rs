// Shared helper: resolve a Discord user to a church member

use anyhow::Result;
use tracing::debug;

use crate::models::member::Member;
use crate::Data;

/// Fetch the member linked to `discord_id`.
///
/// The discord → member id link is cached; the member row itself is always
/// fetched fresh so ladder status reflects the latest score. A cached link
/// is only trusted while the row still points back at the same account.
pub async fn resolve_member(data: &Data, discord_id: u64) -> Result<Option<Member>> {
    let cached_id = data.member_links.get(&discord_id).map(|id| id.value().clone());

    if let Some(member_id) = cached_id {
        match data.supabase.get_member(&member_id).await? {
            Some(member) if member.is_linked_to(discord_id) => return Ok(Some(member)),
            _ => {
                debug!("Dropping stale member link {} -> {}", discord_id, member_id);
                data.member_links.remove(&discord_id);
            }
        }
    }

    let member = data
        .supabase
        .get_member_by_discord(&discord_id.to_string())
        .await?;

    if let Some(ref m) = member {
        data.member_links.insert(discord_id, m.id.clone());
    }

    Ok(member)
}
