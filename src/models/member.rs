// Member and cell rows
// Matches the Supabase `members` / `cells` / `member_badges` tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ladder::clamp_points;
use crate::ladder::leaderboard::ScoreEntry;
use crate::ladder::levels::MemberLevelStatus;

/// A church member as stored in `members`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub discord_id: Option<String>,
    #[serde(default)]
    pub cell_id: Option<String>,
    /// Raw total as stored; may be null or negative in legacy rows
    #[serde(default)]
    pub success_ladder_score: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Point total clamped into the ladder's domain
    pub fn points(&self) -> u32 {
        clamp_points(self.success_ladder_score)
    }

    /// Ladder status derived from the current total
    pub fn level_status(&self) -> MemberLevelStatus {
        MemberLevelStatus::from_points(self.points())
    }

    /// Whether this row is currently linked to the given Discord account
    pub fn is_linked_to(&self, discord_id: u64) -> bool {
        self.discord_id
            .as_deref()
            .map(str::trim)
            .is_some_and(|id| id == discord_id.to_string())
    }

    pub fn score_entry(&self) -> ScoreEntry {
        ScoreEntry {
            member_id: self.id.clone(),
            name: self.full_name.clone(),
            points: self.points(),
        }
    }
}

/// A cell (small group)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: String,
    pub name: String,
}

/// Row of `member_badges`
#[derive(Debug, Clone, Deserialize)]
pub struct MemberBadgeRow {
    pub badge_id: String,
}
