// Leaderboard ranking and level distribution

use std::cmp::Ordering;

use super::levels::{get_current_level, levels, Level};

/// Input row for ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub member_id: String,
    pub name: String,
    pub points: u32,
}

/// A ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// Competition rank: tied members share a rank and the next rank skips
    pub rank: usize,
    pub member_id: String,
    pub name: String,
    pub points: u32,
    pub level: &'static Level,
}

/// Rank members by points (highest first), ties ordered by name
pub fn rank_members(mut entries: Vec<ScoreEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| match b.points.cmp(&a.points) {
        Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        other => other,
    });

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.points == entry.points => prev.rank,
            _ => i + 1,
        };
        ranked.push(RankedEntry {
            rank,
            level: get_current_level(entry.points),
            member_id: entry.member_id,
            name: entry.name,
            points: entry.points,
        });
    }

    ranked
}

/// Number of members on each level, every level listed even when empty
pub fn level_distribution<I>(points: I) -> Vec<(&'static Level, usize)>
where
    I: IntoIterator<Item = u32>,
{
    let mut counts = vec![0usize; levels().len()];
    for p in points {
        let level = get_current_level(p);
        counts[usize::from(level.id) - 1] += 1;
    }

    levels().iter().zip(counts).collect()
}
