// Success ladder ("Escada do Sucesso")
// Levels, progress and badges derived from a member's point total.
// Everything here is pure: callers fetch the inputs, we only classify them.

pub mod badges;
pub mod leaderboard;
pub mod levels;

use thiserror::Error;

/// Errors raised while validating static ladder data or parsing user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LadderError {
    #[error("level table is empty")]
    EmptyTable,

    #[error("first level must start at 0 points, found {0}")]
    FirstLevelNotZero(u32),

    #[error("level table has {0} entries, ids only go up to 255")]
    TooManyLevels(usize),

    #[error("level ids must increase by one: expected {expected}, found {found}")]
    NonSequentialId { expected: u8, found: u8 },

    #[error("level {id} has an inverted range {min}..={max}")]
    InvertedRange { id: u8, min: u32, max: u32 },

    #[error("gap or overlap between level {id} (ends at {max}) and the next level (starts at {next_min})")]
    NotContiguous { id: u8, max: u32, next_min: u32 },

    #[error("last level must be unbounded, ends at {0}")]
    BoundedTop(u32),

    #[error("duplicate badge id: {0}")]
    DuplicateBadge(&'static str),

    #[error("unknown badge category: {0}")]
    UnknownCategory(String),
}

/// Clamp a raw score coming from the database into the ladder's domain.
/// Negative or missing totals count as 0 points.
pub fn clamp_points(raw: Option<i64>) -> u32 {
    match raw {
        Some(p) if p <= 0 => 0,
        Some(p) => u32::try_from(p).unwrap_or(u32::MAX),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_points() {
        assert_eq!(clamp_points(None), 0);
        assert_eq!(clamp_points(Some(-25)), 0);
        assert_eq!(clamp_points(Some(0)), 0);
        assert_eq!(clamp_points(Some(149)), 149);
        assert_eq!(clamp_points(Some(i64::MAX)), u32::MAX);
    }

    #[test]
    fn test_error_messages() {
        let err = LadderError::UnknownCategory("worship".into());
        assert_eq!(err.to_string(), "unknown badge category: worship");
    }
}
