// Level table and resolver
// A point total always maps onto exactly one level; the "state" of a member
// on the ladder is recomputed from the latest total on every request.

use serde::Serialize;

use super::LadderError;

/// A named tier of the success ladder with an inclusive point range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    pub id: u8,
    pub name: &'static str,
    pub min_points: u32,
    /// `u32::MAX` on the top level means "no upper bound"
    pub max_points: u32,
    /// Hex display color, e.g. "#60A5FA"
    pub color: &'static str,
}

impl Level {
    const fn new(id: u8, name: &'static str, min_points: u32, max_points: u32, color: &'static str) -> Self {
        Self {
            id,
            name,
            min_points,
            max_points,
            color,
        }
    }

    /// Whether `points` falls inside this level's inclusive range
    pub fn contains(&self, points: u32) -> bool {
        points >= self.min_points && points <= self.max_points
    }

    /// Top level of the ladder has no upper bound
    pub fn is_unbounded(&self) -> bool {
        self.max_points == u32::MAX
    }

    /// Number of points covered by this level
    pub fn span(&self) -> u64 {
        u64::from(self.max_points) - u64::from(self.min_points) + 1
    }
}

static LEVELS: [Level; 10] = [
    Level::new(1, "Visitante", 0, 49, "#9CA3AF"),
    Level::new(2, "Membro", 50, 149, "#60A5FA"),
    Level::new(3, "Consolidado", 150, 299, "#34D399"),
    Level::new(4, "Discípulo", 300, 599, "#10B981"),
    Level::new(5, "Líder em Treinamento", 600, 999, "#FBBF24"),
    Level::new(6, "Líder de Célula", 1000, 1999, "#F59E0B"),
    Level::new(7, "Supervisor", 2000, 3499, "#F97316"),
    Level::new(8, "Coordenador", 3500, 5999, "#EF4444"),
    Level::new(9, "Pastor de Rede", 6000, 9999, "#A855F7"),
    Level::new(10, "Pastor", 10000, u32::MAX, "#7C3AED"),
];

/// All levels in ascending order
pub fn levels() -> &'static [Level] {
    &LEVELS
}

/// Check the invariants every level table must satisfy:
/// sequential ids from 1, starts at 0, contiguous ranges, unbounded top.
pub fn validate_table(table: &[Level]) -> Result<(), LadderError> {
    let first = table.first().ok_or(LadderError::EmptyTable)?;
    if first.min_points != 0 {
        return Err(LadderError::FirstLevelNotZero(first.min_points));
    }

    for (i, level) in table.iter().enumerate() {
        let expected = u8::try_from(i + 1).map_err(|_| LadderError::TooManyLevels(table.len()))?;
        if level.id != expected {
            return Err(LadderError::NonSequentialId {
                expected,
                found: level.id,
            });
        }
        if level.max_points < level.min_points {
            return Err(LadderError::InvertedRange {
                id: level.id,
                min: level.min_points,
                max: level.max_points,
            });
        }
    }

    for pair in table.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        if u64::from(cur.max_points) + 1 != u64::from(next.min_points) {
            return Err(LadderError::NotContiguous {
                id: cur.id,
                max: cur.max_points,
                next_min: next.min_points,
            });
        }
    }

    // table is non-empty here
    let last = &table[table.len() - 1];
    if !last.is_unbounded() {
        return Err(LadderError::BoundedTop(last.max_points));
    }

    Ok(())
}

/// Level whose range contains `points`.
/// Falls back to the first level if nothing matches, which a valid table rules out.
pub fn get_current_level(points: u32) -> &'static Level {
    LEVELS
        .iter()
        .find(|level| level.contains(points))
        .unwrap_or(&LEVELS[0])
}

/// Level right after `current`, or `None` at the top of the ladder
pub fn get_next_level(current: &Level) -> Option<&'static Level> {
    let next_id = current.id.checked_add(1)?;
    LEVELS.iter().find(|level| level.id == next_id)
}

/// Progress through the current level as a whole percentage.
///
/// Returns 100 at the top level. Rounds half up: 0.5% becomes 1%.
pub fn get_progress_to_next_level(points: u32) -> u8 {
    let current = get_current_level(points);
    if get_next_level(current).is_none() {
        return 100;
    }

    let into_level = u64::from(points.saturating_sub(current.min_points));
    let span = current.span();
    let percent = (200 * into_level + span) / (2 * span);

    percent.min(100) as u8
}

/// Points still needed to reach the next level, `None` at the top
pub fn points_to_next_level(points: u32) -> Option<u32> {
    let current = get_current_level(points);
    get_next_level(current).map(|next| next.min_points.saturating_sub(points))
}

/// Derived ladder status for one member. Built fresh from a point total, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberLevelStatus {
    pub points: u32,
    pub current_level: &'static Level,
    pub next_level: Option<&'static Level>,
    pub progress_percent: u8,
    pub points_to_next_level: Option<u32>,
}

impl MemberLevelStatus {
    pub fn from_points(points: u32) -> Self {
        let current_level = get_current_level(points);
        Self {
            points,
            current_level,
            next_level: get_next_level(current_level),
            progress_percent: get_progress_to_next_level(points),
            points_to_next_level: points_to_next_level(points),
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.next_level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_level() -> &'static Level {
        levels().last().unwrap()
    }

    #[test]
    fn test_shipped_table_is_valid() {
        assert_eq!(validate_table(levels()), Ok(()));
        assert_eq!(levels().len(), 10);
    }

    #[test]
    fn test_contiguity() {
        for pair in levels().windows(2) {
            assert_eq!(pair[0].max_points + 1, pair[1].min_points);
        }
    }

    #[test]
    fn test_coverage_and_monotonicity() {
        // Walk well past the start of the top level
        let mut previous_id = 0;
        for p in 0..=last_level().min_points + 500 {
            let level = get_current_level(p);
            assert!(level.contains(p), "level {} does not contain {}", level.id, p);
            assert_eq!(levels().iter().filter(|l| l.contains(p)).count(), 1);
            assert!(level.id >= previous_id);
            previous_id = level.id;
        }
        assert_eq!(get_current_level(u32::MAX).id, 10);
    }

    #[test]
    fn test_example_scenarios() {
        assert_eq!(get_current_level(0).name, "Visitante");
        assert_eq!(get_current_level(50).id, 2);
        assert_eq!(get_current_level(50).name, "Membro");
        assert_eq!(get_current_level(149).name, "Membro");
        assert_eq!(get_current_level(150).id, 3);
        assert_eq!(get_current_level(150).name, "Consolidado");
        assert_eq!(get_progress_to_next_level(100), 50);
        assert_eq!(get_next_level(last_level()), None);
        assert_eq!(get_progress_to_next_level(20000), 100);
    }

    #[test]
    fn test_next_level() {
        assert_eq!(get_next_level(get_current_level(0)).map(|l| l.id), Some(2));
        assert_eq!(get_next_level(get_current_level(9999)).map(|l| l.id), Some(10));
        assert!(get_next_level(get_current_level(10000)).is_none());
    }

    #[test]
    fn test_progress_bounds_and_terminal_state() {
        for p in 0..=12_000 {
            let progress = get_progress_to_next_level(p);
            assert!(progress <= 100);
            if p >= last_level().min_points {
                assert_eq!(progress, 100);
            }
        }
        assert_eq!(get_progress_to_next_level(u32::MAX), 100);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        // Visitante spans 50 points: 1 point = 2%, never a tie
        assert_eq!(get_progress_to_next_level(0), 0);
        assert_eq!(get_progress_to_next_level(1), 2);
        assert_eq!(get_progress_to_next_level(49), 98);
        // Líder de Célula spans 1000 points: 5 points = 0.5% -> 1%
        assert_eq!(get_progress_to_next_level(1005), 1);
        assert_eq!(get_progress_to_next_level(1004), 0);
        assert_eq!(get_progress_to_next_level(1995), 100);
        assert_eq!(get_progress_to_next_level(1994), 99);
        // Discípulo spans 300 points: 1.5 points per percent
        assert_eq!(get_progress_to_next_level(301), 0);
        assert_eq!(get_progress_to_next_level(302), 1);
    }

    #[test]
    fn test_idempotence() {
        for p in [0, 49, 50, 777, 9999, 10000, 20000] {
            assert_eq!(get_current_level(p), get_current_level(p));
            assert_eq!(get_progress_to_next_level(p), get_progress_to_next_level(p));
            assert_eq!(MemberLevelStatus::from_points(p), MemberLevelStatus::from_points(p));
        }
    }

    #[test]
    fn test_points_to_next_level() {
        assert_eq!(points_to_next_level(0), Some(50));
        assert_eq!(points_to_next_level(149), Some(1));
        assert_eq!(points_to_next_level(150), Some(150));
        assert_eq!(points_to_next_level(10000), None);
    }

    #[test]
    fn test_member_status() {
        let status = MemberLevelStatus::from_points(100);
        assert_eq!(status.current_level.name, "Membro");
        assert_eq!(status.next_level.map(|l| l.name), Some("Consolidado"));
        assert_eq!(status.progress_percent, 50);
        assert_eq!(status.points_to_next_level, Some(50));
        assert!(!status.is_max_level());

        let top = MemberLevelStatus::from_points(20000);
        assert!(top.is_max_level());
        assert_eq!(top.progress_percent, 100);
        assert_eq!(top.points_to_next_level, None);
    }

    #[test]
    fn test_next_level_of_foreign_level() {
        let stray = Level::new(u8::MAX, "Fora da escada", 0, u32::MAX, "#000000");
        assert!(get_next_level(&stray).is_none());
    }

    #[test]
    fn test_validate_rejects_oversized_table() {
        let table: Vec<Level> = (0..256u32)
            .map(|i| {
                let max = if i == 255 { u32::MAX } else { i * 10 + 9 };
                Level::new((i + 1) as u8, "L", i * 10, max, "#000000")
            })
            .collect();
        assert_eq!(validate_table(&table), Err(LadderError::TooManyLevels(256)));
    }

    #[test]
    fn test_validate_rejects_broken_tables() {
        assert_eq!(validate_table(&[]), Err(LadderError::EmptyTable));

        let starts_late = [Level::new(1, "A", 10, u32::MAX, "#000000")];
        assert_eq!(validate_table(&starts_late), Err(LadderError::FirstLevelNotZero(10)));

        let gap = [
            Level::new(1, "A", 0, 49, "#000000"),
            Level::new(2, "B", 60, u32::MAX, "#000000"),
        ];
        assert_eq!(
            validate_table(&gap),
            Err(LadderError::NotContiguous { id: 1, max: 49, next_min: 60 })
        );

        let bounded = [
            Level::new(1, "A", 0, 49, "#000000"),
            Level::new(2, "B", 50, 99, "#000000"),
        ];
        assert_eq!(validate_table(&bounded), Err(LadderError::BoundedTop(99)));

        let skipped_id = [
            Level::new(1, "A", 0, 49, "#000000"),
            Level::new(3, "B", 50, u32::MAX, "#000000"),
        ];
        assert_eq!(
            validate_table(&skipped_id),
            Err(LadderError::NonSequentialId { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(MemberLevelStatus::from_points(0)).unwrap();
        assert_eq!(json["current_level"]["name"], "Visitante");
        assert_eq!(json["progress_percent"], 0);
        assert_eq!(json["next_level"]["id"], 2);
    }
}
