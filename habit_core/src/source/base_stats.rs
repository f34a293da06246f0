//! PointsSource and LevelSource - Allocated points and the level bonus

use crate::source::StatSource;
use crate::stat_block::{AttributeSet, StatAccumulator};

/// Attribute points the player has allocated
pub struct PointsSource {
    pub points: AttributeSet,
}

impl PointsSource {
    pub fn new(points: AttributeSet) -> Self {
        PointsSource { points }
    }
}

impl StatSource for PointsSource {
    fn id(&self) -> &str {
        "points"
    }

    fn priority(&self) -> i32 {
        -100 // Points apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.points += self.points;
    }
}

/// Flat bonus to every attribute from character level
pub struct LevelSource {
    /// Character level
    pub level: u32,
    /// Levels per bonus point
    pub divisor: u32,
}

impl LevelSource {
    pub fn new(level: u32, divisor: u32) -> Self {
        LevelSource { level, divisor }
    }

    /// floor(level / divisor); a zero divisor grants nothing
    pub fn bonus(&self) -> u32 {
        self.level.checked_div(self.divisor).unwrap_or(0)
    }
}

impl StatSource for LevelSource {
    fn id(&self) -> &str {
        "level"
    }

    fn priority(&self) -> i32 {
        -50
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.level_bonus += self.bonus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_accumulate() {
        let source = PointsSource::new(AttributeSet::new(1.0, 2.0, 3.0, 4.0));
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);
        source.apply(&mut acc);

        assert!((acc.points.per - 8.0).abs() < f64::EPSILON);
        assert_eq!(source.priority(), -100);
    }

    #[test]
    fn test_level_bonus() {
        assert_eq!(LevelSource::new(10, 2).bonus(), 5);
        assert_eq!(LevelSource::new(0, 2).bonus(), 0);
        assert_eq!(LevelSource::new(1, 2).bonus(), 0);
        assert_eq!(LevelSource::new(99, 2).bonus(), 49);
    }

    #[test]
    fn test_level_source_applies_bonus() {
        let mut acc = StatAccumulator::new();
        LevelSource::new(21, 2).apply(&mut acc);
        assert_eq!(acc.level_bonus, 10);
    }
}
