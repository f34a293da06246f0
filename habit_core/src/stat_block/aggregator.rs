//! StatAccumulator - Collects attribute contributions before producing DerivedStats

use super::{AttributeSet, DerivedStats};
use crate::types::Attribute;

/// Accumulates attribute contributions from various sources
///
/// Each category is kept apart so the final breakdown can be reported
/// alongside the totals.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    pub armor: AttributeSet,
    pub buffs: AttributeSet,
    pub points: AttributeSet,
    pub level_bonus: u32,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce totals: armor + buffs + points + level bonus, in that order
    pub fn finish(&self) -> DerivedStats {
        let level_bonus = self.level_bonus as f64;
        let mut totals = AttributeSet::default();
        for attribute in Attribute::all() {
            *totals.get_mut(*attribute) = self.armor.get(*attribute)
                + self.buffs.get(*attribute)
                + self.points.get(*attribute)
                + level_bonus;
        }

        DerivedStats {
            totals,
            armor: self.armor,
            buffs: self.buffs,
            points: self.points,
            level_bonus: self.level_bonus,
        }
    }
}
