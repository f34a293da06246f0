//! StatSource - Trait and implementations for attribute providers

mod base_stats;
mod buff;
mod gear;

pub use base_stats::{LevelSource, PointsSource};
pub use buff::BuffSource;
pub use gear::GearSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes attributes to DerivedStats
pub trait StatSource: Send + Sync {
    /// Identifier for this source, used in trace output
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Allocated points: -100
    /// - Level bonus: -50
    /// - Gear: 0
    /// - Buffs: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's contribution to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);

    /// This source on its own, applied to an empty accumulator
    fn contribution(&self) -> StatAccumulator {
        let mut stats = StatAccumulator::new();
        self.apply(&mut stats);
        stats
    }
}
