//! StatBlock - Attribute totals aggregated from all sources

mod aggregator;
mod computed;

pub use aggregator::StatAccumulator;

use crate::config::AttributeConstants;
use crate::source::{BuffSource, GearSource, LevelSource, PointsSource, StatSource};
use crate::types::Attribute;
use crate::user::UserAttributes;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Attribute aggregation constants
pub mod constants {
    /// Every attribute gains floor(level / LEVEL_BONUS_DIVISOR)
    pub const LEVEL_BONUS_DIVISOR: u32 = 2;

    /// Gear whose class matches the wearer contributes this multiple of its bonus
    pub const CLASS_GEAR_MULTIPLIER: f64 = 1.5;
}

/// One value per attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub str: f64,
    pub con: f64,
    pub int: f64,
    pub per: f64,
}

impl AttributeSet {
    pub fn new(str: f64, con: f64, int: f64, per: f64) -> Self {
        AttributeSet { str, con, int, per }
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Str => self.str,
            Attribute::Con => self.con,
            Attribute::Int => self.int,
            Attribute::Per => self.per,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut f64 {
        match attribute {
            Attribute::Str => &mut self.str,
            Attribute::Con => &mut self.con,
            Attribute::Int => &mut self.int,
            Attribute::Per => &mut self.per,
        }
    }
}

impl Add for AttributeSet {
    type Output = AttributeSet;

    fn add(self, rhs: AttributeSet) -> AttributeSet {
        AttributeSet::new(
            self.str + rhs.str,
            self.con + rhs.con,
            self.int + rhs.int,
            self.per + rhs.per,
        )
    }
}

impl AddAssign for AttributeSet {
    fn add_assign(&mut self, rhs: AttributeSet) {
        *self = *self + rhs;
    }
}

/// Attribute totals for a character plus the breakdown that produced them
///
/// `totals[a] = armor[a] + buffs[a] + points[a] + level_bonus`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub totals: AttributeSet,
    /// Contribution of equipped gear, class bonus included
    pub armor: AttributeSet,
    pub buffs: AttributeSet,
    /// Allocated attribute points
    pub points: AttributeSet,
    pub level_bonus: u32,
}

/// Builds DerivedStats from a UserAttributes snapshot
#[derive(Debug, Clone, Default)]
pub struct StatAggregator {
    constants: AttributeConstants,
}

impl StatAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: AttributeConstants) -> Self {
        StatAggregator { constants }
    }

    /// Every stat source the snapshot contributes, gear in slot order
    pub fn sources<'a>(&self, attrs: &'a UserAttributes) -> Vec<Box<dyn StatSource + 'a>> {
        let mut sources: Vec<Box<dyn StatSource + 'a>> = vec![
            Box::new(PointsSource::new(attrs.points)),
            Box::new(LevelSource::new(attrs.level, self.constants.level_bonus_divisor)),
            Box::new(BuffSource::new(attrs.buffs)),
        ];

        for (slot, item) in &attrs.equipped_gear {
            sources.push(Box::new(
                GearSource::new(*slot, item, attrs.class)
                    .with_class_multiplier(self.constants.class_gear_multiplier),
            ));
        }

        sources
    }

    /// Aggregate all of a snapshot's sources
    pub fn aggregate(&self, attrs: &UserAttributes) -> DerivedStats {
        Self::from_sources(&self.sources(attrs))
    }

    /// Aggregate an arbitrary set of sources, applied in priority order
    pub fn from_sources(sources: &[Box<dyn StatSource + '_>]) -> DerivedStats {
        let mut accumulator = StatAccumulator::new();

        // Stable sort keeps caller order within a priority
        let mut sorted_sources: Vec<_> = sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        for source in sorted_sources {
            tracing::trace!("applying stat source {}", source.id());
            source.apply(&mut accumulator);
        }

        accumulator.finish()
    }
}

/// Compute DerivedStats with the game's default constants
pub fn compute_derived_stats(attrs: &UserAttributes) -> DerivedStats {
    StatAggregator::new().aggregate(attrs)
}
