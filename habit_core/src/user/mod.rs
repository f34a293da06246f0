//! User - Attribute snapshots and upstream user records

mod gear;
mod profile;
mod snapshot;

#[cfg(test)]
pub(crate) mod fixtures;

pub use gear::{GearItem, GearRef};
pub use snapshot::{
    Boss, Consecutive, Gear, Items, Party, Plan, Preferences, Profile, Purchased, Quest,
    QuestContent, StatBuffs, UserSnapshot, UserStats,
};

use crate::stat_block::AttributeSet;
use crate::types::{CharacterClass, EquipmentSlot};
use std::collections::BTreeMap;

/// Everything the stat aggregator needs about a character
///
/// Built from a hydrated snapshot or directly by callers; gear slots that are
/// empty or unresolved are simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAttributes {
    /// Allocated attribute points
    pub points: AttributeSet,
    /// Temporary attribute buffs
    pub buffs: AttributeSet,
    /// Number of unfinished dailies that can be skipped without damage
    pub stealth: u32,
    pub level: u32,
    pub class: CharacterClass,
    pub equipped_gear: BTreeMap<EquipmentSlot, GearItem>,
}

impl UserAttributes {
    /// A character with no points, buffs or gear
    pub fn new(class: CharacterClass, level: u32) -> Self {
        UserAttributes {
            points: AttributeSet::default(),
            buffs: AttributeSet::default(),
            stealth: 0,
            level,
            class,
            equipped_gear: BTreeMap::new(),
        }
    }

    pub fn with_points(mut self, points: AttributeSet) -> Self {
        self.points = points;
        self
    }

    pub fn with_buffs(mut self, buffs: AttributeSet) -> Self {
        self.buffs = buffs;
        self
    }

    pub fn with_stealth(mut self, stealth: u32) -> Self {
        self.stealth = stealth;
        self
    }

    /// Equip an item, replacing whatever was in the slot
    pub fn with_gear(mut self, slot: EquipmentSlot, item: GearItem) -> Self {
        self.equipped_gear.insert(slot, item);
        self
    }
}
