//! Profile accessors on UserSnapshot
//!
//! Values are rounded the way the game displays them: current amounts floor,
//! maxima and gold round.

use super::{GearRef, Quest, UserSnapshot};
use crate::error::{HabitError, Result};
use crate::stat_block::{compute_derived_stats, DerivedStats};
use crate::types::{CharacterClass, EquipmentSlot};
use std::collections::BTreeMap;

const GEMS_PER_BALANCE_UNIT: f64 = 4.0;

impl UserSnapshot {
    /// Subscriber gems owned
    pub fn gems(&self) -> Result<u64> {
        let balance = self.balance.ok_or(HabitError::MissingField("balance"))?;
        Ok((balance * GEMS_PER_BALANCE_UNIT) as u64)
    }

    /// Mystic hourglasses owned
    pub fn hourglasses(&self) -> Result<u32> {
        self.purchased
            .as_ref()
            .map(|p| p.plan.consecutive.trinkets)
            .ok_or(HabitError::MissingField("purchased"))
    }

    pub fn gold(&self) -> i64 {
        self.stats.gp.round() as i64
    }

    /// Gold in compact notation, e.g. "1.2K"
    pub fn gold_compact(&self) -> String {
        format_compact(self.gold())
    }

    pub fn level(&self) -> u32 {
        self.stats.lvl
    }

    pub fn display_name(&self) -> &str {
        &self.profile.name
    }

    pub fn class(&self) -> CharacterClass {
        self.stats.class
    }

    pub fn class_display_name(&self) -> &'static str {
        self.stats.class.display_name()
    }

    pub fn bio(&self) -> Option<&str> {
        self.profile.blurb.as_deref()
    }

    /// Experience gained so far this level
    pub fn experience(&self) -> i64 {
        self.stats.exp.floor() as i64
    }

    pub fn experience_to_level(&self) -> i64 {
        self.stats.to_next_level.round() as i64
    }

    pub fn mana(&self) -> i64 {
        self.stats.mp.floor() as i64
    }

    pub fn mana_max(&self) -> i64 {
        self.stats.max_mp.round() as i64
    }

    pub fn health(&self) -> i64 {
        self.stats.hp.floor() as i64
    }

    pub fn health_max(&self) -> i64 {
        self.stats.max_health.round() as i64
    }

    /// Unfinished dailies that can be skipped without damage
    pub fn stealth(&self) -> u32 {
        self.stats.buffs.stealth
    }

    /// Battle gear
    pub fn armor(&self) -> &BTreeMap<EquipmentSlot, GearRef> {
        &self.items.gear.equipped
    }

    pub fn costume(&self) -> &BTreeMap<EquipmentSlot, GearRef> {
        &self.items.gear.costume
    }

    /// The gear the user is seen wearing, per their costume preference
    pub fn outfit(&self) -> Result<&BTreeMap<EquipmentSlot, GearRef>> {
        let preferences = self
            .preferences
            .as_ref()
            .ok_or(HabitError::MissingField("preferences"))?;
        Ok(if preferences.costume {
            self.costume()
        } else {
            self.armor()
        })
    }

    /// Whether the user is resting in the inn
    pub fn is_sleeping(&self) -> Result<bool> {
        self.preferences
            .as_ref()
            .map(|p| p.sleep)
            .ok_or(HabitError::MissingField("preferences"))
    }

    pub fn quest(&self) -> Result<&Quest> {
        Ok(&self.party()?.quest)
    }

    /// On a quest whose content was resolved
    pub fn is_on_quest(&self) -> Result<bool> {
        Ok(self.quest()?.data.is_some())
    }

    pub fn is_on_boss_quest(&self) -> Result<bool> {
        Ok(self.boss_strength()?.is_some())
    }

    /// Strength of the current boss, if the party is fighting one
    pub fn boss_strength(&self) -> Result<Option<f64>> {
        Ok(self
            .quest()?
            .data
            .as_ref()
            .and_then(|data| data.boss.as_ref())
            .map(|boss| boss.str))
    }

    /// Attribute totals from resolved gear, buffs, points and level
    pub fn derived_stats(&self) -> DerivedStats {
        compute_derived_stats(&self.attributes())
    }

    pub fn constitution_bonus(&self) -> f64 {
        self.derived_stats().constitution_bonus()
    }
}

/// Short compact notation: 999 -> "999", 1234 -> "1.2K", 56789 -> "57K"
///
/// A value that rounds up to 1000 of one unit is shown in the next unit.
fn format_compact(value: i64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

    let magnitude = (value as f64).abs();
    let sign = if value < 0 { "-" } else { "" };

    let Some(first) = UNITS.iter().rposition(|(scale, _)| magnitude >= *scale) else {
        return value.to_string();
    };

    for (index, (scale, suffix)) in UNITS.iter().enumerate().skip(first) {
        let scaled = magnitude / scale;
        let rounded = if scaled < 10.0 {
            (scaled * 10.0).round() / 10.0
        } else {
            scaled.round()
        };

        if rounded >= 1000.0 && index + 1 < UNITS.len() {
            continue;
        }

        return if rounded.fract() == 0.0 {
            format!("{}{}{}", sign, rounded as i64, suffix)
        } else {
            format!("{}{:.1}{}", sign, rounded, suffix)
        };
    }

    value.to_string()
}
