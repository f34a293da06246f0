//! Per-task damage formulas

use crate::config::TaskDamageConstants;
use crate::task::ChecklistItem;

/// Clamp a task value into the curve's bounds; NaN passes through
pub fn clamp_task_value(value: f64, constants: &TaskDamageConstants) -> f64 {
    let value = if value < constants.value_min {
        constants.value_min
    } else {
        value
    };
    if value > constants.value_max {
        constants.value_max
    } else {
        value
    }
}

/// Damage fraction for a task value: |decay_base ^ clamped value|
pub fn raw_task_damage(value: f64, constants: &TaskDamageConstants) -> f64 {
    constants
        .decay_base
        .powf(clamp_task_value(value, constants))
        .abs()
}

/// Reduce damage by one equal share per completed checklist entry
///
/// The share is fixed from the unadjusted damage and subtracted once per
/// completed entry. The result is not clamped and can dip below zero
/// when every entry is complete.
pub fn apply_checklist_credit(raw_damage: f64, checklist: &[ChecklistItem]) -> f64 {
    if checklist.is_empty() {
        return raw_damage;
    }

    let share = raw_damage / checklist.len() as f64;
    let mut damage = raw_damage;
    for item in checklist {
        if item.completed {
            damage -= share;
        }
    }
    damage
}

/// Damage to the player from one task, rounded to a tenth
pub fn self_damage(
    raw_damage: f64,
    constitution_bonus: f64,
    priority: f64,
    constants: &TaskDamageConstants,
) -> f64 {
    round_to_tenth(raw_damage * constitution_bonus * priority * constants.self_damage_multiplier)
}

/// Party damage from one task: trivial tasks scale down, boss strength scales up
///
/// Uses the unmitigated damage; the player's constitution does not shield
/// the party.
pub fn boss_damage_contribution(raw_damage: f64, priority: f64, boss_strength: f64) -> f64 {
    let damage = if priority < 1.0 {
        raw_damage * priority
    } else {
        raw_damage
    };
    damage * boss_strength
}

/// Round to the nearest tenth, halves toward positive infinity
pub fn round_to_tenth(x: f64) -> f64 {
    let scaled = x * 10.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / 10.0
}

/// Round up to the next tenth
pub fn ceil_to_tenth(x: f64) -> f64 {
    (x * 10.0).ceil() / 10.0
}
