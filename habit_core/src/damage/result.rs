//! DailyStats - Outcome of one daily damage simulation

use serde::{Deserialize, Serialize};

/// Forecast of damage from dailies left unfinished today
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Unfinished due dailies that will deal damage
    pub due_count: u32,
    /// Sum of per-task self damage, each already rounded to a tenth
    pub daily_damage_to_self: f64,
    /// Damage the boss deals to the whole party, rounded up to a tenth
    pub boss_damage: f64,
    /// Daily plus boss damage, rounded up to a tenth
    pub total_damage_to_self: f64,
    /// Unfinished due dailies skipped thanks to stealth
    pub dailies_evaded: u32,
}

impl DailyStats {
    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.due_count > 0 {
            parts.push(format!("{} dailies due", self.due_count));
        }

        if self.daily_damage_to_self > 0.0 {
            parts.push(format!("{:.1} damage from dailies", self.daily_damage_to_self));
        }

        if self.boss_damage > 0.0 {
            parts.push(format!("{:.1} boss damage to party", self.boss_damage));
        }

        if self.dailies_evaded > 0 {
            parts.push(format!("{} evaded", self.dailies_evaded));
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.push(format!("{:.1} total", self.total_damage_to_self));
            parts.join(", ")
        }
    }
}

/// Damage one daily contributes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskDamage {
    /// Curve damage after checklist credit, before mitigation
    pub raw: f64,
    /// Damage to the player, rounded to a tenth
    pub to_self: f64,
    /// Unrounded damage to the party, zero off a boss quest
    pub to_boss: f64,
}
