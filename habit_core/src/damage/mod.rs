//! Daily damage - Forecast of damage from unfinished dailies

mod calculation;
mod result;
mod simulation;

pub use calculation::{
    apply_checklist_credit, boss_damage_contribution, ceil_to_tenth, clamp_task_value,
    raw_task_damage, round_to_tenth, self_damage,
};
pub use result::{DailyStats, TaskDamage};
pub use simulation::{simulate, DailyDamageSimulator};

/// Daily damage constants
pub mod constants {
    /// Lowest task value the damage curve sees
    pub const TASK_VALUE_MIN: f64 = -47.27;

    /// Highest task value the damage curve sees
    pub const TASK_VALUE_MAX: f64 = 21.27;

    /// Damage curve: raw damage = |DECAY_BASE ^ value|
    /// Lower (redder) task values produce more damage.
    pub const DECAY_BASE: f64 = 0.9747;

    /// Self damage per task = raw × constitution bonus × priority × SELF_DAMAGE_MULTIPLIER
    pub const SELF_DAMAGE_MULTIPLIER: f64 = 2.0;
}
