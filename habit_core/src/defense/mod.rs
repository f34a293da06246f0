//! Defense system - Constitution mitigation against daily damage

mod constitution;

pub use constitution::{compute_constitution_bonus, constitution_bonus_with};

/// Defense calculation constants
pub mod constants {
    /// Constitution needed to cancel all damage before the floor applies
    /// Formula: bonus = max(MIN_CONSTITUTION_BONUS, 1 - con / CONSTITUTION_DIVISOR)
    pub const CONSTITUTION_DIVISOR: f64 = 250.0;

    /// Mitigation never drops self damage below this fraction
    pub const MIN_CONSTITUTION_BONUS: f64 = 0.1;
}
