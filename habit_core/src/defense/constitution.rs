//! Constitution bonus - Multiplier applied to self damage from missed dailies
//!
//! Formula: bonus = max(0.1, 1 - con / 250)
//!
//! Examples:
//! - 0 con: bonus = 1.0 (full damage)
//! - 50 con: bonus = 0.8
//! - 125 con: bonus = 0.5
//! - 225 con and above: bonus = 0.1 (floor)
//!
//! The formula is only floored, not capped: a negative constitution total
//! yields a bonus above 1.0.

use super::constants::{CONSTITUTION_DIVISOR, MIN_CONSTITUTION_BONUS};
use crate::config::ConstitutionConstants;

/// Calculate the constitution bonus with the game's constants
pub fn compute_constitution_bonus(total_con: f64) -> f64 {
    bonus(total_con, CONSTITUTION_DIVISOR, MIN_CONSTITUTION_BONUS)
}

/// Calculate the constitution bonus with custom constants
pub fn constitution_bonus_with(total_con: f64, constants: &ConstitutionConstants) -> f64 {
    bonus(total_con, constants.divisor, constants.min_bonus)
}

fn bonus(total_con: f64, divisor: f64, floor: f64) -> f64 {
    let bonus = 1.0 - total_con / divisor;
    // Written as a comparison so NaN propagates instead of collapsing to the floor
    if bonus < floor {
        floor
    } else {
        bonus
    }
}
