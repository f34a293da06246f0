//! Game constants configuration

use super::ConfigError;
use crate::damage::constants::{
    DECAY_BASE, SELF_DAMAGE_MULTIPLIER, TASK_VALUE_MAX, TASK_VALUE_MIN,
};
use crate::defense::constants::{CONSTITUTION_DIVISOR, MIN_CONSTITUTION_BONUS};
use crate::stat_block::constants::{CLASS_GEAR_MULTIPLIER, LEVEL_BONUS_DIVISOR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub task_damage: TaskDamageConstants,
    #[serde(default)]
    pub constitution: ConstitutionConstants,
    #[serde(default)]
    pub attributes: AttributeConstants,
}

impl GameConstants {
    /// Load and validate constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse and validate constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject combinations the formulas cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let td = &self.task_damage;
        if !(td.value_min <= td.value_max) {
            return Err(ConfigError::ValidationError(format!(
                "task_damage.value_min ({}) must not exceed value_max ({})",
                td.value_min, td.value_max
            )));
        }
        if !(td.decay_base > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "task_damage.decay_base must be positive, got {}",
                td.decay_base
            )));
        }
        if !(self.constitution.divisor > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "constitution.divisor must be positive, got {}",
                self.constitution.divisor
            )));
        }
        if !(0.0..=1.0).contains(&self.constitution.min_bonus) {
            return Err(ConfigError::ValidationError(format!(
                "constitution.min_bonus must lie in [0, 1], got {}",
                self.constitution.min_bonus
            )));
        }
        if self.attributes.level_bonus_divisor == 0 {
            return Err(ConfigError::ValidationError(
                "attributes.level_bonus_divisor must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDamageConstants {
    /// Lower bound on task value before the damage curve
    #[serde(default = "default_value_min")]
    pub value_min: f64,
    /// Upper bound on task value before the damage curve
    #[serde(default = "default_value_max")]
    pub value_max: f64,
    /// Damage curve base: damage = |decay_base ^ value|
    #[serde(default = "default_decay_base")]
    pub decay_base: f64,
    #[serde(default = "default_self_damage_multiplier")]
    pub self_damage_multiplier: f64,
}

impl Default for TaskDamageConstants {
    fn default() -> Self {
        TaskDamageConstants {
            value_min: TASK_VALUE_MIN,
            value_max: TASK_VALUE_MAX,
            decay_base: DECAY_BASE,
            self_damage_multiplier: SELF_DAMAGE_MULTIPLIER,
        }
    }
}

fn default_value_min() -> f64 {
    TASK_VALUE_MIN
}
fn default_value_max() -> f64 {
    TASK_VALUE_MAX
}
fn default_decay_base() -> f64 {
    DECAY_BASE
}
fn default_self_damage_multiplier() -> f64 {
    SELF_DAMAGE_MULTIPLIER
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstitutionConstants {
    /// Formula: bonus = max(min_bonus, 1 - con / divisor)
    #[serde(default = "default_divisor")]
    pub divisor: f64,
    #[serde(default = "default_min_bonus")]
    pub min_bonus: f64,
}

impl Default for ConstitutionConstants {
    fn default() -> Self {
        ConstitutionConstants {
            divisor: CONSTITUTION_DIVISOR,
            min_bonus: MIN_CONSTITUTION_BONUS,
        }
    }
}

fn default_divisor() -> f64 {
    CONSTITUTION_DIVISOR
}
fn default_min_bonus() -> f64 {
    MIN_CONSTITUTION_BONUS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeConstants {
    /// Every attribute gains floor(level / divisor)
    #[serde(default = "default_level_bonus_divisor")]
    pub level_bonus_divisor: u32,
    /// Multiplier for gear whose class matches the wearer
    #[serde(default = "default_class_gear_multiplier")]
    pub class_gear_multiplier: f64,
}

impl Default for AttributeConstants {
    fn default() -> Self {
        AttributeConstants {
            level_bonus_divisor: LEVEL_BONUS_DIVISOR,
            class_gear_multiplier: CLASS_GEAR_MULTIPLIER,
        }
    }
}

fn default_level_bonus_divisor() -> u32 {
    LEVEL_BONUS_DIVISOR
}
fn default_class_gear_multiplier() -> f64 {
    CLASS_GEAR_MULTIPLIER
}
