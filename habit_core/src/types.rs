//! Core types shared across the stat and damage pipelines

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four character attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Str,
    Con,
    Int,
    Per,
}

impl Attribute {
    /// Get all attributes in canonical order
    pub fn all() -> &'static [Attribute] {
        &[Attribute::Str, Attribute::Con, Attribute::Int, Attribute::Per]
    }

    /// Short upstream key for this attribute
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Str => "str",
            Attribute::Con => "con",
            Attribute::Int => "int",
            Attribute::Per => "per",
        }
    }
}

/// Character class
///
/// `Wizard` is the internal id of the class players see as "mage".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Warrior,
    #[serde(alias = "mage")]
    Wizard,
    Rogue,
    Healer,
}

impl CharacterClass {
    /// Name shown to players. Never used in formulas.
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Wizard => "mage",
            CharacterClass::Rogue => "rogue",
            CharacterClass::Healer => "healer",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warrior" => Ok(CharacterClass::Warrior),
            "wizard" | "mage" => Ok(CharacterClass::Wizard),
            "rogue" => Ok(CharacterClass::Rogue),
            "healer" => Ok(CharacterClass::Healer),
            other => Err(format!("unknown character class: {}", other)),
        }
    }
}

/// Equipment slot for gear
///
/// Ordered so that gear is always summed in the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Head,
    Armor,
    Back,
    Body,
    Eyewear,
    HeadAccessory,
}
