//! UserSnapshot - Typed form of the upstream user record

use super::{GearRef, UserAttributes};
use crate::error::{HabitError, Result};
use crate::stat_block::AttributeSet;
use crate::types::{CharacterClass, EquipmentSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user record as delivered upstream
///
/// Sections the public member endpoint omits are optional; accessors that
/// need them fail with `HabitError::MissingField` instead of defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    /// Gem balance, in units of four gems
    pub balance: Option<f64>,
    pub purchased: Option<Purchased>,
    pub stats: UserStats,
    pub profile: Profile,
    pub items: Items,
    pub preferences: Option<Preferences>,
    pub party: Option<Party>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Gold
    pub gp: f64,
    pub lvl: u32,
    pub class: CharacterClass,
    pub exp: f64,
    pub to_next_level: f64,
    pub mp: f64,
    #[serde(rename = "maxMP")]
    pub max_mp: f64,
    pub hp: f64,
    pub max_health: f64,
    pub str: f64,
    pub con: f64,
    pub int: f64,
    pub per: f64,
    pub buffs: StatBuffs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBuffs {
    pub str: f64,
    pub con: f64,
    pub int: f64,
    pub per: f64,
    /// Stealth charges; absent upstream when the rogue skill was never cast
    #[serde(default)]
    pub stealth: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Bio, may contain markdown
    pub blurb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items {
    pub gear: Gear,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    #[serde(default)]
    pub equipped: BTreeMap<EquipmentSlot, GearRef>,
    #[serde(default)]
    pub costume: BTreeMap<EquipmentSlot, GearRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Show the costume instead of the battle gear
    #[serde(default)]
    pub costume: bool,
    /// Resting in the inn
    #[serde(default)]
    pub sleep: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub quest: Quest,
}

/// The party's current quest, key upstream and content after hydration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub key: Option<String>,
    pub data: Option<QuestContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestContent {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub text: String,
    pub boss: Option<Boss>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    #[serde(default)]
    pub name: String,
    pub hp: Option<f64>,
    /// Strength: scales party damage from missed dailies
    pub str: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchased {
    pub plan: Plan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub consecutive: Consecutive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consecutive {
    /// Mystic hourglasses
    pub trinkets: u32,
}

impl UserSnapshot {
    /// Parse a bare user record
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attribute inputs for the stat aggregator, resolved gear only
    pub fn attributes(&self) -> UserAttributes {
        let buffs = &self.stats.buffs;
        let mut attrs = UserAttributes::new(self.stats.class, self.stats.lvl)
            .with_points(AttributeSet::new(
                self.stats.str,
                self.stats.con,
                self.stats.int,
                self.stats.per,
            ))
            .with_buffs(AttributeSet::new(buffs.str, buffs.con, buffs.int, buffs.per))
            .with_stealth(buffs.stealth);

        for (slot, gear) in &self.items.gear.equipped {
            match gear.item() {
                Some(item) => attrs = attrs.with_gear(*slot, item.clone()),
                None => tracing::debug!(
                    "gear {} in slot {:?} is unresolved and contributes nothing",
                    gear.key(),
                    slot
                ),
            }
        }

        attrs
    }

    /// The party section, required once quest state is consulted
    pub fn party(&self) -> Result<&Party> {
        self.party.as_ref().ok_or(HabitError::MissingField("party"))
    }
}
