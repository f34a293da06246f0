//! GearItem - Catalog gear and the references that point at it

use crate::stat_block::AttributeSet;
use crate::types::{Attribute, CharacterClass};
use serde::{Deserialize, Deserializer, Serialize};

/// A piece of gear with its attribute bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    /// Catalog key
    #[serde(default)]
    pub key: String,
    /// Display name
    #[serde(default)]
    pub text: String,
    pub str: f64,
    pub con: f64,
    pub int: f64,
    pub per: f64,
    /// Class the item belongs to; non-class values (armoire, special, ...) map to none
    #[serde(default, rename = "klass", deserialize_with = "class_or_none")]
    pub owner_class: Option<CharacterClass>,
    #[serde(default, deserialize_with = "class_or_none")]
    pub special_class: Option<CharacterClass>,
}

impl GearItem {
    pub fn new(key: impl Into<String>, bonuses: AttributeSet) -> Self {
        GearItem {
            key: key.into(),
            text: String::new(),
            str: bonuses.str,
            con: bonuses.con,
            int: bonuses.int,
            per: bonuses.per,
            owner_class: None,
            special_class: None,
        }
    }

    pub fn with_owner_class(mut self, class: CharacterClass) -> Self {
        self.owner_class = Some(class);
        self
    }

    pub fn with_special_class(mut self, class: CharacterClass) -> Self {
        self.special_class = Some(class);
        self
    }

    /// Bonus this item grants to one attribute, before any class multiplier
    pub fn bonus(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Str => self.str,
            Attribute::Con => self.con,
            Attribute::Int => self.int,
            Attribute::Per => self.per,
        }
    }
}

/// Equipped gear as it appears in a snapshot
///
/// Upstream records carry catalog keys; hydration swaps them for items.
/// A key the catalog could not resolve stays a `Key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GearRef {
    Key(String),
    Item(GearItem),
}

impl GearRef {
    /// The resolved item, if hydration found one
    pub fn item(&self) -> Option<&GearItem> {
        match self {
            GearRef::Item(item) => Some(item),
            GearRef::Key(_) => None,
        }
    }

    /// Catalog key of the gear, resolved or not
    pub fn key(&self) -> &str {
        match self {
            GearRef::Key(key) => key,
            GearRef::Item(item) => &item.key,
        }
    }
}

fn class_or_none<'de, D>(deserializer: D) -> Result<Option<CharacterClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_gear() {
        let json = r#"{
            "key": "weapon_wizard_1",
            "text": "Apprentice Staff",
            "klass": "wizard",
            "type": "weapon",
            "str": 0, "con": 0, "int": 3, "per": 2
        }"#;

        let item: GearItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.owner_class, Some(CharacterClass::Wizard));
        assert_eq!(item.special_class, None);
        assert!((item.bonus(Attribute::Int) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_class_klass_is_none() {
        let json = r#"{
            "key": "armor_special_2",
            "klass": "special",
            "specialClass": "healer",
            "str": 0, "con": 10, "int": 0, "per": 0
        }"#;

        let item: GearItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.owner_class, None);
        assert_eq!(item.special_class, Some(CharacterClass::Healer));
    }

    #[test]
    fn test_missing_attribute_is_an_error() {
        let json = r#"{ "key": "broken", "str": 1, "con": 1, "int": 1 }"#;
        assert!(serde_json::from_str::<GearItem>(json).is_err());
    }

    #[test]
    fn test_gear_ref_variants() {
        let key: GearRef = serde_json::from_str("\"head_base_0\"").unwrap();
        assert_eq!(key, GearRef::Key("head_base_0".to_string()));
        assert!(key.item().is_none());

        let item: GearRef =
            serde_json::from_str(r#"{ "key": "k", "str": 1, "con": 0, "int": 0, "per": 0 }"#)
                .unwrap();
        assert_eq!(item.key(), "k");
        assert!(item.item().is_some());
    }
}
