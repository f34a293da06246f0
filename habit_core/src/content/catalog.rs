//! ContentCatalog - Static game content loaded from the content endpoint

use super::ContentResolver;
use crate::error::Result;
use crate::user::{GearItem, QuestContent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The parts of the game content that hydration reads
///
/// Every other content section is ignored on parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub gear: GearCatalog,
    #[serde(default)]
    pub quests: HashMap<String, QuestContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearCatalog {
    /// Every gear item keyed by its catalog key
    #[serde(default)]
    pub flat: HashMap<String, GearItem>,
}

impl ContentCatalog {
    /// Parse a bare content document
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: ContentCatalog = serde_json::from_str(json)?;
        tracing::debug!(
            "loaded content: {} gear items, {} quests",
            catalog.gear.flat.len(),
            catalog.quests.len()
        );
        Ok(catalog)
    }

    pub fn insert_gear(&mut self, item: GearItem) {
        self.gear.flat.insert(item.key.clone(), item);
    }

    pub fn insert_quest(&mut self, quest: QuestContent) {
        self.quests.insert(quest.key.clone(), quest);
    }

    pub fn is_empty(&self) -> bool {
        self.gear.flat.is_empty() && self.quests.is_empty()
    }
}

impl ContentResolver for ContentCatalog {
    fn lookup_gear(&self, key: &str) -> Option<GearItem> {
        self.gear.flat.get(key).cloned()
    }

    fn lookup_quest(&self, key: &str) -> Option<QuestContent> {
        self.quests.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterClass;

    const CONTENT_JSON: &str = r#"{
        "gear": {
            "flat": {
                "weapon_warrior_1": {
                    "key": "weapon_warrior_1", "text": "Training Sword", "klass": "warrior",
                    "type": "weapon", "value": 20, "str": 3, "con": 0, "int": 0, "per": 0
                },
                "armor_armoire_gladiator": {
                    "key": "armor_armoire_gladiator", "klass": "armoire",
                    "str": 7, "con": 0, "int": 0, "per": 0
                }
            },
            "tree": {}
        },
        "quests": {
            "dilatory": {
                "key": "dilatory", "text": "The Dread Drag'on of Dilatory",
                "boss": { "name": "Dread Drag'on", "hp": 5000000, "str": 1, "def": 1 }
            },
            "moonstone1": { "key": "moonstone1", "text": "Recidivate, Part 1" }
        },
        "spells": {}
    }"#;

    #[test]
    fn test_parse_content_document() {
        let catalog = ContentCatalog::from_json(CONTENT_JSON).unwrap();

        let sword = catalog.lookup_gear("weapon_warrior_1").unwrap();
        assert_eq!(sword.owner_class, Some(CharacterClass::Warrior));
        assert!((sword.str - 3.0).abs() < f64::EPSILON);

        let armoire = catalog.lookup_gear("armor_armoire_gladiator").unwrap();
        assert_eq!(armoire.owner_class, None);
    }

    #[test]
    fn test_collection_quest_has_no_boss() {
        let catalog = ContentCatalog::from_json(CONTENT_JSON).unwrap();
        assert!(catalog.lookup_quest("moonstone1").unwrap().boss.is_none());
        let boss = catalog.lookup_quest("dilatory").unwrap().boss.unwrap();
        assert!((boss.str - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_key_is_none() {
        let catalog = ContentCatalog::from_json(CONTENT_JSON).unwrap();
        assert!(catalog.lookup_gear("shield_base_0").is_none());
        assert!(catalog.lookup_quest("vice1").is_none());
    }

    #[test]
    fn test_empty_document() {
        let catalog = ContentCatalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
