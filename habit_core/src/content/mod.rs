//! Content - Resolving catalog keys in upstream records
//!
//! Upstream user records reference gear and quests by key. Hydration swaps
//! each key for its catalog entry; keys the resolver does not know are left
//! as they are and simply contribute nothing downstream.

mod catalog;

pub use catalog::{ContentCatalog, GearCatalog};

use crate::types::EquipmentSlot;
use crate::user::{GearItem, GearRef, QuestContent, UserSnapshot};
use std::collections::BTreeMap;

/// Lookup of static game content by key
pub trait ContentResolver {
    fn lookup_gear(&self, key: &str) -> Option<GearItem>;

    fn lookup_quest(&self, key: &str) -> Option<QuestContent>;
}

/// Resolve the gear and quest keys of a snapshot
///
/// Already resolved entries are kept. A party quest the resolver does not
/// know leaves the user off-quest.
pub fn hydrate(mut user: UserSnapshot, resolver: &impl ContentResolver) -> UserSnapshot {
    hydrate_gear(&mut user.items.gear.equipped, resolver);
    hydrate_gear(&mut user.items.gear.costume, resolver);

    if let Some(party) = user.party.as_mut() {
        let quest = &mut party.quest;
        if quest.data.is_none() {
            if let Some(key) = quest.key.as_deref() {
                quest.data = resolver.lookup_quest(key);
                if quest.data.is_none() {
                    tracing::warn!(
                        "quest {} not found in content, treating user as off-quest",
                        key
                    );
                }
            }
        }
    }

    user
}

fn hydrate_gear(slots: &mut BTreeMap<EquipmentSlot, GearRef>, resolver: &impl ContentResolver) {
    for (slot, gear) in slots.iter_mut() {
        let GearRef::Key(key) = gear else {
            continue;
        };

        match resolver.lookup_gear(key) {
            Some(mut item) => {
                if item.key.is_empty() {
                    item.key = key.clone();
                }
                *gear = GearRef::Item(item);
            }
            None => tracing::debug!("gear {} in slot {:?} not found in content", key, slot),
        }
    }
}
