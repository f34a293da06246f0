//! GearSource - Attributes from equipped items

use crate::source::StatSource;
use crate::stat_block::constants::CLASS_GEAR_MULTIPLIER;
use crate::stat_block::StatAccumulator;
use crate::types::{Attribute, CharacterClass, EquipmentSlot};
use crate::user::GearItem;

/// Attributes from an equipped item
pub struct GearSource<'a> {
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    /// The equipped item
    pub item: &'a GearItem,
    /// Class of the character wearing it
    pub wearer: CharacterClass,
    class_multiplier: f64,
}

impl<'a> GearSource<'a> {
    /// Create a new gear source
    pub fn new(slot: EquipmentSlot, item: &'a GearItem, wearer: CharacterClass) -> Self {
        GearSource {
            slot,
            item,
            wearer,
            class_multiplier: CLASS_GEAR_MULTIPLIER,
        }
    }

    /// Override the multiplier for class-matched gear
    pub fn with_class_multiplier(mut self, multiplier: f64) -> Self {
        self.class_multiplier = multiplier;
        self
    }

    /// Whether the item belongs to the wearer's class, as owner or special class
    pub fn class_matches(&self) -> bool {
        self.item.owner_class == Some(self.wearer) || self.item.special_class == Some(self.wearer)
    }

    /// Multiplier applied to every attribute of this item
    pub fn multiplier(&self) -> f64 {
        if self.class_matches() {
            self.class_multiplier
        } else {
            1.0
        }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        &self.item.key
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let multiplier = self.multiplier();
        for attribute in Attribute::all() {
            *stats.armor.get_mut(*attribute) += self.item.bonus(*attribute) * multiplier;
        }
    }
}
