//! Computed/derived values for DerivedStats

use super::DerivedStats;
use crate::config::ConstitutionConstants;
use crate::defense::{compute_constitution_bonus, constitution_bonus_with};
use crate::types::Attribute;

impl DerivedStats {
    /// Total value of a single attribute
    pub fn total(&self, attribute: Attribute) -> f64 {
        self.totals.get(attribute)
    }

    /// Mitigation multiplier against daily damage from total constitution
    pub fn constitution_bonus(&self) -> f64 {
        compute_constitution_bonus(self.totals.con)
    }

    /// Constitution bonus under custom constants
    pub fn constitution_bonus_with(&self, constants: &ConstitutionConstants) -> f64 {
        constitution_bonus_with(self.totals.con, constants)
    }
}
