//! BuffSource - Temporary attribute buffs

use crate::source::StatSource;
use crate::stat_block::{AttributeSet, StatAccumulator};

/// Temporary buffs (spells, food, items) active on the character
///
/// Stealth charges live beside the attribute buffs upstream but do not
/// contribute to attributes; the damage simulator consumes them instead.
#[derive(Debug, Clone)]
pub struct BuffSource {
    pub buffs: AttributeSet,
}

impl BuffSource {
    pub fn new(buffs: AttributeSet) -> Self {
        BuffSource { buffs }
    }
}

impl StatSource for BuffSource {
    fn id(&self) -> &str {
        "buffs"
    }

    fn priority(&self) -> i32 {
        200 // Buffs apply last
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.buffs += self.buffs;
    }
}
