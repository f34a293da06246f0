//! habit_core - Character stats and daily damage forecasting for habit-tracker players
//!
//! This library provides:
//! - DerivedStats: Attribute totals aggregated from points, buffs, gear and level
//! - Constitution bonus: Mitigation multiplier against daily damage
//! - DailyStats: Forecast of damage from unfinished dailies (self and party boss)
//! - Todo filtering: Todos due by a deadline or by the end of today
//! - Snapshot model and content catalog for hydrating upstream user records

pub mod config;
pub mod content;
pub mod damage;
pub mod defense;
pub mod error;
pub mod prelude;
pub mod report;
pub mod source;
pub mod stat_block;
pub mod task;
pub mod types;
pub mod user;

// Re-export core types for convenience
pub use config::{default_constants, ConfigError, GameConstants};
pub use content::{hydrate, ContentCatalog, ContentResolver};
pub use damage::{simulate, DailyDamageSimulator, DailyStats};
pub use defense::compute_constitution_bonus;
pub use error::HabitError;
pub use report::{build_report, combine, Reporter, UserReport};
pub use source::{BuffSource, GearSource, LevelSource, PointsSource, StatSource};
pub use stat_block::{
    compute_derived_stats, AttributeSet, DerivedStats, StatAccumulator, StatAggregator,
};
pub use task::{
    parse_tasks, todos_due_by, todos_due_today, ChecklistItem, Clock, FixedClock, SystemClock, Task,
    TaskType,
};
pub use types::{Attribute, CharacterClass, EquipmentSlot};
pub use user::{Boss, GearItem, GearRef, QuestContent, UserAttributes, UserSnapshot};
