//! Prelude module for convenient imports
//!
//! ```rust
//! use habit_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{AttributeSet, DerivedStats};
pub use crate::types::{Attribute, CharacterClass, EquipmentSlot};
pub use crate::user::{GearItem, UserAttributes, UserSnapshot};

// Tasks
pub use crate::task::{todos_due_by, todos_due_today, Clock, Task, TaskType};

// Damage forecast
pub use crate::damage::{simulate, DailyStats};
pub use crate::defense::compute_constitution_bonus;
pub use crate::report::{build_report, combine};

// Content
pub use crate::content::{hydrate, ContentCatalog, ContentResolver};

// Errors
pub use crate::error::HabitError;
