//! Plain-text report layout

use chrono::{DateTime, Utc};
use habit_core::{report::UserReport, Attribute, UserSnapshot};
use std::fmt::{self, Write};

/// Write the report as text
pub fn text(
    out: &mut impl Write,
    user: &UserSnapshot,
    report: &UserReport,
    deadline: DateTime<Utc>,
) -> fmt::Result {
    writeln!(
        out,
        "{} - level {} {}",
        user.display_name(),
        user.level(),
        user.class_display_name()
    )?;
    writeln!(
        out,
        "  HP {}/{}  MP {}/{}  XP {}/{}  Gold {}",
        user.health(),
        user.health_max(),
        user.mana(),
        user.mana_max(),
        user.experience(),
        user.experience_to_level(),
        user.gold_compact()
    )?;
    if let Some(bio) = user.bio() {
        writeln!(out, "  {}", bio)?;
    }
    if let Ok(true) = user.is_on_quest() {
        let kind = match user.is_on_boss_quest() {
            Ok(true) => "boss quest",
            _ => "quest",
        };
        let name = user
            .quest()
            .ok()
            .and_then(|quest| quest.data.as_ref())
            .map(|data| data.text.as_str())
            .unwrap_or_default();
        writeln!(out, "  On a {}: {}", kind, name)?;
    }
    if let Ok(true) = user.is_sleeping() {
        writeln!(out, "  Resting in the inn")?;
    }

    writeln!(out, "\nAttributes (level bonus {})", report.derived.level_bonus)?;
    for attribute in Attribute::all() {
        writeln!(
            out,
            "  {:<4} {:>7.1}  (gear {:.1}, buffs {:.1}, points {:.1})",
            attribute.key().to_uppercase(),
            report.derived.totals.get(*attribute),
            report.derived.armor.get(*attribute),
            report.derived.buffs.get(*attribute),
            report.derived.points.get(*attribute)
        )?;
    }
    writeln!(out, "  Constitution bonus {:.3}", report.constitution_bonus)?;

    writeln!(out, "\nDailies")?;
    writeln!(out, "  {}", report.daily.summary())?;

    writeln!(out, "\nTodos due before {}", deadline.to_rfc3339())?;
    if report.todos_due.is_empty() {
        writeln!(out, "  none")?;
    }
    for todo in &report.todos_due {
        let due = todo.date.map(|date| date.to_rfc3339()).unwrap_or_default();
        writeln!(out, "  - {} ({})", todo.text, due)?;
    }

    Ok(())
}
