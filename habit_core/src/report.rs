//! Report - Explicit entry points joining a snapshot with its task list
//!
//! Nothing here caches; every call re-derives from the inputs it is given.

use crate::config::GameConstants;
use crate::damage::{DailyDamageSimulator, DailyStats};
use crate::error::Result;
use crate::stat_block::{DerivedStats, StatAggregator};
use crate::task::{todos_due_by, Clock, Task};
use crate::user::UserSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything derived for one user at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub derived: DerivedStats,
    pub constitution_bonus: f64,
    pub daily: DailyStats,
    /// Todos due before the report deadline, in list order
    pub todos_due: Vec<Task>,
}

/// Runs the full derivation under one set of constants
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    constants: GameConstants,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: GameConstants) -> Self {
        Reporter { constants }
    }

    pub fn derived_stats(&self, user: &UserSnapshot) -> DerivedStats {
        StatAggregator::with_constants(self.constants.attributes.clone())
            .aggregate(&user.attributes())
    }

    /// Forecast today's daily damage for a user
    ///
    /// Fails with `MissingField("party")` when the snapshot has no party section.
    pub fn combine(&self, user: &UserSnapshot, tasks: &[Task]) -> Result<DailyStats> {
        let derived = self.derived_stats(user);
        let constitution_bonus = derived.constitution_bonus_with(&self.constants.constitution);
        self.simulate(user, tasks, constitution_bonus)
    }

    fn simulate(
        &self,
        user: &UserSnapshot,
        tasks: &[Task],
        constitution_bonus: f64,
    ) -> Result<DailyStats> {
        let boss_strength = user.boss_strength()?;

        let simulator = DailyDamageSimulator::with_constants(self.constants.task_damage.clone());
        Ok(simulator.simulate(tasks, user.stealth(), constitution_bonus, boss_strength))
    }

    /// Full report with todos due before `deadline`
    pub fn report_by(
        &self,
        user: &UserSnapshot,
        tasks: &[Task],
        deadline: DateTime<Utc>,
    ) -> Result<UserReport> {
        let derived = self.derived_stats(user);
        let constitution_bonus = derived.constitution_bonus_with(&self.constants.constitution);
        let daily = self.simulate(user, tasks, constitution_bonus)?;
        let todos_due = todos_due_by(tasks, deadline).into_iter().cloned().collect();

        Ok(UserReport {
            derived,
            constitution_bonus,
            daily,
            todos_due,
        })
    }

    /// Full report with todos due by the end of the clock's day
    pub fn report(
        &self,
        user: &UserSnapshot,
        tasks: &[Task],
        clock: &impl Clock,
    ) -> Result<UserReport> {
        self.report_by(user, tasks, clock.end_of_day())
    }
}

/// Forecast today's daily damage with the game's default constants
pub fn combine(user: &UserSnapshot, tasks: &[Task]) -> Result<DailyStats> {
    Reporter::new().combine(user, tasks)
}

/// Build a full report with the game's default constants
pub fn build_report(user: &UserSnapshot, tasks: &[Task], clock: &impl Clock) -> Result<UserReport> {
    Reporter::new().report(user, tasks, clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitError;
    use crate::task::{FixedClock, TaskType};
    use crate::user::fixtures::{MEMBER_JSON, OWN_USER_JSON};
    use crate::user::{Boss, QuestContent};
    use chrono::{Duration, TimeZone};

    fn on_boss_quest(strength: f64) -> UserSnapshot {
        let mut user = UserSnapshot::from_json(OWN_USER_JSON).unwrap();
        if let Some(party) = user.party.as_mut() {
            party.quest.data = Some(QuestContent {
                key: "vice1".to_string(),
                text: "Vice, Part 1".to_string(),
                boss: Some(Boss {
                    name: "Vice's Shade".to_string(),
                    hp: Some(750.0),
                    str: strength,
                }),
            });
        }
        user
    }

    fn two_dailies() -> Vec<Task> {
        vec![
            Task::due_daily(0.0, 1.0).with_text("first"),
            Task::due_daily(0.0, 1.0).with_text("second"),
        ]
    }

    #[test]
    fn test_combine_uses_stealth_and_constitution() {
        let user = UserSnapshot::from_json(OWN_USER_JSON).unwrap();
        // con 3 points + 5 level bonus = 8 -> bonus 0.968
        let stats = combine(&user, &two_dailies()).unwrap();

        assert_eq!(stats.dailies_evaded, 1);
        assert_eq!(stats.due_count, 1);
        // 1.0 × 0.968 × 1 × 2 = 1.936 -> 1.9
        assert!((stats.daily_damage_to_self - 1.9).abs() < 1e-9);
        assert_eq!(stats.boss_damage, 0.0);
    }

    #[test]
    fn test_combine_on_boss_quest() {
        let user = on_boss_quest(0.5);
        let stats = combine(&user, &two_dailies()).unwrap();

        assert!((stats.boss_damage - 0.5).abs() < 1e-9);
        assert!((stats.total_damage_to_self - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_combine_without_party_fails() {
        let user = UserSnapshot::from_json(MEMBER_JSON).unwrap();
        assert!(matches!(
            combine(&user, &two_dailies()),
            Err(HabitError::MissingField("party"))
        ));
    }

    #[test]
    fn test_combine_reflects_new_inputs() {
        let mut user = UserSnapshot::from_json(OWN_USER_JSON).unwrap();
        let before = combine(&user, &two_dailies()).unwrap();

        user.stats.buffs.stealth = 2;
        let after = combine(&user, &two_dailies()).unwrap();

        assert_eq!(before.dailies_evaded, 1);
        assert_eq!(after.dailies_evaded, 2);
        assert_eq!(after.total_damage_to_self, 0.0);
    }

    #[test]
    fn test_report_collects_todos_due_today() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let clock = FixedClock::utc(now);

        let mut tasks = two_dailies();
        tasks.push(
            Task::new(TaskType::Todo)
                .with_text("today")
                .with_date(now + Duration::hours(3)),
        );
        tasks.push(
            Task::new(TaskType::Todo)
                .with_text("next week")
                .with_date(now + Duration::days(7)),
        );
        tasks.push(Task::new(TaskType::Todo).with_text("undated"));

        let user = on_boss_quest(1.0);
        let report = build_report(&user, &tasks, &clock).unwrap();

        assert_eq!(report.todos_due.len(), 1);
        assert_eq!(report.todos_due[0].text, "today");
        assert!((report.constitution_bonus - 0.968).abs() < 1e-9);
        assert_eq!(report.derived.level_bonus, 5);
        assert_eq!(report.daily, combine(&user, &tasks).unwrap());
    }

    #[test]
    fn test_report_with_custom_constants() {
        let mut constants = GameConstants::default();
        constants.attributes.level_bonus_divisor = 10;
        let reporter = Reporter::with_constants(constants);

        let user = UserSnapshot::from_json(OWN_USER_JSON).unwrap();
        let deadline = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = reporter.report_by(&user, &[], deadline).unwrap();

        assert_eq!(report.derived.level_bonus, 1);
        // con 3 + 1 = 4 -> 1 - 4/250
        assert!((report.constitution_bonus - 0.984).abs() < 1e-9);
        assert_eq!(report.daily, DailyStats::default());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let user = UserSnapshot::from_json(OWN_USER_JSON).unwrap();
        let deadline = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = Reporter::new().report_by(&user, &[], deadline).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("constitutionBonus").is_some());
        assert!(json.get("todosDue").is_some());
        assert!(json["derived"].get("levelBonus").is_some());
    }
}
