//! DailyDamageSimulator - Single ordered pass over the task list
//!
//! Steps per task:
//! 1. Skip anything that is not an unfinished daily due today
//! 2. Spend a stealth charge if one is left (first come, first evaded)
//! 3. Curve the clamped task value into raw damage, minus checklist credit
//! 4. Self damage: raw × constitution bonus × priority × 2, rounded to a tenth
//! 5. Boss damage (on a boss quest): raw, scaled by priority below 1, × boss strength
//!
//! Boss damage accumulates unrounded; the totals are rounded up at the end.

use super::calculation::{
    apply_checklist_credit, boss_damage_contribution, ceil_to_tenth, raw_task_damage, self_damage,
};
use super::result::{DailyStats, TaskDamage};
use crate::config::TaskDamageConstants;
use crate::task::Task;

/// Forecasts damage from unfinished dailies
#[derive(Debug, Clone, Default)]
pub struct DailyDamageSimulator {
    constants: TaskDamageConstants,
}

impl DailyDamageSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: TaskDamageConstants) -> Self {
        DailyDamageSimulator { constants }
    }

    /// Damage a single daily deals if left undone, ignoring stealth
    pub fn task_damage(
        &self,
        task: &Task,
        constitution_bonus: f64,
        boss_strength: Option<f64>,
    ) -> TaskDamage {
        let raw = apply_checklist_credit(
            raw_task_damage(task.value, &self.constants),
            &task.checklist,
        );

        TaskDamage {
            raw,
            to_self: self_damage(raw, constitution_bonus, task.priority, &self.constants),
            to_boss: boss_strength
                .map(|strength| boss_damage_contribution(raw, task.priority, strength))
                .unwrap_or(0.0),
        }
    }

    /// Run the forecast
    ///
    /// `boss_strength` is `Some` exactly when the user is on a boss quest.
    /// Stealth charges are consumed by the first eligible dailies in list order.
    pub fn simulate(
        &self,
        tasks: &[Task],
        stealth_charges: u32,
        constitution_bonus: f64,
        boss_strength: Option<f64>,
    ) -> DailyStats {
        let mut stats = DailyStats::default();
        let mut stealth_remaining = stealth_charges;

        for task in tasks.iter().filter(|task| task.is_unfinished_due_daily()) {
            if stealth_remaining > 0 {
                stealth_remaining -= 1;
                stats.dailies_evaded += 1;
                tracing::debug!(
                    "daily '{}' evaded, {} stealth left",
                    task.text,
                    stealth_remaining
                );
                continue;
            }

            stats.due_count += 1;

            let damage = self.task_damage(task, constitution_bonus, boss_strength);
            stats.daily_damage_to_self += damage.to_self;
            if boss_strength.is_some() {
                stats.boss_damage += damage.to_boss;
            }

            tracing::debug!(
                "daily '{}' (value {}, priority {}) deals {} to self, {} to party",
                task.text,
                task.value,
                task.priority,
                damage.to_self,
                damage.to_boss
            );
        }

        stats.total_damage_to_self = ceil_to_tenth(stats.daily_damage_to_self + stats.boss_damage);
        stats.boss_damage = ceil_to_tenth(stats.boss_damage);

        stats
    }
}

/// Run the forecast with the game's default constants
pub fn simulate(
    tasks: &[Task],
    stealth_charges: u32,
    constitution_bonus: f64,
    boss_strength: Option<f64>,
) -> DailyStats {
    DailyDamageSimulator::new().simulate(tasks, stealth_charges, constitution_bonus, boss_strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskType;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_single_daily() {
        let tasks = vec![Task::due_daily(0.0, 1.0)];
        let stats = simulate(&tasks, 0, 1.0, None);

        assert_eq!(stats.due_count, 1);
        assert_eq!(stats.daily_damage_to_self, 2.0);
        assert_eq!(stats.boss_damage, 0.0);
        assert_eq!(stats.total_damage_to_self, 2.0);
        assert_eq!(stats.dailies_evaded, 0);
    }

    #[test]
    fn test_only_unfinished_due_dailies_count() {
        let tasks = vec![
            Task::new(TaskType::Habit).with_value(-40.0),
            Task::new(TaskType::Todo).with_value(-40.0).with_due(true),
            Task::new(TaskType::Reward).with_value(-40.0),
            Task::due_daily(-40.0, 2.0).with_completed(true),
            Task::new(TaskType::Daily).with_value(-40.0),
        ];

        assert_eq!(simulate(&tasks, 0, 1.0, Some(2.0)), DailyStats::default());
    }

    #[test]
    fn test_stealth_consumed_in_list_order() {
        let a = Task::due_daily(-20.0, 2.0).with_text("A");
        let b = Task::due_daily(-10.0, 1.5).with_text("B");
        let c = Task::due_daily(5.0, 1.0).with_text("C");
        let tasks = vec![a, b, c.clone()];

        let stats = simulate(&tasks, 2, 0.9, None);
        assert_eq!(stats.dailies_evaded, 2);
        assert_eq!(stats.due_count, 1);
        // Only C contributes
        assert_eq!(
            stats,
            DailyStats {
                dailies_evaded: 2,
                ..simulate(&[c], 0, 0.9, None)
            }
        );
    }

    #[test]
    fn test_completed_dailies_do_not_use_stealth() {
        let tasks = vec![
            Task::due_daily(0.0, 1.0).with_completed(true),
            Task::due_daily(0.0, 1.0),
        ];
        let stats = simulate(&tasks, 1, 1.0, None);
        assert_eq!(stats.dailies_evaded, 1);
        assert_eq!(stats.due_count, 0);
        assert_eq!(stats.total_damage_to_self, 0.0);
    }

    #[test]
    fn test_more_stealth_than_dailies() {
        let tasks = vec![Task::due_daily(0.0, 1.0), Task::due_daily(-5.0, 1.0)];
        let stats = simulate(&tasks, 10, 1.0, Some(3.0));
        assert_eq!(stats.dailies_evaded, 2);
        assert_eq!(stats.due_count, 0);
        assert_eq!(stats.boss_damage, 0.0);
    }

    #[test]
    fn test_value_clamped_before_curve() {
        let wild = simulate(&[Task::due_daily(-100.0, 1.0)], 0, 1.0, Some(1.0));
        let bound = simulate(&[Task::due_daily(-47.27, 1.0)], 0, 1.0, Some(1.0));
        assert_eq!(wild, bound);

        let wild = simulate(&[Task::due_daily(100.0, 1.0)], 0, 1.0, None);
        let bound = simulate(&[Task::due_daily(21.27, 1.0)], 0, 1.0, None);
        assert_eq!(wild, bound);
    }

    #[test]
    fn test_per_task_rounding_before_sum() {
        // Each task: 1.0 × 0.83 × 1 × 2 = 1.66 -> 1.7
        let tasks = vec![Task::due_daily(0.0, 1.0), Task::due_daily(0.0, 1.0)];
        let stats = simulate(&tasks, 0, 0.83, None);
        assert!((stats.daily_damage_to_self - 3.4).abs() < 1e-12);
    }

    #[test]
    fn test_boss_damage_uses_raw_and_rounds_up() {
        let tasks = vec![Task::due_daily(0.0, 1.0)];
        let stats = simulate(&tasks, 0, 0.5, Some(0.123));

        // Self: 1.0 × 0.5 × 1 × 2 = 1.0; boss ignores constitution: 1.0 × 0.123
        assert_eq!(stats.daily_damage_to_self, 1.0);
        assert!((stats.boss_damage - 0.2).abs() < 1e-12);
        // ceil((1.0 + 0.123) × 10) / 10
        assert!((stats.total_damage_to_self - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_trivial_priority_scales_boss_damage() {
        let tasks = vec![Task::due_daily(0.0, 0.1)];
        let stats = simulate(&tasks, 0, 1.0, Some(10.0));
        // 1.0 × 0.1 × 10
        assert!((stats.boss_damage - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_boss_damage_accumulates_unrounded() {
        // Three contributions of 0.04 sum to 0.12, rounded up once to 0.2
        let tasks = vec![
            Task::due_daily(0.0, 1.0),
            Task::due_daily(0.0, 1.0),
            Task::due_daily(0.0, 1.0),
        ];
        let stats = simulate(&tasks, 0, 1.0, Some(0.04));
        assert!((stats.boss_damage - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_checklist_credit_reduces_both_damages() {
        let full = Task::due_daily(0.0, 1.0);
        let half = Task::due_daily(0.0, 1.0).with_checklist(&[true, false, true, false]);

        let simulator = DailyDamageSimulator::new();
        let full_damage = simulator.task_damage(&full, 1.0, Some(1.0));
        let half_damage = simulator.task_damage(&half, 1.0, Some(1.0));

        assert!((half_damage.raw - full_damage.raw / 2.0).abs() < 1e-12);
        assert_eq!(half_damage.to_self, 1.0);
        assert!((half_damage.to_boss - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nan_value_propagates() {
        let stats = simulate(&[Task::due_daily(f64::NAN, 1.0)], 0, 1.0, None);
        assert!(stats.daily_damage_to_self.is_nan());
        assert!(stats.total_damage_to_self.is_nan());
        assert_eq!(stats.due_count, 1);
    }

    #[test]
    fn test_custom_constants() {
        let simulator = DailyDamageSimulator::with_constants(TaskDamageConstants {
            self_damage_multiplier: 3.0,
            ..TaskDamageConstants::default()
        });
        let stats = simulator.simulate(&[Task::due_daily(0.0, 1.0)], 0, 1.0, None);
        assert_eq!(stats.daily_damage_to_self, 3.0);
    }

    fn random_tasks(rng: &mut StdRng, count: usize) -> Vec<Task> {
        let types = [TaskType::Habit, TaskType::Daily, TaskType::Todo, TaskType::Reward];
        let priorities = [0.1, 1.0, 1.5, 2.0];
        (0..count)
            .map(|_| {
                let checklist: Vec<bool> =
                    (0..rng.gen_range(0..5)).map(|_| rng.gen_bool(0.5)).collect();
                Task::new(types[rng.gen_range(0..types.len())])
                    .with_value(rng.gen_range(-60.0..30.0))
                    .with_priority(priorities[rng.gen_range(0..priorities.len())])
                    .with_due(rng.gen_bool(0.7))
                    .with_completed(rng.gen_bool(0.3))
                    .with_checklist(&checklist)
            })
            .collect()
    }

    #[test]
    fn test_repeat_runs_identical() {
        let mut rng = StdRng::seed_from_u64(42);
        let tasks = random_tasks(&mut rng, 200);

        let first = simulate(&tasks, 3, 0.72, Some(1.5));
        let second = simulate(&tasks, 3, 0.72, Some(1.5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_partition_eligible_dailies() {
        let mut rng = StdRng::seed_from_u64(7);
        for stealth in [0, 1, 5, 50] {
            let tasks = random_tasks(&mut rng, 60);
            let eligible = tasks.iter().filter(|t| t.is_unfinished_due_daily()).count() as u32;

            let stats = simulate(&tasks, stealth, 1.0, None);
            assert_eq!(stats.due_count + stats.dailies_evaded, eligible);
            assert_eq!(stats.dailies_evaded, stealth.min(eligible));
        }
    }
}
