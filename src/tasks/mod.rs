//! Tasks and habits — one-off and recurring real-world effort.
//!
//! A `Once` task completes exactly once and never re-triggers rewards; a
//! recurring task stays active, counts completions, and (for daily
//! recurrence) maintains a consecutive-day streak. Completion grants any
//! linked skill proficiency in the same pass and defers the base XP grant
//! to the next one.

use bevy::prelude::*;
use chrono::{NaiveDate, Utc};

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Streak arithmetic
// ─────────────────────────────────────────────────────────────────────────────

/// Streak continuation for daily habits, in calendar days: a completion
/// the day after the previous one extends the streak, anything else
/// restarts it at 1. Only adjacency counts — completing twice on the same
/// day restarts the streak too.
pub fn next_streak(
    previous_streak: u32,
    last_completed: Option<NaiveDate>,
    today: NaiveDate,
) -> u32 {
    match (last_completed, today.pred_opt()) {
        (Some(last), Some(yesterday)) if last == yesterday => previous_streak + 1,
        _ => 1,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_task_create(mut events: EventReader<TaskCreateEvent>, mut board: ResMut<TaskBoard>) {
    for ev in events.read() {
        let task = Task {
            id: fresh_id("task"),
            title: ev.title.clone(),
            description: ev.description.clone(),
            kind: ev.kind,
            status: TaskStatus::Active,
            recurrence: ev.recurrence,
            xp_reward: ev.xp_reward,
            skill_reward: ev.skill_reward.clone(),
            completed_count: 0,
            streak: 0,
            last_completed: None,
            created_at: Utc::now(),
        };
        info!("[Tasks] Created \"{}\" ({})", task.title, task.id);
        board.tasks.push(task);
    }
}

/// Processes a completion event against a task.
///
/// No-op if the id is unknown or the task already completed. Otherwise:
/// daily habits recompute their streak from calendar-day adjacency, the
/// completion counter increments, `Once` tasks transition to `Completed`
/// (recurring ones stay `Active`), any linked skill proficiency is granted,
/// and the base XP reward is deferred via `AddXpEvent`.
pub fn handle_task_complete(
    mut events: EventReader<TaskCompleteEvent>,
    mut board: ResMut<TaskBoard>,
    mut codex: ResMut<SkillCodex>,
    mut stats: ResMut<PlayStats>,
    mut xp_writer: EventWriter<AddXpEvent>,
) {
    for ev in events.read() {
        let Some(task) = board.task_mut(&ev.id) else {
            continue;
        };
        if task.status == TaskStatus::Completed {
            continue;
        }

        let now = Utc::now();
        if task.recurrence == Recurrence::Daily {
            task.streak = next_streak(
                task.streak,
                task.last_completed.map(|t| t.date_naive()),
                now.date_naive(),
            );
        }
        task.completed_count += 1;
        task.last_completed = Some(now);
        if task.recurrence == Recurrence::Once {
            task.status = TaskStatus::Completed;
        }

        if let Some(reward) = &task.skill_reward {
            let key = proficiency_key(&reward.skill_id, reward.sub_skill_id.as_deref());
            codex.add_proficiency(&key, reward.amount);
        }

        stats.tasks_completed += 1;
        info!(
            "[Tasks] Completed \"{}\" (x{}, streak {}) — {} XP incoming",
            task.title, task.completed_count, task.streak, task.xp_reward
        );
        xp_writer.send(AddXpEvent {
            amount: task.xp_reward,
        });
    }
}

/// Field patch on an existing task; unknown ids are ignored.
pub fn handle_task_edit(mut events: EventReader<TaskEditEvent>, mut board: ResMut<TaskBoard>) {
    for ev in events.read() {
        let Some(task) = board.task_mut(&ev.id) else {
            continue;
        };
        if let Some(title) = &ev.title {
            task.title = title.clone();
        }
        if let Some(description) = &ev.description {
            task.description = description.clone();
        }
        if let Some(recurrence) = ev.recurrence {
            task.recurrence = recurrence;
        }
        if let Some(xp_reward) = ev.xp_reward {
            task.xp_reward = xp_reward;
        }
        if let Some(skill_reward) = &ev.skill_reward {
            task.skill_reward = skill_reward.clone();
        }
    }
}

pub fn handle_task_delete(mut events: EventReader<TaskDeleteEvent>, mut board: ResMut<TaskBoard>) {
    for ev in events.read() {
        board.tasks.retain(|t| t.id != ev.id);
    }
}

/// Archived tasks drop out of the board listings without losing history;
/// toggling again restores them to `Active`.
pub fn handle_task_archive_toggle(
    mut events: EventReader<TaskArchiveToggleEvent>,
    mut board: ResMut<TaskBoard>,
) {
    for ev in events.read() {
        let Some(task) = board.task_mut(&ev.id) else {
            continue;
        };
        task.status = match task.status {
            TaskStatus::Archived => TaskStatus::Active,
            _ => TaskStatus::Archived,
        };
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct TasksPlugin;

impl Plugin for TasksPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_task_create,
                handle_task_complete.in_set(EngineSet::Completions),
                handle_task_edit,
                handle_task_delete,
                handle_task_archive_toggle,
            )
                .run_if(in_state(AppState::Ready)),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_completion_starts_streak_at_one() {
        assert_eq!(next_streak(0, None, day(2026, 3, 10)), 1);
    }

    #[test]
    fn consecutive_days_extend_streak() {
        assert_eq!(next_streak(1, Some(day(2026, 3, 9)), day(2026, 3, 10)), 2);
        assert_eq!(next_streak(6, Some(day(2026, 3, 9)), day(2026, 3, 10)), 7);
    }

    #[test]
    fn adjacency_holds_across_month_boundaries() {
        assert_eq!(next_streak(3, Some(day(2026, 2, 28)), day(2026, 3, 1)), 4);
        assert_eq!(next_streak(3, Some(day(2026, 12, 31)), day(2027, 1, 1)), 4);
    }

    #[test]
    fn skipping_a_day_restarts_streak() {
        assert_eq!(next_streak(9, Some(day(2026, 3, 7)), day(2026, 3, 10)), 1);
    }

    #[test]
    fn same_day_repeat_restarts_streak() {
        // Only day-adjacency continues a streak; a second completion on the
        // same calendar day counts as a completion but restarts the chain.
        assert_eq!(next_streak(5, Some(day(2026, 3, 10)), day(2026, 3, 10)), 1);
    }
}
