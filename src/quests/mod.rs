//! Quest lifecycle — create, track progress, complete, edit, delete.
//!
//! Completion is the interesting transition: it happens exactly once per
//! quest, resolves the quest's declared rewards in the same pass, and
//! defers the base XP grant to the next pass via `AddXpEvent`. A missing
//! or already-completed quest id is a silent no-op.

use bevy::prelude::*;

use crate::economy::resolve_rewards;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Creates a quest with a fresh id. Initial status is caller-supplied:
/// imports from an external tracker may land pre-completed.
pub fn handle_quest_create(
    mut events: EventReader<QuestCreateEvent>,
    mut quest_log: ResMut<QuestLog>,
) {
    for ev in events.read() {
        let quest = Quest {
            id: fresh_id("quest"),
            title: ev.title.clone(),
            description: ev.description.clone(),
            quest_type: ev.quest_type.clone(),
            status: ev.status,
            xp_reward: ev.xp_reward,
            progress: ev.progress,
            rewards: ev.rewards.clone(),
        };
        info!("[Quests] Created \"{}\" ({})", quest.title, quest.id);
        quest_log.quests.push(quest);
    }
}

/// Stores new progress on a quest that already tracks progress. Quests
/// without a progress field ignore the update; clamping is the caller's
/// responsibility.
pub fn handle_quest_progress(
    mut events: EventReader<QuestProgressEvent>,
    mut quest_log: ResMut<QuestLog>,
) {
    for ev in events.read() {
        let Some(quest) = quest_log.quest_mut(&ev.id) else {
            continue;
        };
        if let Some(progress) = quest.progress.as_mut() {
            progress.current = ev.current;
            if let Some(target) = ev.target {
                progress.target = target;
            }
        }
    }
}

/// Completes a quest: marks it completed, resolves declared rewards
/// (currencies, loot, skill proficiency), and defers the base XP grant.
pub fn handle_quest_complete(
    mut events: EventReader<QuestCompleteEvent>,
    mut quest_log: ResMut<QuestLog>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    mut codex: ResMut<SkillCodex>,
    mut stats: ResMut<PlayStats>,
    mut xp_writer: EventWriter<AddXpEvent>,
) {
    for ev in events.read() {
        let Some(quest) = quest_log.quest_mut(&ev.id) else {
            continue;
        };
        if quest.status == QuestStatus::Completed {
            continue;
        }
        quest.status = QuestStatus::Completed;

        resolve_rewards(&quest.rewards, &mut wallet, &mut inventory, &mut codex);
        stats.quests_completed += 1;

        info!(
            "[Quests] Completed \"{}\" — {} XP incoming",
            quest.title, quest.xp_reward
        );
        xp_writer.send(AddXpEvent {
            amount: quest.xp_reward,
        });
    }
}

/// Field patch on an existing quest; unknown ids are ignored.
pub fn handle_quest_edit(mut events: EventReader<QuestEditEvent>, mut quest_log: ResMut<QuestLog>) {
    for ev in events.read() {
        let Some(quest) = quest_log.quest_mut(&ev.id) else {
            continue;
        };
        if let Some(title) = &ev.title {
            quest.title = title.clone();
        }
        if let Some(description) = &ev.description {
            quest.description = description.clone();
        }
        if let Some(quest_type) = &ev.quest_type {
            quest.quest_type = quest_type.clone();
        }
        if let Some(xp_reward) = ev.xp_reward {
            quest.xp_reward = xp_reward;
        }
        if let Some(rewards) = &ev.rewards {
            quest.rewards = rewards.clone();
        }
    }
}

/// Unconditional removal from the quest collection.
pub fn handle_quest_delete(
    mut events: EventReader<QuestDeleteEvent>,
    mut quest_log: ResMut<QuestLog>,
) {
    for ev in events.read() {
        quest_log.quests.retain(|q| q.id != ev.id);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct QuestsPlugin;

impl Plugin for QuestsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_quest_create,
                handle_quest_progress,
                handle_quest_complete.in_set(EngineSet::Completions),
                handle_quest_edit,
                handle_quest_delete,
            )
                .run_if(in_state(AppState::Ready)),
        );
    }
}
