//! Skill economy — unlocking skills with Codex Points, plus structural
//! edits to the skill catalog and its sub-skill trees.
//!
//! Unlocking debits the wallet and flips the unlock flag in one pass, so
//! no observer ever sees one effect without the other. Structural edits
//! never touch proficiency; that is owned by the completion paths.

use bevy::prelude::*;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Unlocks a skill if it exists, is still locked, and the Codex Points
/// balance covers its cost. Anything else is a silent no-op.
pub fn handle_skill_unlock(
    mut events: EventReader<SkillUnlockEvent>,
    mut codex: ResMut<SkillCodex>,
    mut wallet: ResMut<Wallet>,
    mut stats: ResMut<PlayStats>,
) {
    for ev in events.read() {
        let Some(skill) = codex.skill_mut(&ev.id) else {
            continue;
        };
        if skill.unlocked {
            continue;
        }
        if wallet.amount(CODEX_POINTS) < skill.cost {
            info!(
                "[Skills] Not enough Codex Points for \"{}\" (cost {})",
                skill.name, skill.cost
            );
            continue;
        }

        skill.unlocked = true;
        let cost = skill.cost;
        let name = skill.name.clone();
        wallet.credit(CODEX_POINTS, -cost);
        stats.skills_unlocked += 1;
        info!("[Skills] Unlocked \"{}\" for {} Codex Points", name, cost);
    }
}

pub fn handle_skill_create(mut events: EventReader<SkillCreateEvent>, mut codex: ResMut<SkillCodex>) {
    for ev in events.read() {
        let skill = Skill {
            id: fresh_id("skill"),
            name: ev.name.clone(),
            description: ev.description.clone(),
            tier: ev.tier,
            category: ev.category.clone(),
            energy_type: ev.energy_type.clone(),
            unlocked: false,
            cost: ev.cost,
        };
        info!("[Skills] Added \"{}\" ({})", skill.name, skill.id);
        codex.skills.push(skill);
    }
}

pub fn handle_skill_edit(mut events: EventReader<SkillEditEvent>, mut codex: ResMut<SkillCodex>) {
    for ev in events.read() {
        let Some(skill) = codex.skill_mut(&ev.id) else {
            continue;
        };
        if let Some(name) = &ev.name {
            skill.name = name.clone();
        }
        if let Some(description) = &ev.description {
            skill.description = description.clone();
        }
        if let Some(tier) = ev.tier {
            skill.tier = tier;
        }
        if let Some(category) = &ev.category {
            skill.category = category.clone();
        }
        if let Some(energy_type) = &ev.energy_type {
            skill.energy_type = energy_type.clone();
        }
        if let Some(cost) = ev.cost {
            skill.cost = cost;
        }
    }
}

pub fn handle_skill_delete(mut events: EventReader<SkillDeleteEvent>, mut codex: ResMut<SkillCodex>) {
    for ev in events.read() {
        codex.skills.retain(|s| s.id != ev.id);
    }
}

/// Inserts a sub-skill under its parent, creating the parent's collection
/// on first insert.
pub fn handle_sub_skill_create(
    mut events: EventReader<SubSkillCreateEvent>,
    mut codex: ResMut<SkillCodex>,
) {
    for ev in events.read() {
        let sub = SubSkill {
            id: fresh_id("sub"),
            name: ev.name.clone(),
            description: ev.description.clone(),
            tier: ev.tier,
            energy_type: ev.energy_type.clone(),
            unlocked: false,
            cost: ev.cost,
        };
        codex
            .sub_skills
            .entry(ev.parent_id.clone())
            .or_default()
            .push(sub);
    }
}

/// Patches a sub-skill. No-op when the parent has no collection yet or the
/// sub id is unknown within it.
pub fn handle_sub_skill_edit(
    mut events: EventReader<SubSkillEditEvent>,
    mut codex: ResMut<SkillCodex>,
) {
    for ev in events.read() {
        let Some(subs) = codex.sub_skills.get_mut(&ev.parent_id) else {
            continue;
        };
        let Some(sub) = subs.iter_mut().find(|s| s.id == ev.sub_id) else {
            continue;
        };
        if let Some(name) = &ev.name {
            sub.name = name.clone();
        }
        if let Some(description) = &ev.description {
            sub.description = description.clone();
        }
        if let Some(tier) = ev.tier {
            sub.tier = tier;
        }
        if let Some(cost) = ev.cost {
            sub.cost = cost;
        }
    }
}

/// Removes a sub-skill from its parent's collection, if either exists.
pub fn handle_sub_skill_delete(
    mut events: EventReader<SubSkillDeleteEvent>,
    mut codex: ResMut<SkillCodex>,
) {
    for ev in events.read() {
        let Some(subs) = codex.sub_skills.get_mut(&ev.parent_id) else {
            continue;
        };
        subs.retain(|s| s.id != ev.sub_id);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct SkillsPlugin;

impl Plugin for SkillsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_skill_unlock,
                handle_skill_create,
                handle_skill_edit,
                handle_skill_delete,
                handle_sub_skill_create,
                handle_sub_skill_edit,
                handle_sub_skill_delete,
            )
                .run_if(in_state(AppState::Ready)),
        );
    }
}
