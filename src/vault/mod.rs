//! Vault — the journal of record — and daily rituals.
//!
//! Vault entries are append-only in practice; deletion exists but nothing
//! depends on it. Rituals are simple named checklists toggled rarely.

use bevy::prelude::*;
use chrono::Utc;

use crate::shared::*;

pub fn handle_vault_append(mut events: EventReader<VaultAppendEvent>, mut vault: ResMut<Vault>) {
    for ev in events.read() {
        let entry = VaultEntry {
            id: fresh_id("vault"),
            title: ev.title.clone(),
            body: ev.body.clone(),
            category: ev.category.clone(),
            mood: ev.mood.clone(),
            created_at: Utc::now(),
        };
        info!("[Vault] Recorded \"{}\"", entry.title);
        vault.entries.push(entry);
    }
}

pub fn handle_vault_delete(mut events: EventReader<VaultDeleteEvent>, mut vault: ResMut<Vault>) {
    for ev in events.read() {
        vault.entries.retain(|e| e.id != ev.id);
    }
}

pub fn handle_ritual_add(mut events: EventReader<RitualAddEvent>, mut rituals: ResMut<Rituals>) {
    for ev in events.read() {
        rituals.rituals.push(Ritual {
            id: fresh_id("ritual"),
            name: ev.name.clone(),
            phase: ev.phase,
            steps: ev.steps.clone(),
            active: true,
        });
    }
}

pub fn handle_ritual_delete(
    mut events: EventReader<RitualDeleteEvent>,
    mut rituals: ResMut<Rituals>,
) {
    for ev in events.read() {
        rituals.rituals.retain(|r| r.id != ev.id);
    }
}

pub struct VaultPlugin;

impl Plugin for VaultPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_vault_append,
                handle_vault_delete,
                handle_ritual_add,
                handle_ritual_delete,
            )
                .run_if(in_state(AppState::Ready)),
        );
    }
}
