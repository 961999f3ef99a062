//! Inventory edits — direct add/update/delete of items.
//!
//! Reward loot reaches the inventory through the reward resolver, not
//! through these systems; this is the manual-curation path.

use bevy::prelude::*;

use crate::shared::*;

pub fn handle_item_add(mut events: EventReader<ItemAddEvent>, mut inventory: ResMut<Inventory>) {
    for ev in events.read() {
        let item = InventoryItem {
            id: fresh_id("item"),
            slot: ev.slot.clone(),
            name: ev.name.clone(),
            tier: ev.tier.clone(),
            description: ev.description.clone(),
            effects: ev.effects.clone(),
            quantity: ev.quantity,
        };
        info!("[Inventory] Added \"{}\" x{}", item.name, item.quantity);
        inventory.items.push(item);
    }
}

pub fn handle_item_edit(mut events: EventReader<ItemEditEvent>, mut inventory: ResMut<Inventory>) {
    for ev in events.read() {
        let Some(item) = inventory.item_mut(&ev.id) else {
            continue;
        };
        if let Some(slot) = &ev.slot {
            item.slot = slot.clone();
        }
        if let Some(name) = &ev.name {
            item.name = name.clone();
        }
        if let Some(tier) = &ev.tier {
            item.tier = tier.clone();
        }
        if let Some(description) = &ev.description {
            item.description = description.clone();
        }
        if let Some(effects) = &ev.effects {
            item.effects = effects.clone();
        }
        if let Some(quantity) = ev.quantity {
            item.quantity = quantity;
        }
    }
}

pub fn handle_item_delete(
    mut events: EventReader<ItemDeleteEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for ev in events.read() {
        inventory.items.retain(|i| i.id != ev.id);
    }
}

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_item_add, handle_item_edit, handle_item_delete)
                .run_if(in_state(AppState::Ready)),
        );
    }
}
