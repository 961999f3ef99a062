use crate::shared::*;

/// Starter inventory, schema V2: slot + tier label + named effects.
/// Ids are stable so the merge can tell these apart from user loot.
pub fn default_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "chrono_band".to_string(),
            slot: "wrist".to_string(),
            name: "Chrono Band".to_string(),
            tier: "Standard".to_string(),
            description: "Tracks heart rate against the active form's target.".to_string(),
            effects: vec![ItemEffect {
                label: "Sync accuracy".to_string(),
                value: 10.0,
                unit: "%".to_string(),
            }],
            quantity: 1,
        },
        InventoryItem {
            id: "tome_of_initiates".to_string(),
            slot: "satchel".to_string(),
            name: "Tome of Initiates".to_string(),
            tier: "Common".to_string(),
            description: "The onboarding codex. Reread at every rank-up.".to_string(),
            effects: vec![ItemEffect {
                label: "Skill XP gain".to_string(),
                value: 5.0,
                unit: "%".to_string(),
            }],
            quantity: 1,
        },
        InventoryItem {
            id: "ember_flask".to_string(),
            slot: "belt".to_string(),
            name: "Ember Flask".to_string(),
            tier: "Common".to_string(),
            description: "Cold brew, double strength. Use before a Surge window.".to_string(),
            effects: vec![
                ItemEffect {
                    label: "Focus regen".to_string(),
                    value: 15.0,
                    unit: "%".to_string(),
                },
                ItemEffect {
                    label: "Fatigue onset delay".to_string(),
                    value: 45.0,
                    unit: "min".to_string(),
                },
            ],
            quantity: 2,
        },
    ]
}
