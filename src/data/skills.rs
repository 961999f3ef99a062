use std::collections::HashMap;

use crate::shared::*;

/// The preset skill codex.
///
/// Tiers run 1 (foundation) through 7 (apex). Costs are Codex Points;
/// the starting balance covers exactly one tier-1 unlock, the rest are
/// earned through quests.
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill {
            id: "iron_discipline".to_string(),
            name: "Iron Discipline".to_string(),
            description: "Show up daily regardless of mood. The root of every other skill."
                .to_string(),
            tier: 1,
            category: "Body".to_string(),
            energy_type: "Resolve".to_string(),
            unlocked: false,
            cost: 100,
        },
        Skill {
            id: "deep_work".to_string(),
            name: "Deep Work".to_string(),
            description: "Sustain undistracted focus blocks of 90 minutes or more.".to_string(),
            tier: 2,
            category: "Mind".to_string(),
            energy_type: "Focus".to_string(),
            unlocked: false,
            cost: 180,
        },
        Skill {
            id: "shadow_step".to_string(),
            name: "Shadow Step".to_string(),
            description: "Footwork, sprint mechanics, and the agility ladder.".to_string(),
            tier: 2,
            category: "Body".to_string(),
            energy_type: "Aura".to_string(),
            unlocked: false,
            cost: 160,
        },
        Skill {
            id: "forgemaster".to_string(),
            name: "Forgemaster".to_string(),
            description: "Ship tangible artifacts: code, prose, contracts, furniture.".to_string(),
            tier: 3,
            category: "Craft".to_string(),
            energy_type: "Focus".to_string(),
            unlocked: false,
            cost: 260,
        },
        Skill {
            id: "silver_tongue".to_string(),
            name: "Silver Tongue".to_string(),
            description: "Negotiation, narrative, and holding a room.".to_string(),
            tier: 3,
            category: "Presence".to_string(),
            energy_type: "Aura".to_string(),
            unlocked: false,
            cost: 240,
        },
        Skill {
            id: "sovereigns_calm".to_string(),
            name: "Sovereign's Calm".to_string(),
            description: "Unshakeable composure under real stakes. Apex tier.".to_string(),
            tier: 7,
            category: "Mind".to_string(),
            energy_type: "Resolve".to_string(),
            unlocked: false,
            cost: 1200,
        },
    ]
}

/// Sub-skill trees, keyed by parent skill id. Not every skill branches.
pub fn default_sub_skills() -> HashMap<String, Vec<SubSkill>> {
    let mut trees = HashMap::new();

    trees.insert(
        "iron_discipline".to_string(),
        vec![
            SubSkill {
                id: "cold_exposure".to_string(),
                name: "Cold Exposure".to_string(),
                description: "End every shower cold. Two minutes minimum.".to_string(),
                tier: 1,
                energy_type: "Resolve".to_string(),
                unlocked: false,
                cost: 40,
            },
            SubSkill {
                id: "zero_snooze".to_string(),
                name: "Zero Snooze".to_string(),
                description: "Feet on the floor at the first alarm.".to_string(),
                tier: 1,
                energy_type: "Resolve".to_string(),
                unlocked: false,
                cost: 40,
            },
        ],
    );

    trees.insert(
        "deep_work".to_string(),
        vec![
            SubSkill {
                id: "monk_mode".to_string(),
                name: "Monk Mode".to_string(),
                description: "Full-day offline immersion on a single problem.".to_string(),
                tier: 3,
                energy_type: "Focus".to_string(),
                unlocked: false,
                cost: 90,
            },
            SubSkill {
                id: "context_fortress".to_string(),
                name: "Context Fortress".to_string(),
                description: "Notifications off, one tab, one task.".to_string(),
                tier: 2,
                energy_type: "Focus".to_string(),
                unlocked: false,
                cost: 60,
            },
        ],
    );

    trees.insert(
        "shadow_step".to_string(),
        vec![SubSkill {
            id: "phase_dash".to_string(),
            name: "Phase Dash".to_string(),
            description: "Sub-5:00/km over ten kilometres.".to_string(),
            tier: 3,
            energy_type: "Aura".to_string(),
            unlocked: false,
            cost: 80,
        }],
    );

    trees
}
