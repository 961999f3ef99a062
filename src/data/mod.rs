//! Seed content — the compiled-in catalogs merged into persisted state at
//! startup.
//!
//! Every collection here has an identity key (id, or name for energy
//! systems and currencies). On load, persisted entries win and defaults
//! whose key is absent are unioned in, so upgrades that add catalog
//! content reach existing saves without clobbering user edits.

mod energies;
mod forms;
mod items;
mod roster;
mod skills;

pub use energies::default_energy_systems;
pub use forms::default_forms;
pub use items::default_items;
pub use roster::{default_councils, default_roster};
pub use skills::{default_skills, default_sub_skills};

use crate::shared::*;

/// Starting balances. Codex Points fund the first skill unlock; Essence
/// accumulates from quest rewards only.
pub fn default_currencies() -> Vec<Currency> {
    vec![
        Currency {
            name: CODEX_POINTS.to_string(),
            amount: 100,
        },
        Currency {
            name: ESSENCE.to_string(),
            amount: 0,
        },
    ]
}

pub fn default_rituals() -> Vec<Ritual> {
    vec![
        Ritual {
            id: "dawn_protocol".to_string(),
            name: "Dawn Protocol".to_string(),
            phase: RitualPhase::Morning,
            steps: vec![
                "Hydrate".to_string(),
                "Ten minutes of mobility".to_string(),
                "Review today's quests".to_string(),
            ],
            active: true,
        },
        Ritual {
            id: "shutdown_sequence".to_string(),
            name: "Shutdown Sequence".to_string(),
            phase: RitualPhase::Evening,
            steps: vec![
                "Log the day in the vault".to_string(),
                "Set tomorrow's first quest".to_string(),
                "Screens off".to_string(),
            ],
            active: true,
        },
    ]
}
