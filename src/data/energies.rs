use crate::shared::*;

/// Preset energy systems, keyed by name in the store. Saves from older
/// versions that lack one of these get it backfilled on load.
pub fn default_energy_systems() -> Vec<EnergySystem> {
    vec![
        EnergySystem {
            name: "Aura".to_string(),
            current: 70.0,
            max: 100.0,
            status: "Stable".to_string(),
            description: "Physical vitality. Fed by sleep, training, and sunlight.".to_string(),
        },
        EnergySystem {
            name: "Focus".to_string(),
            current: 60.0,
            max: 100.0,
            status: "Stable".to_string(),
            description: "Mental bandwidth. Drained by context switching.".to_string(),
        },
        EnergySystem {
            name: "Resolve".to_string(),
            current: 80.0,
            max: 100.0,
            status: "Charged".to_string(),
            description: "Willpower reserve. Spent on hard choices, restored by wins."
                .to_string(),
        },
    ]
}
