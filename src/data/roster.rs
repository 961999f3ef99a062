use crate::shared::*;

/// Preset roster — the recurring cast of allies and mentors.
pub fn default_roster() -> Vec<RosterMember> {
    vec![
        RosterMember {
            id: "kael".to_string(),
            name: "Kael".to_string(),
            title: "The Archivist".to_string(),
            role: "Keeps the vault honest; audits weekly reviews.".to_string(),
            bond: 3,
        },
        RosterMember {
            id: "mirren".to_string(),
            name: "Mirren".to_string(),
            title: "Blade Instructor".to_string(),
            role: "Training partner. Owns the Surge sessions.".to_string(),
            bond: 2,
        },
        RosterMember {
            id: "ophira".to_string(),
            name: "Ophira".to_string(),
            title: "The Advocate".to_string(),
            role: "Counsel on contracts and the business milestones.".to_string(),
            bond: 1,
        },
        RosterMember {
            id: "tessen".to_string(),
            name: "Tessen".to_string(),
            title: "Quartermaster".to_string(),
            role: "Gear, supplements, and the inventory ledger.".to_string(),
            bond: 2,
        },
    ]
}

/// Preset councils — named groups of roster members with a standing
/// purpose.
pub fn default_councils() -> Vec<Council> {
    vec![
        Council {
            id: "council_of_dawn".to_string(),
            name: "Council of Dawn".to_string(),
            purpose: "Morning accountability: rituals held, quests declared.".to_string(),
            member_ids: vec!["kael".to_string(), "mirren".to_string()],
        },
        Council {
            id: "round_of_blades".to_string(),
            name: "Round of Blades".to_string(),
            purpose: "Physical standards review at each rank boundary.".to_string(),
            member_ids: vec!["mirren".to_string(), "tessen".to_string()],
        },
    ]
}
