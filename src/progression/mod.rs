//! Character progression — experience, levels, ranks, attribute growth.
//!
//! `xp_required_for_level` and `rank_for_level` are pure; everything else
//! is event-driven mutation of the `CharacterSheet`. The XP system runs
//! before the quest/task completion systems, so an `AddXpEvent` emitted by
//! a completion is consumed on the following schedule pass — the state
//! write that completes a quest and the one that levels the character are
//! two separate, sequential mutations.

use bevy::prelude::*;

use crate::shared::*;

// ─── Curves ──────────────────────────────────────────────────────────────

/// Experience needed to leave the given level: `floor(200 * level^1.45)`.
/// Strictly increasing in `level`.
pub fn xp_required_for_level(level: u32) -> u64 {
    (200.0 * (level as f64).powf(1.45)).floor() as u64
}

/// Step function over fixed level thresholds. Higher level never yields a
/// lower rank.
pub fn rank_for_level(level: u32) -> Rank {
    match level {
        0..=9 => Rank::F,
        10..=19 => Rank::E,
        20..=29 => Rank::D,
        30..=39 => Rank::C,
        40..=49 => Rank::B,
        50..=59 => Rank::A,
        60..=74 => Rank::S,
        75..=89 => Rank::Ss,
        90..=99 => Rank::Sss,
        _ => Rank::Sovereign,
    }
}

/// Attribute gains applied on every level-up. Physical scores grow a bit
/// faster than mental ones.
const LEVEL_GAINS: [(AttributeKind, i32); 7] = [
    (AttributeKind::Strength, 2),
    (AttributeKind::Vitality, 2),
    (AttributeKind::Agility, 2),
    (AttributeKind::Intelligence, 2),
    (AttributeKind::Perception, 1),
    (AttributeKind::Willpower, 1),
    (AttributeKind::Charisma, 1),
];

fn apply_level_gains(attributes: &mut Attributes) {
    for (kind, delta) in LEVEL_GAINS {
        attributes.set(kind, attributes.get(kind) + delta);
    }
}

// ─── Systems ─────────────────────────────────────────────────────────────

/// Applies `AddXpEvent` grants to the character sheet.
///
/// Loops while accumulated experience covers the current threshold so a
/// single large grant can cross several levels in one call; experience is
/// always left strictly below the (recomputed) threshold. A zero grant
/// changes nothing but still marks the sheet dirty for persistence.
pub fn apply_xp_gain(
    mut events: EventReader<AddXpEvent>,
    mut sheet: ResMut<CharacterSheet>,
    mut stats: ResMut<PlayStats>,
    mut level_up: EventWriter<LevelUpEvent>,
) {
    for ev in events.read() {
        sheet.xp += ev.amount;
        stats.total_xp_earned += ev.amount;

        let start_level = sheet.level;
        while sheet.xp >= sheet.xp_to_next {
            sheet.xp -= sheet.xp_to_next;
            sheet.level += 1;
            apply_level_gains(&mut sheet.attributes);
            sheet.xp_to_next = xp_required_for_level(sheet.level);
        }

        if sheet.level > start_level {
            sheet.rank = rank_for_level(sheet.level);
            stats.levels_gained += (sheet.level - start_level) as u64;
            level_up.send(LevelUpEvent {
                new_level: sheet.level,
                new_rank: sheet.rank,
            });
            info!(
                "[Progression] +{} XP — level {} ({}), {}/{} to next",
                ev.amount, sheet.level, sheet.rank, sheet.xp, sheet.xp_to_next
            );
        } else {
            info!(
                "[Progression] +{} XP — {}/{} to next",
                ev.amount, sheet.xp, sheet.xp_to_next
            );
        }
    }
}

/// Direct attribute edit (manual correction from the sheet editor).
pub fn apply_attribute_edits(
    mut events: EventReader<AttributeSetEvent>,
    mut sheet: ResMut<CharacterSheet>,
) {
    for ev in events.read() {
        sheet.attributes.set(ev.attribute, ev.value);
    }
}

/// Direct gauge edit. Values are stored as given — no clamping here.
pub fn apply_gauge_edits(
    mut events: EventReader<GaugeSetEvent>,
    mut sheet: ResMut<CharacterSheet>,
) {
    for ev in events.read() {
        sheet.set_gauge(ev.gauge, ev.value);
    }
}

// ─── Plugin ──────────────────────────────────────────────────────────────

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        // Grants run before completions so a completion's XP grant is
        // consumed on the following pass, never the same one.
        app.configure_sets(Update, EngineSet::Grants.before(EngineSet::Completions));
        app.add_systems(
            Update,
            (
                apply_xp_gain.in_set(EngineSet::Grants),
                apply_attribute_edits,
                apply_gauge_edits,
            )
                .run_if(in_state(AppState::Ready)),
        );
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_curve_is_strictly_increasing() {
        for level in 1..200 {
            assert!(
                xp_required_for_level(level) < xp_required_for_level(level + 1),
                "curve must grow at level {}",
                level
            );
        }
    }

    #[test]
    fn xp_curve_base_matches_sheet_default() {
        assert_eq!(xp_required_for_level(1), 200);
        assert_eq!(CharacterSheet::default().xp_to_next, xp_required_for_level(1));
    }

    #[test]
    fn rank_is_monotone_in_level() {
        for level in 1..300 {
            assert!(
                rank_for_level(level) <= rank_for_level(level + 1),
                "rank must not regress at level {}",
                level
            );
        }
    }

    #[test]
    fn rank_band_edges() {
        assert_eq!(rank_for_level(1), Rank::F);
        assert_eq!(rank_for_level(9), Rank::F);
        assert_eq!(rank_for_level(10), Rank::E);
        assert_eq!(rank_for_level(89), Rank::Ss);
        assert_eq!(rank_for_level(90), Rank::Sss);
        assert_eq!(rank_for_level(91), Rank::Sss);
        assert_eq!(rank_for_level(99), Rank::Sss);
        assert_eq!(rank_for_level(100), Rank::Sovereign);
        assert_eq!(rank_for_level(250), Rank::Sovereign);
    }

    #[test]
    fn level_gains_are_positive() {
        let mut attrs = Attributes::default();
        let before = attrs;
        apply_level_gains(&mut attrs);
        for (kind, _) in LEVEL_GAINS {
            assert!(attrs.get(kind) > before.get(kind));
        }
    }
}
