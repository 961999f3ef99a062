//! Economy domain — currencies and the reward resolver.
//!
//! All cross-domain communication goes through `crate::shared::*` events and
//! resources. No other domain module is imported here.

use bevy::prelude::*;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Reward resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Turns a declared `RewardSet` into concrete wallet, inventory, and
/// proficiency deltas. Invoked by the quest completion path; which deltas
/// apply depends on which optional fields the set carries.
pub fn resolve_rewards(
    rewards: &RewardSet,
    wallet: &mut Wallet,
    inventory: &mut Inventory,
    codex: &mut SkillCodex,
) {
    for currency in &rewards.currencies {
        wallet.credit(&currency.name, currency.amount);
        info!(
            "[Economy] {} +{} — balance {}",
            currency.name,
            format_amount(currency.amount),
            format_amount(wallet.amount(&currency.name))
        );
    }

    for loot in &rewards.loot {
        inventory.grant_loot(&loot.name, loot.quantity);
    }

    if let Some(skill_xp) = &rewards.skill_xp {
        for key in &skill_xp.skill_keys {
            codex.add_proficiency(key, skill_xp.amount);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Applies `CurrencyChangeEvent`s to the wallet. Balances are allowed to go
/// negative; the engine records what callers report.
pub fn apply_currency_changes(
    mut events: EventReader<CurrencyChangeEvent>,
    mut wallet: ResMut<Wallet>,
) {
    for ev in events.read() {
        wallet.credit(&ev.name, ev.delta);
        info!(
            "[Economy] {} {}{}: {}. New balance: {}",
            ev.name,
            if ev.delta >= 0 { "+" } else { "" },
            ev.delta,
            ev.reason,
            format_amount(wallet.amount(&ev.name))
        );
    }
}

/// Format a currency amount with thousands separators (e.g. "1,234").
pub fn format_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits: Vec<char> = amount.unsigned_abs().to_string().chars().collect();
    let mut result = String::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_currency_changes.run_if(in_state(AppState::Ready)),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(500), "500");
        assert_eq!(format_amount(1234), "1,234");
        assert_eq!(format_amount(25000), "25,000");
        assert_eq!(format_amount(1000000), "1,000,000");
        assert_eq!(format_amount(-4200), "-4,200");
    }

    #[test]
    fn currency_rewards_credit_matching_names() {
        let mut wallet = Wallet::default();
        wallet.credit(CODEX_POINTS, 5000);
        let mut inventory = Inventory::default();
        let mut codex = SkillCodex::default();

        let rewards = RewardSet {
            currencies: vec![CurrencyReward {
                name: CODEX_POINTS.to_string(),
                amount: 100,
            }],
            ..Default::default()
        };
        resolve_rewards(&rewards, &mut wallet, &mut inventory, &mut codex);

        assert_eq!(wallet.amount(CODEX_POINTS), 5100);
        assert!(inventory.items.is_empty());
        assert!(codex.proficiency.is_empty());
    }

    #[test]
    fn loot_merges_by_name_then_appends() {
        let mut wallet = Wallet::default();
        let mut inventory = Inventory::default();
        let mut codex = SkillCodex::default();

        let rewards = RewardSet {
            loot: vec![LootReward {
                name: "Mana Crystal".to_string(),
                quantity: 2,
            }],
            ..Default::default()
        };
        resolve_rewards(&rewards, &mut wallet, &mut inventory, &mut codex);
        resolve_rewards(&rewards, &mut wallet, &mut inventory, &mut codex);

        assert_eq!(inventory.items.len(), 1);
        assert_eq!(inventory.items[0].quantity, 4);

        let other = RewardSet {
            loot: vec![LootReward {
                name: "Iron Sigil".to_string(),
                quantity: 1,
            }],
            ..Default::default()
        };
        resolve_rewards(&other, &mut wallet, &mut inventory, &mut codex);
        assert_eq!(inventory.items.len(), 2);
    }

    #[test]
    fn skill_xp_lands_on_every_linked_key() {
        let mut wallet = Wallet::default();
        let mut inventory = Inventory::default();
        let mut codex = SkillCodex::default();

        let rewards = RewardSet {
            skill_xp: Some(SkillXpReward {
                amount: 25,
                skill_keys: vec![
                    "shadow_step".to_string(),
                    proficiency_key("shadow_step", Some("phase_dash")),
                ],
            }),
            ..Default::default()
        };
        resolve_rewards(&rewards, &mut wallet, &mut inventory, &mut codex);
        resolve_rewards(&rewards, &mut wallet, &mut inventory, &mut codex);

        assert_eq!(codex.proficiency["shadow_step"], 50);
        assert_eq!(codex.proficiency["shadow_step:phase_dash"], 50);
    }

    #[test]
    fn empty_reward_set_changes_nothing() {
        let mut wallet = Wallet::default();
        let mut inventory = Inventory::default();
        let mut codex = SkillCodex::default();

        resolve_rewards(&RewardSet::default(), &mut wallet, &mut inventory, &mut codex);

        assert!(wallet.currencies.is_empty());
        assert!(inventory.items.is_empty());
        assert!(codex.proficiency.is_empty());
    }
}
