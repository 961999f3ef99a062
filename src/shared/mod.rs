//! Shared resources, events, and entity types for the Ascendant engine.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly; all cross-domain
//! communication goes through the events and resources defined here.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// APP STATE — engine lifecycle
// ═══════════════════════════════════════════════════════════════════════

/// `Loading` reads the persisted snapshot and merges seed content;
/// `Ready` is the steady state in which mutation operations are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

/// Update-schedule ordering contract. XP grants are consumed before the
/// completion systems run, so a grant emitted by a completion is applied on
/// the next schedule pass — completion and leveling are two separate,
/// sequential state writes (at-most-once: a grant in flight when the
/// process exits is lost).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineSet {
    Grants,
    Completions,
}

// ═══════════════════════════════════════════════════════════════════════
// CHARACTER SHEET
// ═══════════════════════════════════════════════════════════════════════

/// Coarse power tier derived purely from level via fixed thresholds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Rank {
    #[default]
    F,
    E,
    D,
    C,
    B,
    A,
    S,
    Ss,
    Sss,
    Sovereign,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::F => "F",
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
            Rank::Ss => "SS",
            Rank::Sss => "SSS",
            Rank::Sovereign => "Sovereign",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The seven attribute scores raised by leveling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub vitality: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub perception: i32,
    pub willpower: i32,
    pub charisma: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: 10,
            vitality: 10,
            agility: 10,
            intelligence: 10,
            perception: 10,
            willpower: 10,
            charisma: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Strength,
    Vitality,
    Agility,
    Intelligence,
    Perception,
    Willpower,
    Charisma,
}

impl Attributes {
    pub fn get(&self, kind: AttributeKind) -> i32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Vitality => self.vitality,
            AttributeKind::Agility => self.agility,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Perception => self.perception,
            AttributeKind::Willpower => self.willpower,
            AttributeKind::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, value: i32) {
        match kind {
            AttributeKind::Strength => self.strength = value,
            AttributeKind::Vitality => self.vitality = value,
            AttributeKind::Agility => self.agility = value,
            AttributeKind::Intelligence => self.intelligence = value,
            AttributeKind::Perception => self.perception = value,
            AttributeKind::Willpower => self.willpower = value,
            AttributeKind::Charisma => self.charisma = value,
        }
    }
}

/// Bounded condition gauges on the character sheet. The engine stores
/// whatever values callers set; it does not clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GaugeKind {
    Fatigue,
    Sync,
    Integrity,
}

/// The character: the one aggregate root that always exists exactly once.
/// `xp` is always strictly less than `xp_to_next`; `rank` and `xp_to_next`
/// are derived and recomputed on every level change.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    pub rank: Rank,
    pub attributes: Attributes,
    pub fatigue: f32,
    pub sync: f32,
    pub integrity: f32,
    /// Currently assumed transformation form, if any.
    pub active_form: Option<String>,
    /// Target heart rate derived from the active form's declared range.
    pub current_bpm: u32,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            name: String::from("Ascendant"),
            level: 1,
            xp: 0,
            // floor(200 * 1^1.45) — must match progression::xp_required_for_level(1)
            xp_to_next: 200,
            rank: Rank::F,
            attributes: Attributes::default(),
            fatigue: 0.0,
            sync: 50.0,
            integrity: 100.0,
            active_form: None,
            current_bpm: 70,
        }
    }
}

impl CharacterSheet {
    pub fn gauge(&self, kind: GaugeKind) -> f32 {
        match kind {
            GaugeKind::Fatigue => self.fatigue,
            GaugeKind::Sync => self.sync,
            GaugeKind::Integrity => self.integrity,
        }
    }

    pub fn set_gauge(&mut self, kind: GaugeKind, value: f32) {
        match kind {
            GaugeKind::Fatigue => self.fatigue = value,
            GaugeKind::Sync => self.sync = value,
            GaugeKind::Integrity => self.integrity = value,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WALLET — named currencies
// ═══════════════════════════════════════════════════════════════════════

/// The currency that skill unlocks are paid in.
pub const CODEX_POINTS: &str = "Codex Points";
/// Secondary currency granted by rewards and rituals.
pub const ESSENCE: &str = "Essence";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub amount: i64,
}

/// All currencies, unique by name. Amounts are never clamped here — a
/// negative balance is representable and left to callers to interpret.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub currencies: Vec<Currency>,
}

impl Wallet {
    pub fn amount(&self, name: &str) -> i64 {
        self.currencies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    /// Adds `delta` to the named currency, creating it on first credit.
    pub fn credit(&mut self, name: &str, delta: i64) {
        match self.currencies.iter_mut().find(|c| c.name == name) {
            Some(c) => c.amount += delta,
            None => self.currencies.push(Currency {
                name: name.to_string(),
                amount: delta,
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ENERGY SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySystem {
    pub name: String,
    pub current: f32,
    pub max: f32,
    pub status: String,
    pub description: String,
}

/// Name-keyed collection; missing default entries are backfilled on load.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergySystems {
    pub systems: HashMap<String, EnergySystem>,
}

// ═══════════════════════════════════════════════════════════════════════
// SKILLS — codex, sub-skills, proficiency
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 1 (foundation) through 7 (apex).
    pub tier: u8,
    pub category: String,
    pub energy_type: String,
    pub unlocked: bool,
    /// Codex Points debited by an unlock.
    pub cost: i64,
}

/// A sub-skill's identity is only meaningful relative to its parent skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: u8,
    pub energy_type: String,
    pub unlocked: bool,
    pub cost: i64,
}

/// Skill catalog plus accumulated proficiency.
///
/// Proficiency is keyed by `skillId` or `parentId:subId` and only ever
/// increases; it is mutated exclusively by quest/task completion, never by
/// structural skill edits.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCodex {
    pub skills: Vec<Skill>,
    pub sub_skills: HashMap<String, Vec<SubSkill>>,
    pub proficiency: HashMap<String, u64>,
}

impl SkillCodex {
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn skill_mut(&mut self, id: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.id == id)
    }

    pub fn add_proficiency(&mut self, key: &str, amount: u64) {
        *self.proficiency.entry(key.to_string()).or_insert(0) += amount;
    }
}

/// Composite proficiency key: `skillId` alone or `parentId:subId`.
pub fn proficiency_key(skill_id: &str, sub_skill_id: Option<&str>) -> String {
    match sub_skill_id {
        Some(sub) => format!("{}:{}", skill_id, sub),
        None => skill_id.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUESTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestStatus {
    #[default]
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub current: u32,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyReward {
    pub name: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootReward {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillXpReward {
    pub amount: u64,
    /// Proficiency keys (`skillId` or `parentId:subId`) the grant applies to.
    pub skill_keys: Vec<String>,
}

/// Declared rewards on a quest. The resolver switches on which optional
/// fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSet {
    pub currencies: Vec<CurrencyReward>,
    pub loot: Vec<LootReward>,
    pub skill_xp: Option<SkillXpReward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub quest_type: String,
    pub status: QuestStatus,
    pub xp_reward: u64,
    pub progress: Option<QuestProgress>,
    pub rewards: RewardSet,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestLog {
    pub quests: Vec<Quest>,
}

impl QuestLog {
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn quest_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TASKS & HABITS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskKind {
    #[default]
    Task,
    Habit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Recurrence {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSkillReward {
    pub skill_id: String,
    pub sub_skill_id: Option<String>,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub recurrence: Recurrence,
    pub xp_reward: u64,
    pub skill_reward: Option<TaskSkillReward>,
    /// Monotonic completion counter; increments on every completion.
    pub completed_count: u32,
    pub streak: u32,
    pub last_completed: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Tasks shown on the board: everything not archived.
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Archived)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY — schema V2
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub label: String,
    pub value: f32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub slot: String,
    pub name: String,
    pub tier: String,
    pub description: String,
    pub effects: Vec<ItemEffect>,
    pub quantity: u32,
}

impl InventoryItem {
    /// Bare item created when loot lands with no matching entry.
    pub fn loot(name: &str, quantity: u32) -> Self {
        Self {
            id: fresh_id("item"),
            slot: String::from("relic"),
            name: name.to_string(),
            tier: String::from("Standard"),
            description: String::new(),
            effects: Vec::new(),
            quantity,
        }
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn item_mut(&mut self, id: &str) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Merges loot by name: increments quantity if present, appends otherwise.
    pub fn grant_loot(&mut self, name: &str, quantity: u32) {
        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(InventoryItem::loot(name, quantity)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TRANSFORMATION FORMS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformForm {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free text, e.g. "120-140 BPM". The first embedded integer becomes
    /// the sheet's target BPM when the form is assumed.
    pub bpm_range: String,
    pub aura: String,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transformations {
    pub forms: Vec<TransformForm>,
}

// ═══════════════════════════════════════════════════════════════════════
// ROSTER & COUNCILS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMember {
    pub id: String,
    pub name: String,
    pub title: String,
    pub role: String,
    pub bond: u8,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub members: Vec<RosterMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Council {
    pub id: String,
    pub name: String,
    pub purpose: String,
    pub member_ids: Vec<String>,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Councils {
    pub councils: Vec<Council>,
}

// ═══════════════════════════════════════════════════════════════════════
// VAULT & RITUALS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

/// Journal of record. Append-only in practice; deletion is supported.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub entries: Vec<VaultEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RitualPhase {
    #[default]
    Morning,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ritual {
    pub id: String,
    pub name: String,
    pub phase: RitualPhase,
    pub steps: Vec<String>,
    pub active: bool,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rituals {
    pub rituals: Vec<Ritual>,
}

// ═══════════════════════════════════════════════════════════════════════
// PLAY STATS — lifetime counters, persisted with the snapshot
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayStats {
    pub total_xp_earned: u64,
    pub quests_completed: u64,
    pub tasks_completed: u64,
    pub levels_gained: u64,
    pub skills_unlocked: u64,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — mutation operations
// ═══════════════════════════════════════════════════════════════════════

/// Grants character experience. Zero is a no-op that still marks the
/// sheet dirty so the snapshot is re-persisted.
#[derive(Event, Debug, Clone)]
pub struct AddXpEvent {
    pub amount: u64,
}

/// Emitted by the progression system whenever a level boundary is crossed.
#[derive(Event, Debug, Clone)]
pub struct LevelUpEvent {
    pub new_level: u32,
    pub new_rank: Rank,
}

#[derive(Event, Debug, Clone)]
pub struct AttributeSetEvent {
    pub attribute: AttributeKind,
    pub value: i32,
}

#[derive(Event, Debug, Clone)]
pub struct GaugeSetEvent {
    pub gauge: GaugeKind,
    pub value: f32,
}

#[derive(Event, Debug, Clone)]
pub struct CurrencyChangeEvent {
    pub name: String,
    pub delta: i64,
    pub reason: String,
}

// ── Quests ──────────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct QuestCreateEvent {
    pub title: String,
    pub description: String,
    pub quest_type: String,
    pub status: QuestStatus,
    pub xp_reward: u64,
    pub progress: Option<QuestProgress>,
    pub rewards: RewardSet,
}

#[derive(Event, Debug, Clone)]
pub struct QuestProgressEvent {
    pub id: String,
    pub current: u32,
    pub target: Option<u32>,
}

#[derive(Event, Debug, Clone)]
pub struct QuestCompleteEvent {
    pub id: String,
}

/// Field patch; `None` leaves the field untouched.
#[derive(Event, Debug, Clone, Default)]
pub struct QuestEditEvent {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub quest_type: Option<String>,
    pub xp_reward: Option<u64>,
    pub rewards: Option<RewardSet>,
}

#[derive(Event, Debug, Clone)]
pub struct QuestDeleteEvent {
    pub id: String,
}

// ── Tasks & habits ──────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct TaskCreateEvent {
    pub title: String,
    pub description: String,
    pub kind: TaskKind,
    pub recurrence: Recurrence,
    pub xp_reward: u64,
    pub skill_reward: Option<TaskSkillReward>,
}

#[derive(Event, Debug, Clone)]
pub struct TaskCompleteEvent {
    pub id: String,
}

/// Field patch; the doubled `Option` on `skill_reward` distinguishes
/// "leave alone" from "clear the link".
#[derive(Event, Debug, Clone, Default)]
pub struct TaskEditEvent {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub xp_reward: Option<u64>,
    pub skill_reward: Option<Option<TaskSkillReward>>,
}

#[derive(Event, Debug, Clone)]
pub struct TaskDeleteEvent {
    pub id: String,
}

/// Flips a task between `Archived` and `Active`.
#[derive(Event, Debug, Clone)]
pub struct TaskArchiveToggleEvent {
    pub id: String,
}

// ── Skills ──────────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct SkillUnlockEvent {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct SkillCreateEvent {
    pub name: String,
    pub description: String,
    pub tier: u8,
    pub category: String,
    pub energy_type: String,
    pub cost: i64,
}

#[derive(Event, Debug, Clone, Default)]
pub struct SkillEditEvent {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tier: Option<u8>,
    pub category: Option<String>,
    pub energy_type: Option<String>,
    pub cost: Option<i64>,
}

#[derive(Event, Debug, Clone)]
pub struct SkillDeleteEvent {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct SubSkillCreateEvent {
    pub parent_id: String,
    pub name: String,
    pub description: String,
    pub tier: u8,
    pub energy_type: String,
    pub cost: i64,
}

#[derive(Event, Debug, Clone, Default)]
pub struct SubSkillEditEvent {
    pub parent_id: String,
    pub sub_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tier: Option<u8>,
    pub cost: Option<i64>,
}

#[derive(Event, Debug, Clone)]
pub struct SubSkillDeleteEvent {
    pub parent_id: String,
    pub sub_id: String,
}

// ── Forms ───────────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct SetFormEvent {
    pub form_id: String,
}

// ── Inventory ───────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct ItemAddEvent {
    pub slot: String,
    pub name: String,
    pub tier: String,
    pub description: String,
    pub effects: Vec<ItemEffect>,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone, Default)]
pub struct ItemEditEvent {
    pub id: String,
    pub slot: Option<String>,
    pub name: Option<String>,
    pub tier: Option<String>,
    pub description: Option<String>,
    pub effects: Option<Vec<ItemEffect>>,
    pub quantity: Option<u32>,
}

#[derive(Event, Debug, Clone)]
pub struct ItemDeleteEvent {
    pub id: String,
}

// ── Vault & rituals ─────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct VaultAppendEvent {
    pub title: String,
    pub body: String,
    pub category: String,
    pub mood: String,
}

#[derive(Event, Debug, Clone)]
pub struct VaultDeleteEvent {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct RitualAddEvent {
    pub name: String,
    pub phase: RitualPhase,
    pub steps: Vec<String>,
}

#[derive(Event, Debug, Clone)]
pub struct RitualDeleteEvent {
    pub id: String,
}

// ═══════════════════════════════════════════════════════════════════════
// SAVE DATA — the whole-state document
// ═══════════════════════════════════════════════════════════════════════

/// One opaque, versioned snapshot of the entire store. Written after every
/// mutation, read once at startup, and mirrored (best-effort) to the
/// remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub saved_at: i64,
    pub character: CharacterSheet,
    pub wallet: Wallet,
    pub energy_systems: EnergySystems,
    pub skills: SkillCodex,
    pub quests: QuestLog,
    pub tasks: TaskBoard,
    pub inventory: Inventory,
    pub transformations: Transformations,
    pub roster: Roster,
    pub councils: Councils,
    pub vault: Vault,
    pub rituals: Rituals,
    pub stats: PlayStats,
}

/// Sent by the persistence gateway after each local snapshot write attempt.
/// The remote mirror listens for this. In-memory state is authoritative
/// regardless of `success`.
#[derive(Event, Debug, Clone)]
pub struct SnapshotWrittenEvent {
    pub success: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// IDENTIFIERS
// ═══════════════════════════════════════════════════════════════════════

/// Fresh collision-resistant id: millisecond timestamp plus random suffix.
pub fn fresh_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{}_{:x}{:04x}", prefix, millis, rand::random::<u16>())
}
