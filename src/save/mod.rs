use bevy::prelude::*;
use chrono::Utc;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
use std::path::PathBuf;

use crate::data;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PUBLIC TYPES
// ═══════════════════════════════════════════════════════════════════════

pub const SAVE_VERSION: u32 = 2;

/// Fixed storage key for the whole-state document: the file stem on
/// native, the localStorage key on the web.
pub const STORAGE_KEY: &str = "ascendant_state";

/// Summary of the persisted snapshot shown on a resume screen.
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    pub exists: bool,
    pub level: u32,
    pub rank: Rank,
    pub codex_points: i64,
    pub saved_at: i64,
}

impl Default for SnapshotInfo {
    fn default() -> Self {
        Self {
            exists: false,
            level: 1,
            rank: Rank::F,
            codex_points: 0,
            saved_at: 0,
        }
    }
}

/// Where the snapshot file lives. Tests point this at a scratch directory.
#[derive(Resource, Debug, Clone)]
pub struct SaveLocation {
    pub dir: PathBuf,
}

impl Default for SaveLocation {
    fn default() -> Self {
        Self {
            dir: saves_directory(),
        }
    }
}

impl SaveLocation {
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FILESYSTEM HELPERS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
fn saves_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("saves")
}

#[cfg(target_arch = "wasm32")]
fn saves_directory() -> PathBuf {
    PathBuf::new()
}

// ═══════════════════════════════════════════════════════════════════════
// SNAPSHOT READ / WRITE
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
pub fn write_snapshot(location: &SaveLocation, data: &SaveData) -> Result<(), String> {
    if !location.dir.exists() {
        fs::create_dir_all(&location.dir)
            .map_err(|e| format!("Could not create saves directory: {}", e))?;
    }

    let json =
        serde_json::to_string_pretty(data).map_err(|e| format!("Serialization failed: {}", e))?;

    let path = location.snapshot_path();
    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, &path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn write_snapshot(_location: &SaveLocation, data: &SaveData) -> Result<(), String> {
    let json = serde_json::to_string(data).map_err(|e| format!("Serialization failed: {}", e))?;
    let storage = web_sys::window()
        .ok_or_else(|| String::from("No window"))?
        .local_storage()
        .map_err(|_| String::from("localStorage unavailable"))?
        .ok_or_else(|| String::from("localStorage unavailable"))?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| String::from("localStorage write rejected"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_snapshot(location: &SaveLocation) -> Result<SaveData, String> {
    let path = location.snapshot_path();
    if !path.exists() {
        return Err(format!("No snapshot at {}", path.display()));
    }
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    let data: SaveData =
        serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))?;

    // Version check — future versions can add migration here
    if data.version != SAVE_VERSION {
        warn!(
            "Snapshot has version {} but current version is {}. Attempting to load anyway.",
            data.version, SAVE_VERSION
        );
    }

    Ok(data)
}

#[cfg(target_arch = "wasm32")]
pub fn read_snapshot(_location: &SaveLocation) -> Result<SaveData, String> {
    let storage = web_sys::window()
        .ok_or_else(|| String::from("No window"))?
        .local_storage()
        .map_err(|_| String::from("localStorage unavailable"))?
        .ok_or_else(|| String::from("localStorage unavailable"))?;
    let json = storage
        .get_item(STORAGE_KEY)
        .map_err(|_| String::from("localStorage read rejected"))?
        .ok_or_else(|| String::from("No snapshot in localStorage"))?;
    serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))
}

/// Reads just enough of the snapshot for a resume screen. Any failure
/// reports a non-existent snapshot rather than an error.
pub fn peek_snapshot(location: &SaveLocation) -> SnapshotInfo {
    match read_snapshot(location) {
        Ok(data) => SnapshotInfo {
            exists: true,
            level: data.character.level,
            rank: data.character.rank,
            codex_points: data.wallet.amount(CODEX_POINTS),
            saved_at: data.saved_at,
        },
        Err(_) => SnapshotInfo::default(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SEED & MERGE
// ═══════════════════════════════════════════════════════════════════════

/// The compiled-in default state for a fresh start (or a discarded
/// snapshot).
pub fn seeded_defaults() -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        saved_at: 0,
        character: CharacterSheet::default(),
        wallet: Wallet {
            currencies: data::default_currencies(),
        },
        energy_systems: EnergySystems {
            systems: data::default_energy_systems()
                .into_iter()
                .map(|s| (s.name.clone(), s))
                .collect(),
        },
        skills: SkillCodex {
            skills: data::default_skills(),
            sub_skills: data::default_sub_skills(),
            proficiency: Default::default(),
        },
        quests: QuestLog::default(),
        tasks: TaskBoard::default(),
        inventory: Inventory {
            items: data::default_items(),
        },
        transformations: Transformations {
            forms: data::default_forms(),
        },
        roster: Roster {
            members: data::default_roster(),
        },
        councils: Councils {
            councils: data::default_councils(),
        },
        vault: Vault::default(),
        rituals: Rituals {
            rituals: data::default_rituals(),
        },
        stats: PlayStats::default(),
    }
}

/// Key-based union: persisted entries win, defaults whose key is absent
/// are appended. Applying it twice gives the same result as once.
fn merge_by_key<T, K, F>(persisted: Vec<T>, defaults: Vec<T>, key: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut merged = persisted;
    for default in defaults {
        if !merged.iter().any(|e| key(e) == key(&default)) {
            merged.push(default);
        }
    }
    merged
}

/// Unions every seeded collection of a loaded snapshot with the compiled-in
/// defaults, so catalog content added in an upgrade reaches old saves while
/// persisted entries stay as the user left them. Non-seeded collections
/// (quests, tasks, vault, character, stats) pass through untouched.
pub fn merge_with_defaults(mut file: SaveData) -> SaveData {
    let defaults = seeded_defaults();

    file.wallet.currencies = merge_by_key(
        file.wallet.currencies,
        defaults.wallet.currencies,
        |c: &Currency| c.name.clone(),
    );
    for (name, system) in defaults.energy_systems.systems {
        file.energy_systems.systems.entry(name).or_insert(system);
    }
    file.skills.skills = merge_by_key(file.skills.skills, defaults.skills.skills, |s: &Skill| {
        s.id.clone()
    });
    for (parent, subs) in defaults.skills.sub_skills {
        file.skills.sub_skills.entry(parent).or_insert(subs);
    }
    file.transformations.forms = merge_by_key(
        file.transformations.forms,
        defaults.transformations.forms,
        |f: &TransformForm| f.id.clone(),
    );
    file.inventory.items = merge_by_key(
        file.inventory.items,
        defaults.inventory.items,
        |i: &InventoryItem| i.id.clone(),
    );
    file.roster.members = merge_by_key(
        file.roster.members,
        defaults.roster.members,
        |m: &RosterMember| m.id.clone(),
    );
    file.councils.councils = merge_by_key(
        file.councils.councils,
        defaults.councils.councils,
        |c: &Council| c.id.clone(),
    );
    file.rituals.rituals = merge_by_key(
        file.rituals.rituals,
        defaults.rituals.rituals,
        |r: &Ritual| r.id.clone(),
    );

    file.version = SAVE_VERSION;
    file
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Startup load: read the persisted snapshot if one exists, fall back to
/// the compiled-in defaults on absence or corruption, union-merge the seed
/// catalogs either way, and apply the result to the store.
#[allow(clippy::too_many_arguments)]
pub fn load_state(
    location: Res<SaveLocation>,
    mut character: ResMut<CharacterSheet>,
    mut wallet: ResMut<Wallet>,
    mut energy_systems: ResMut<EnergySystems>,
    mut skills: ResMut<SkillCodex>,
    mut quests: ResMut<QuestLog>,
    mut tasks: ResMut<TaskBoard>,
    mut inventory: ResMut<Inventory>,
    mut transformations: ResMut<Transformations>,
    mut roster: ResMut<Roster>,
    mut councils: ResMut<Councils>,
    mut vault: ResMut<Vault>,
    mut rituals: ResMut<Rituals>,
    mut stats: ResMut<PlayStats>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let data = match read_snapshot(&location) {
        Ok(file) => {
            info!("[Save] Snapshot loaded (version {})", file.version);
            merge_with_defaults(file)
        }
        Err(e) => {
            // First run or corrupt document; either way the old data is
            // discarded and the seed state takes over.
            warn!("[Save] No usable snapshot: {}. Seeding defaults.", e);
            seeded_defaults()
        }
    };

    *character = data.character;
    *wallet = data.wallet;
    *energy_systems = data.energy_systems;
    *skills = data.skills;
    *quests = data.quests;
    *tasks = data.tasks;
    *inventory = data.inventory;
    *transformations = data.transformations;
    *roster = data.roster;
    *councils = data.councils;
    *vault = data.vault;
    *rituals = data.rituals;
    *stats = data.stats;

    info!(
        "[Save] State ready — level {} ({}), {} quests, {} tasks",
        character.level,
        character.rank,
        quests.quests.len(),
        tasks.tasks.len()
    );
    next_state.set(AppState::Ready);
}

/// Runs after every schedule pass and persists the snapshot whenever any
/// store resource changed. The write is fire-and-forget: a failure is
/// logged and the in-memory state stays authoritative.
#[allow(clippy::too_many_arguments)]
pub fn persist_on_change(
    location: Res<SaveLocation>,
    character: Res<CharacterSheet>,
    wallet: Res<Wallet>,
    energy_systems: Res<EnergySystems>,
    skills: Res<SkillCodex>,
    quests: Res<QuestLog>,
    tasks: Res<TaskBoard>,
    inventory: Res<Inventory>,
    transformations: Res<Transformations>,
    roster: Res<Roster>,
    councils: Res<Councils>,
    vault: Res<Vault>,
    rituals: Res<Rituals>,
    stats: Res<PlayStats>,
    mut written: EventWriter<SnapshotWrittenEvent>,
) {
    let dirty = character.is_changed()
        || wallet.is_changed()
        || energy_systems.is_changed()
        || skills.is_changed()
        || quests.is_changed()
        || tasks.is_changed()
        || inventory.is_changed()
        || transformations.is_changed()
        || roster.is_changed()
        || councils.is_changed()
        || vault.is_changed()
        || rituals.is_changed()
        || stats.is_changed();
    if !dirty {
        return;
    }

    let data = SaveData {
        version: SAVE_VERSION,
        saved_at: Utc::now().timestamp(),
        character: character.clone(),
        wallet: wallet.clone(),
        energy_systems: energy_systems.clone(),
        skills: skills.clone(),
        quests: quests.clone(),
        tasks: tasks.clone(),
        inventory: inventory.clone(),
        transformations: transformations.clone(),
        roster: roster.clone(),
        councils: councils.clone(),
        vault: vault.clone(),
        rituals: rituals.clone(),
        stats: stats.clone(),
    };

    match write_snapshot(&location, &data) {
        Ok(()) => {
            written.send(SnapshotWrittenEvent { success: true });
        }
        Err(e) => {
            warn!("[Save] Snapshot write FAILED: {}", e);
            written.send(SnapshotWrittenEvent { success: false });
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveLocation>()
            .add_systems(OnEnter(AppState::Loading), load_state)
            .add_systems(
                PostUpdate,
                persist_on_change.run_if(in_state(AppState::Ready)),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_location(tag: &str) -> SaveLocation {
        SaveLocation {
            dir: std::env::temp_dir().join(format!("ascendant_test_{}_{:08x}", tag, rand::random::<u32>())),
        }
    }

    #[test]
    fn merge_is_idempotent() {
        let mut persisted = seeded_defaults();
        // Simulate user edits: spent currency, renamed a skill, dropped a form.
        persisted.wallet.credit(CODEX_POINTS, -40);
        persisted.skills.skills[0].name = String::from("Iron Will");
        persisted.transformations.forms.remove(1);

        let once = merge_with_defaults(persisted.clone());
        let twice = merge_with_defaults(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_prefers_persisted_and_unions_missing() {
        let mut persisted = seeded_defaults();
        persisted.skills.skills[0].unlocked = true;
        persisted.wallet.currencies.retain(|c| c.name != ESSENCE);
        persisted.energy_systems.systems.remove("Focus");

        let merged = merge_with_defaults(persisted);

        // User state survives...
        assert!(merged.skills.skills[0].unlocked);
        // ...and catalog entries missing from the save come back.
        assert_eq!(merged.wallet.amount(ESSENCE), 0);
        assert!(merged.wallet.currencies.iter().any(|c| c.name == ESSENCE));
        assert!(merged.energy_systems.systems.contains_key("Focus"));
    }

    #[test]
    fn merge_backfills_missing_sub_skill_trees() {
        let mut persisted = seeded_defaults();
        persisted.skills.sub_skills.remove("deep_work");
        // A pruned tree whose parent key survives stays as the user left it.
        if let Some(subs) = persisted.skills.sub_skills.get_mut("iron_discipline") {
            subs.retain(|s| s.id != "zero_snooze");
        }

        let merged = merge_with_defaults(persisted);

        // Whole missing trees come back from the catalog...
        assert!(merged.skills.sub_skills.contains_key("deep_work"));
        // ...but trees present in the save are kept entry-for-entry.
        let kept = &merged.skills.sub_skills["iron_discipline"];
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "cold_exposure");
    }

    #[test]
    fn snapshot_round_trips_through_disk() {
        let location = scratch_location("roundtrip");
        let mut data = seeded_defaults();
        data.saved_at = 1_770_000_000;
        data.character.level = 12;
        data.character.rank = Rank::E;

        write_snapshot(&location, &data).unwrap();
        let loaded = read_snapshot(&location).unwrap();
        assert_eq!(loaded, data);

        std::fs::remove_dir_all(&location.dir).ok();
    }

    #[test]
    fn corrupt_snapshot_is_an_error_not_a_panic() {
        let location = scratch_location("corrupt");
        std::fs::create_dir_all(&location.dir).unwrap();
        std::fs::write(location.snapshot_path(), "{not json").unwrap();

        assert!(read_snapshot(&location).is_err());

        std::fs::remove_dir_all(&location.dir).ok();
    }

    #[test]
    fn missing_snapshot_is_an_error_not_a_panic() {
        let location = scratch_location("missing");
        assert!(read_snapshot(&location).is_err());
        assert!(!peek_snapshot(&location).exists);
    }

    #[test]
    fn peek_reads_summary_fields() {
        let location = scratch_location("peek");
        let mut data = seeded_defaults();
        data.saved_at = 1_770_000_123;
        data.character.level = 42;
        data.character.rank = Rank::B;

        write_snapshot(&location, &data).unwrap();
        let info = peek_snapshot(&location);
        assert!(info.exists);
        assert_eq!(info.level, 42);
        assert_eq!(info.rank, Rank::B);
        assert_eq!(info.codex_points, 100);
        assert_eq!(info.saved_at, 1_770_000_123);

        std::fs::remove_dir_all(&location.dir).ok();
    }
}
