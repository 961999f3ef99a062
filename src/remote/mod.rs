//! Remote mirror — a best-effort copy of the snapshot in a remote store.
//!
//! Strictly a peer of local persistence, never a dependency: every
//! operation here is independently callable, returns `NotConfigured` when
//! no endpoint is set, and runs off-thread when triggered by a local save
//! so a mutation can never block on the network. Local and remote state
//! are allowed to diverge; the in-memory store always wins.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use serde::de::DeserializeOwned;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Remote endpoint settings, read from the environment. Both fields empty
/// means the mirror is off and every operation reports `NotConfigured`.
#[derive(Resource, Debug, Clone, Default)]
pub struct RemoteConfig {
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
}

impl RemoteConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ASCENDANT_SYNC_URL").ok(),
            auth_token: std::env::var("ASCENDANT_SYNC_TOKEN").ok(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Outcome of a remote call that did not fail: either the result, or a
/// statement that no endpoint is configured.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteStatus<T> {
    Done(T),
    NotConfigured,
}

#[derive(Debug)]
pub enum RemoteError {
    Http(String),
    Decode(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Http(msg) => write!(f, "request failed: {}", msg),
            RemoteError::Decode(msg) => write!(f, "response unreadable: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Collection names for the narrow per-entity operations.
pub mod collections {
    pub const QUESTS: &str = "quests";
    pub const TASKS: &str = "tasks";
    pub const SKILLS: &str = "skills";
    pub const VAULT: &str = "vault";
    pub const EVENTS: &str = "events";
    pub const REMINDERS: &str = "reminders";
    pub const THREADS: &str = "threads";
}

// ─────────────────────────────────────────────────────────────────────────────
// Remote-only entity shapes
// ─────────────────────────────────────────────────────────────────────────────

/// Calendar-linked event kept only in the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub linked_quest_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub message: String,
    pub remind_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// One conversation with the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: String,
    pub title: String,
    pub messages: Vec<ChatMessage>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Client operations (native only — the browser build keeps the mirror off)
// ─────────────────────────────────────────────────────────────────────────────

fn endpoint(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}

#[cfg(not(target_arch = "wasm32"))]
fn get_json<T: DeserializeOwned>(config: &RemoteConfig, url: &str) -> Result<T, RemoteError> {
    let agent = ureq::Agent::new_with_defaults();
    let mut request = agent.get(url);
    if let Some(token) = &config.auth_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let response = request.call().map_err(|e| RemoteError::Http(e.to_string()))?;
    response
        .into_body()
        .read_json()
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn put_json<T: Serialize>(config: &RemoteConfig, url: &str, body: &T) -> Result<(), RemoteError> {
    let agent = ureq::Agent::new_with_defaults();
    let mut request = agent.put(url);
    if let Some(token) = &config.auth_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    request
        .send_json(body)
        .map_err(|e| RemoteError::Http(e.to_string()))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn post_json<T: Serialize>(config: &RemoteConfig, url: &str, body: &T) -> Result<(), RemoteError> {
    let agent = ureq::Agent::new_with_defaults();
    let mut request = agent.post(url);
    if let Some(token) = &config.auth_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    request
        .send_json(body)
        .map_err(|e| RemoteError::Http(e.to_string()))?;
    Ok(())
}

/// Pushes the whole snapshot to the remote store.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_snapshot(
    config: &RemoteConfig,
    data: &SaveData,
) -> Result<RemoteStatus<()>, RemoteError> {
    let Some(base) = &config.base_url else {
        return Ok(RemoteStatus::NotConfigured);
    };
    put_json(config, &endpoint(base, &["state"]), data)?;
    Ok(RemoteStatus::Done(()))
}

/// Fetches the whole snapshot from the remote store.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_snapshot(config: &RemoteConfig) -> Result<RemoteStatus<SaveData>, RemoteError> {
    let Some(base) = &config.base_url else {
        return Ok(RemoteStatus::NotConfigured);
    };
    let data = get_json(config, &endpoint(base, &["state"]))?;
    Ok(RemoteStatus::Done(data))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn list_entities<T: DeserializeOwned>(
    config: &RemoteConfig,
    collection: &str,
) -> Result<RemoteStatus<Vec<T>>, RemoteError> {
    let Some(base) = &config.base_url else {
        return Ok(RemoteStatus::NotConfigured);
    };
    let entities = get_json(config, &endpoint(base, &[collection]))?;
    Ok(RemoteStatus::Done(entities))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_entity<T: Serialize>(
    config: &RemoteConfig,
    collection: &str,
    body: &T,
) -> Result<RemoteStatus<()>, RemoteError> {
    let Some(base) = &config.base_url else {
        return Ok(RemoteStatus::NotConfigured);
    };
    post_json(config, &endpoint(base, &[collection]), body)?;
    Ok(RemoteStatus::Done(()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn update_entity<T: Serialize>(
    config: &RemoteConfig,
    collection: &str,
    id: &str,
    body: &T,
) -> Result<RemoteStatus<()>, RemoteError> {
    let Some(base) = &config.base_url else {
        return Ok(RemoteStatus::NotConfigured);
    };
    put_json(config, &endpoint(base, &[collection, id]), body)?;
    Ok(RemoteStatus::Done(()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn delete_entity(
    config: &RemoteConfig,
    collection: &str,
    id: &str,
) -> Result<RemoteStatus<()>, RemoteError> {
    let Some(base) = &config.base_url else {
        return Ok(RemoteStatus::NotConfigured);
    };
    let agent = ureq::Agent::new_with_defaults();
    let mut request = agent.delete(&endpoint(base, &[collection, id]));
    if let Some(token) = &config.auth_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    request.call().map_err(|e| RemoteError::Http(e.to_string()))?;
    Ok(RemoteStatus::Done(()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Mirrors the snapshot after each local write, on a detached thread.
/// Failures are logged and forgotten; nothing retries.
#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::too_many_arguments)]
pub fn mirror_snapshot(
    mut written: EventReader<SnapshotWrittenEvent>,
    config: Res<RemoteConfig>,
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
) {
    if written.read().next().is_none() {
        return;
    }
    written.clear();
    if config.base_url.is_none() {
        return;
    }

    let data = SaveData {
        version: crate::save::SAVE_VERSION,
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
    let config = config.clone();

    std::thread::spawn(move || match save_snapshot(&config, &data) {
        Ok(RemoteStatus::Done(())) => info!("[Sync] Snapshot mirrored"),
        Ok(RemoteStatus::NotConfigured) => {}
        Err(e) => warn!("[Sync] Mirror failed (ignored): {}", e),
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct RemotePlugin;

impl Plugin for RemotePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RemoteConfig::from_env());
        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            PostUpdate,
            mirror_snapshot
                .after(crate::save::persist_on_change)
                .run_if(in_state(AppState::Ready)),
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
    fn endpoint_joins_segments_without_doubled_slashes() {
        assert_eq!(
            endpoint("https://sync.example.com/", &["state"]),
            "https://sync.example.com/state"
        );
        assert_eq!(
            endpoint("https://sync.example.com", &[collections::QUESTS, "q_1"]),
            "https://sync.example.com/quests/q_1"
        );
    }

    #[test]
    fn unconfigured_operations_say_so_instead_of_failing() {
        let config = RemoteConfig::default();

        assert_eq!(
            load_snapshot(&config).unwrap(),
            RemoteStatus::NotConfigured
        );
        assert_eq!(
            list_entities::<ChatThread>(&config, collections::THREADS).unwrap(),
            RemoteStatus::NotConfigured
        );
        assert_eq!(
            create_entity(
                &config,
                collections::REMINDERS,
                &Reminder {
                    id: "r_1".to_string(),
                    message: "Council of Dawn".to_string(),
                    remind_at: Utc::now(),
                }
            )
            .unwrap(),
            RemoteStatus::NotConfigured
        );
        assert_eq!(
            delete_entity(&config, collections::EVENTS, "e_1").unwrap(),
            RemoteStatus::NotConfigured
        );
    }

    #[test]
    fn chat_thread_round_trips_as_json() {
        let thread = ChatThread {
            id: "t_1".to_string(),
            title: "Rank-up review".to_string(),
            messages: vec![ChatMessage {
                role: "assistant".to_string(),
                content: "Level 20 reached. D rank unlocked.".to_string(),
                sent_at: Utc::now(),
            }],
        };
        let json = serde_json::to_string(&thread).unwrap();
        let back: ChatThread = serde_json::from_str(&json).unwrap();
        assert_eq!(back, thread);
    }
}
