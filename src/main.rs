mod data;
mod economy;
mod forms;
mod inventory;
mod progression;
mod quests;
mod remote;
mod save;
mod shared;
mod skills;
mod tasks;
mod vault;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use shared::*;

fn main() {
    App::new()
        // Headless runner: no window, no renderer. A presentation layer
        // adds its own plugins on top of this App and drives the engine
        // through the shared events.
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(50))),
        )
        .add_plugins(StatesPlugin)
        .add_plugins(LogPlugin::default())
        // Engine state
        .init_state::<AppState>()
        // Store resources
        .init_resource::<CharacterSheet>()
        .init_resource::<Wallet>()
        .init_resource::<EnergySystems>()
        .init_resource::<SkillCodex>()
        .init_resource::<QuestLog>()
        .init_resource::<TaskBoard>()
        .init_resource::<Inventory>()
        .init_resource::<Transformations>()
        .init_resource::<Roster>()
        .init_resource::<Councils>()
        .init_resource::<Vault>()
        .init_resource::<Rituals>()
        .init_resource::<PlayStats>()
        // Events
        .add_event::<AddXpEvent>()
        .add_event::<LevelUpEvent>()
        .add_event::<AttributeSetEvent>()
        .add_event::<GaugeSetEvent>()
        .add_event::<CurrencyChangeEvent>()
        .add_event::<QuestCreateEvent>()
        .add_event::<QuestProgressEvent>()
        .add_event::<QuestCompleteEvent>()
        .add_event::<QuestEditEvent>()
        .add_event::<QuestDeleteEvent>()
        .add_event::<TaskCreateEvent>()
        .add_event::<TaskCompleteEvent>()
        .add_event::<TaskEditEvent>()
        .add_event::<TaskDeleteEvent>()
        .add_event::<TaskArchiveToggleEvent>()
        .add_event::<SkillUnlockEvent>()
        .add_event::<SkillCreateEvent>()
        .add_event::<SkillEditEvent>()
        .add_event::<SkillDeleteEvent>()
        .add_event::<SubSkillCreateEvent>()
        .add_event::<SubSkillEditEvent>()
        .add_event::<SubSkillDeleteEvent>()
        .add_event::<SetFormEvent>()
        .add_event::<ItemAddEvent>()
        .add_event::<ItemEditEvent>()
        .add_event::<ItemDeleteEvent>()
        .add_event::<VaultAppendEvent>()
        .add_event::<VaultDeleteEvent>()
        .add_event::<RitualAddEvent>()
        .add_event::<RitualDeleteEvent>()
        .add_event::<SnapshotWrittenEvent>()
        // Domain plugins
        .add_plugins(progression::ProgressionPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(quests::QuestsPlugin)
        .add_plugins(tasks::TasksPlugin)
        .add_plugins(skills::SkillsPlugin)
        .add_plugins(forms::FormsPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(vault::VaultPlugin)
        // Persistence + remote mirror
        .add_plugins(save::SavePlugin)
        .add_plugins(remote::RemotePlugin)
        .run();
}
