//! Transformation forms — heartbeat-synced operating modes.
//!
//! Selecting a form records it on the character sheet and derives the
//! target BPM gauge from the form's declared range text.

use bevy::prelude::*;

use crate::shared::*;

/// First run of decimal digits embedded in `text`, if any.
/// "120-140 BPM" → 120, "resting (~62)" → 62.
pub fn first_integer(text: &str) -> Option<u32> {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().ok()
}

/// Assumes a transformation form. Unknown form ids are a silent no-op; a
/// range with no embedded integer keeps the previous BPM value.
pub fn handle_set_form(
    mut events: EventReader<SetFormEvent>,
    forms: Res<Transformations>,
    mut sheet: ResMut<CharacterSheet>,
) {
    for ev in events.read() {
        let Some(form) = forms.forms.iter().find(|f| f.id == ev.form_id) else {
            continue;
        };
        sheet.active_form = Some(form.id.clone());
        if let Some(bpm) = first_integer(&form.bpm_range) {
            sheet.current_bpm = bpm;
        }
        info!(
            "[Forms] Assumed \"{}\" — target {} BPM",
            form.name, sheet.current_bpm
        );
    }
}

pub struct FormsPlugin;

impl Plugin for FormsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_set_form.run_if(in_state(AppState::Ready)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integer_of_a_range() {
        assert_eq!(first_integer("120-140 BPM"), Some(120));
        assert_eq!(first_integer("hold near 95 bpm"), Some(95));
        assert_eq!(first_integer("resting (~62)"), Some(62));
    }

    #[test]
    fn no_digits_means_none() {
        assert_eq!(first_integer("steady and calm"), None);
        assert_eq!(first_integer(""), None);
    }

    #[test]
    fn stops_at_first_run_of_digits() {
        assert_eq!(first_integer("60/90 split"), Some(60));
    }
}
