use crate::shared::*;

/// Preset transformation forms. The `bpm_range` text is free-form; the
/// forms system extracts its first integer as the target BPM.
pub fn default_forms() -> Vec<TransformForm> {
    vec![
        TransformForm {
            id: "baseline".to_string(),
            name: "Baseline".to_string(),
            description: "Resting configuration. Recovery, reading, planning.".to_string(),
            bpm_range: "60-75 BPM".to_string(),
            aura: "slate".to_string(),
        },
        TransformForm {
            id: "flow_state".to_string(),
            name: "Flow State".to_string(),
            description: "Locked-in creative output. Time dilates.".to_string(),
            bpm_range: "75-95 BPM".to_string(),
            aura: "azure".to_string(),
        },
        TransformForm {
            id: "surge".to_string(),
            name: "Surge".to_string(),
            description: "Hard training and decisive action under pressure.".to_string(),
            bpm_range: "120-140 BPM".to_string(),
            aura: "ember".to_string(),
        },
        TransformForm {
            id: "overdrive".to_string(),
            name: "Overdrive".to_string(),
            description: "All-out effort. Short bursts only; integrity drains fast.".to_string(),
            bpm_range: "160-180 BPM".to_string(),
            aura: "crimson".to_string(),
        },
    ]
}
