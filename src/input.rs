use bevy::prelude::*;

use light_wave::LightAnimation;

use crate::scene::ShowcaseLight;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlEvent>()
            .add_systems(Update, (collect_control_events, apply_control_events).chain());
    }
}

/// Runtime edits to every showcase light's configuration
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    CycleWaveform,
    CycleChannel,
    ToggleIntermittent,
    ToggleIntensity,
}

impl ControlEvent {
    fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(ControlEvent::CycleWaveform),
            KeyCode::KeyC => Some(ControlEvent::CycleChannel),
            KeyCode::Space => Some(ControlEvent::ToggleIntermittent),
            KeyCode::KeyI => Some(ControlEvent::ToggleIntensity),
            _ => None,
        }
    }

    /// Apply the edit to one animation
    pub fn apply(self, animation: &mut LightAnimation) {
        match self {
            ControlEvent::CycleWaveform => {
                animation.wave.waveform = animation.wave.waveform.next();
            }
            ControlEvent::CycleChannel => {
                animation.color_channel = animation.color_channel.next();
            }
            ControlEvent::ToggleIntermittent => {
                animation.intermittency.enabled = !animation.intermittency.enabled;
            }
            ControlEvent::ToggleIntensity => {
                animation.affects_intensity = !animation.affects_intensity;
            }
        }
    }
}

fn collect_control_events(keys: Res<ButtonInput<KeyCode>>, mut out: MessageWriter<ControlEvent>) {
    for key in keys.get_just_pressed() {
        if let Some(event) = ControlEvent::from_key(*key) {
            out.write(event);
        }
    }
}

fn apply_control_events(
    mut events: MessageReader<ControlEvent>,
    mut lights: Query<(&ShowcaseLight, &mut LightAnimation)>,
) {
    for event in events.read() {
        for (showcase, mut animation) in &mut lights {
            event.apply(&mut animation);
            info!(
                "{:?} -> '{}': {:?} wave, channel {:?}, intermittent={}, affects_intensity={}",
                event,
                showcase.preset,
                animation.wave.waveform,
                animation.color_channel,
                animation.intermittency.enabled,
                animation.affects_intensity
            );
        }
    }
}
