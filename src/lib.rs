pub mod light;
pub mod plugin;

pub use light::{
    ColorChannel, IntermittencySettings, LightAnimation, LightPresets, LightState, LightTarget,
    RandomSource, WaveSettings, Waveform,
};
pub use plugin::LightWavePlugin;
