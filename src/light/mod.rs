pub mod animations;
pub mod components;
pub mod intermittency;
pub mod presets;
pub mod random;
pub mod target;
pub mod wave;

pub use animations::{animate_lights, capture_light_baselines};
pub use components::{Baseline, ColorChannel, LightAnimation};
pub use intermittency::{IntermittencySettings, IntervalChange, IntervalTimer};
pub use presets::LightPresets;
pub use random::{LightRng, RandomSource};
pub use target::{LightState, LightTarget};
pub use wave::{WaveSettings, Waveform};
