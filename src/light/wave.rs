use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::light::random::RandomSource;

/// Periodic shape driving the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    #[default]
    Sinus,
    Triangle,
    Square,
    Sawtooth,
    InvertedSaw,
    /// Fresh uniform sample on every evaluation
    Noise,
}

impl Waveform {
    pub const ALL: [Waveform; 6] = [
        Waveform::Sinus,
        Waveform::Triangle,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::InvertedSaw,
        Waveform::Noise,
    ];

    /// Next waveform in declaration order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&w| w == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Raw shape at normalized position `x` in [0, 1), before amplitude/offset
    pub fn sample(self, x: f32, rng: &mut impl RandomSource) -> f32 {
        match self {
            Waveform::Sinus => (x * TAU).sin(),
            Waveform::Triangle => {
                if x < 0.5 {
                    4.0 * x - 1.0
                } else {
                    -4.0 * x + 3.0
                }
            }
            Waveform::Square => {
                if x < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => x,
            Waveform::InvertedSaw => 1.0 - x,
            Waveform::Noise => 1.0 - rng.value() * 2.0,
        }
    }
}

/// Shape and scaling of the wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveSettings {
    pub waveform: Waveform,
    /// Constant added after scaling
    pub offset: f32,
    pub amplitude: f32,
    /// Start point inside the cycle, in seconds
    pub phase: f32,
    /// Cycles per second
    pub frequency: f32,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sinus,
            offset: 0.0,
            amplitude: 1.0,
            phase: 0.0,
            frequency: 0.5,
        }
    }
}

impl WaveSettings {
    /// Position inside the current cycle at time `t`, in [0, 1)
    pub fn cycle_position(&self, t: f32) -> f32 {
        let x = (t + self.phase) * self.frequency;
        x - x.floor()
    }

    /// Wave value at time `t`: `shape * amplitude + offset`
    pub fn evaluate(&self, t: f32, rng: &mut impl RandomSource) -> f32 {
        let y = self.waveform.sample(self.cycle_position(t), rng);
        y * self.amplitude + self.offset
    }
}
