use serde::{Deserialize, Serialize};

use crate::light::random::RandomSource;

/// Bounds for the randomized on/off intervals of an intermittent light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntermittencySettings {
    pub enabled: bool,
    /// Steady (non-wave) interval bounds, in seconds
    pub smallest_nonwave_interval: f32,
    pub largest_nonwave_interval: f32,
    /// Animated (wave) interval bounds, in seconds
    pub smallest_wave_interval: f32,
    pub largest_wave_interval: f32,
}

impl Default for IntermittencySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            smallest_nonwave_interval: 1.0,
            largest_nonwave_interval: 5.0,
            smallest_wave_interval: 0.1,
            largest_wave_interval: 1.0,
        }
    }
}

/// What happened during one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalChange {
    None,
    /// Idle -> Active
    Started,
    /// Active -> Idle; the light must go back to its baseline
    Ended,
}

/// Two-state interval timer (idle / in wave interval)
///
/// Starts idle with a zero-length interval, so the first tick with a
/// positive delta enters the wave interval.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntervalTimer {
    pub time_since_last_interval: f32,
    pub next_interval_time: f32,
    pub is_in_interval: bool,
}

impl IntervalTimer {
    /// Advance by `dt` seconds.
    ///
    /// The active check runs right after the idle check within the same
    /// tick, so a freshly started interval can end immediately when its
    /// sampled length is already exceeded. In that case `Ended` is reported.
    pub fn tick(
        &mut self,
        settings: &IntermittencySettings,
        dt: f32,
        rng: &mut impl RandomSource,
    ) -> IntervalChange {
        let mut change = IntervalChange::None;
        self.time_since_last_interval += dt;

        if !self.is_in_interval && self.time_since_last_interval > self.next_interval_time {
            self.is_in_interval = true;
            self.time_since_last_interval = 0.0;
            self.next_interval_time = rng.range(
                settings.smallest_wave_interval,
                settings.largest_wave_interval,
            );
            change = IntervalChange::Started;
        }

        if self.is_in_interval && self.time_since_last_interval > self.next_interval_time {
            self.is_in_interval = false;
            self.time_since_last_interval = 0.0;
            self.next_interval_time = rng.range(
                settings.smallest_nonwave_interval,
                settings.largest_nonwave_interval,
            );
            change = IntervalChange::Ended;
        }

        change
    }
}
