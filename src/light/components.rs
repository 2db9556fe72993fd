use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::light::{
    intermittency::{IntermittencySettings, IntervalChange, IntervalTimer},
    random::RandomSource,
    target::{LightState, LightTarget},
    wave::WaveSettings,
};

/// Which part of the light color the wave scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorChannel {
    /// All four components, alpha included
    #[default]
    All,
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 4] = [
        ColorChannel::All,
        ColorChannel::Red,
        ColorChannel::Green,
        ColorChannel::Blue,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Color and intensity the light had before any animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub color: LinearRgba,
    pub intensity: f32,
}

/// Animates the color and intensity of the light on the same entity
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightAnimation {
    pub color_channel: ColorChannel,
    pub wave: WaveSettings,
    pub affects_intensity: bool,
    pub intermittency: IntermittencySettings,

    /// Captured once, before the first mutation
    #[serde(skip)]
    baseline: Option<Baseline>,
    #[serde(skip)]
    timer: IntervalTimer,
}

impl Default for LightAnimation {
    fn default() -> Self {
        LightAnimation {
            color_channel: ColorChannel::All,
            wave: WaveSettings::default(),
            affects_intensity: true,
            intermittency: IntermittencySettings::default(),
            baseline: None,
            timer: IntervalTimer::default(),
        }
    }
}

impl LightAnimation {
    /// Default animation driven by the given wave
    pub fn with_wave(wave: WaveSettings) -> Self {
        LightAnimation {
            wave,
            ..Default::default()
        }
    }

    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn is_initialized(&self) -> bool {
        self.baseline.is_some()
    }

    /// True when the wave is currently applied to the light
    pub fn is_waving(&self) -> bool {
        !self.intermittency.enabled || self.timer.is_in_interval
    }

    /// Capture the baseline. Only the first call has any effect.
    pub fn initialize(&mut self, original_color: LinearRgba, original_intensity: f32) {
        if self.baseline.is_some() {
            return;
        }
        self.baseline = Some(Baseline {
            color: original_color,
            intensity: original_intensity,
        });
    }

    /// Run one frame against `light` and return its resulting state.
    ///
    /// `time` is the elapsed time used to evaluate the wave, `delta` the
    /// frame time fed to the interval timer. A light that was never
    /// initialized has its current values captured as the baseline first.
    pub fn advance(
        &mut self,
        delta: f32,
        time: f32,
        light: &mut impl LightTarget,
        rng: &mut impl RandomSource,
    ) -> LightState {
        let baseline = *self.baseline.get_or_insert_with(|| Baseline {
            color: light.color(),
            intensity: light.intensity(),
        });

        if self.intermittency.enabled {
            let change = self.timer.tick(&self.intermittency, delta, rng);
            if change == IntervalChange::Ended {
                light.set_color(baseline.color);
                light.set_intensity(baseline.intensity);
            }
            if !self.timer.is_in_interval {
                return LightState::of(light);
            }
        }

        if self.affects_intensity {
            light.set_intensity(baseline.intensity * self.wave.evaluate(time, rng));
        }

        let o = baseline.color;
        let c = light.color();
        let color = match self.color_channel {
            ColorChannel::All => {
                let v = self.wave.evaluate(time, rng);
                LinearRgba::new(o.red * v, o.green * v, o.blue * v, o.alpha * v)
            }
            ColorChannel::Red => LinearRgba::new(
                o.red * self.wave.evaluate(time, rng),
                c.green,
                c.blue,
                c.alpha,
            ),
            ColorChannel::Green => LinearRgba::new(
                c.red,
                o.green * self.wave.evaluate(time, rng),
                c.blue,
                c.alpha,
            ),
            ColorChannel::Blue => LinearRgba::new(
                c.red,
                c.green,
                o.blue * self.wave.evaluate(time, rng),
                c.alpha,
            ),
        };
        light.set_color(color);

        LightState::of(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::random::tests::Scripted;
    use crate::light::wave::Waveform;

    const ORIGINAL: LinearRgba = LinearRgba::new(0.8, 0.6, 0.4, 1.0);

    fn light() -> LightState {
        LightState::new(ORIGINAL, 100.0)
    }

    fn square() -> LightAnimation {
        LightAnimation::with_wave(WaveSettings {
            waveform: Waveform::Square,
            offset: 0.0,
            amplitude: 0.5,
            phase: 0.0,
            frequency: 1.0,
        })
    }

    #[test]
    fn test_defaults_match_component_inspector_values() {
        let animation = LightAnimation::default();
        assert_eq!(animation.color_channel, ColorChannel::All);
        assert_eq!(animation.wave.waveform, Waveform::Sinus);
        assert_eq!(animation.wave.frequency, 0.5);
        assert_eq!(animation.wave.amplitude, 1.0);
        assert!(animation.affects_intensity);
        assert!(!animation.intermittency.enabled);
        assert!(!animation.is_initialized());
    }

    #[test]
    fn test_initialize_only_captures_once() {
        let mut animation = LightAnimation::default();
        animation.initialize(ORIGINAL, 100.0);
        animation.initialize(LinearRgba::BLACK, 0.0);

        let baseline = animation.baseline().unwrap();
        assert_eq!(baseline.color, ORIGINAL);
        assert_eq!(baseline.intensity, 100.0);
    }

    #[test]
    fn test_advance_captures_baseline_before_mutating() {
        let mut animation = square();
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        animation.advance(0.016, 0.1, &mut light, &mut rng);

        let baseline = animation.baseline().unwrap();
        assert_eq!(baseline.color, ORIGINAL);
        assert_eq!(baseline.intensity, 100.0);
    }

    #[test]
    fn test_all_channel_scales_every_component() {
        let mut animation = square();
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        let state = animation.advance(0.016, 0.1, &mut light, &mut rng);

        assert_eq!(state.intensity, 50.0);
        assert_eq!(state.color, LinearRgba::new(0.4, 0.3, 0.2, 0.5));
        assert_eq!(state, LightState::of(&light));
    }

    #[test]
    fn test_mutation_is_relative_to_baseline() {
        let mut animation = square();
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        let first = animation.advance(0.016, 0.1, &mut light, &mut rng);
        let second = animation.advance(0.016, 0.1, &mut light, &mut rng);

        assert_eq!(first, second);
        assert_eq!(second.intensity, 50.0);
    }

    #[test]
    fn test_repeated_time_is_idempotent() {
        for waveform in Waveform::ALL.into_iter().filter(|w| *w != Waveform::Noise) {
            let mut animation = LightAnimation::default();
            animation.wave.waveform = waveform;
            let mut light = light();
            let mut rng = Scripted::new(&[0.5]);

            let first = animation.advance(0.016, 1.3, &mut light, &mut rng);
            for _ in 0..5 {
                assert_eq!(animation.advance(0.016, 1.3, &mut light, &mut rng), first);
            }
        }
    }

    #[test]
    fn test_intensity_untouched_when_disabled() {
        let mut animation = square();
        animation.affects_intensity = false;
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        let state = animation.advance(0.016, 0.1, &mut light, &mut rng);
        assert_eq!(state.intensity, 100.0);
    }

    #[test]
    fn test_red_channel_isolation() {
        let mut animation = square();
        animation.color_channel = ColorChannel::Red;
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        animation.initialize(ORIGINAL, 100.0);
        // External write between frames
        light.color = LinearRgba::new(0.1, 0.2, 0.3, 0.9);

        let state = animation.advance(0.016, 0.1, &mut light, &mut rng);

        assert_eq!(state.color.red, 0.4);
        assert_eq!(state.color.green, 0.2);
        assert_eq!(state.color.blue, 0.3);
        assert_eq!(state.color.alpha, 0.9);
    }

    #[test]
    fn test_green_and_blue_channels() {
        let mut rng = Scripted::new(&[0.5]);

        let mut green = square();
        green.color_channel = ColorChannel::Green;
        let state = green.advance(0.016, 0.1, &mut light(), &mut rng);
        assert_eq!(state.color, LinearRgba::new(0.8, 0.3, 0.4, 1.0));

        let mut blue = square();
        blue.color_channel = ColorChannel::Blue;
        let state = blue.advance(0.016, 0.1, &mut light(), &mut rng);
        assert_eq!(state.color, LinearRgba::new(0.8, 0.6, 0.2, 1.0));
    }

    #[test]
    fn test_noise_samples_intensity_and_color_separately() {
        let mut animation = LightAnimation::default();
        animation.wave.waveform = Waveform::Noise;
        let mut light = light();
        // 1 - 2 * 0.25 = 0.5 for intensity, 1 - 2 * 0.0 = 1.0 for color
        let mut rng = Scripted::new(&[0.25, 0.0]);

        let state = animation.advance(0.016, 0.0, &mut light, &mut rng);

        assert_eq!(rng.draws(), 2);
        assert_eq!(state.intensity, 50.0);
        assert_eq!(state.color, ORIGINAL);
    }

    #[test]
    fn test_idle_interval_leaves_light_alone() {
        let mut animation = square();
        animation.intermittency.enabled = true;
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        // Zero delta never leaves the initial idle state
        let state = animation.advance(0.0, 0.1, &mut light, &mut rng);

        assert!(!animation.is_waving());
        assert_eq!(state, LightState::new(ORIGINAL, 100.0));
    }

    #[test]
    fn test_first_intermittent_frame_animates() {
        let mut animation = square();
        animation.intermittency.enabled = true;
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        let state = animation.advance(0.016, 0.1, &mut light, &mut rng);

        assert!(animation.is_waving());
        assert_eq!(state.intensity, 50.0);
    }

    #[test]
    fn test_end_of_interval_restores_baseline_exactly() {
        let mut animation = square();
        animation.intermittency = IntermittencySettings {
            enabled: true,
            smallest_nonwave_interval: 2.0,
            largest_nonwave_interval: 2.0,
            smallest_wave_interval: 0.1,
            largest_wave_interval: 0.1,
        };
        let mut light = light();
        let mut rng = Scripted::new(&[0.5]);

        let waving = animation.advance(0.016, 0.1, &mut light, &mut rng);
        assert_ne!(waving.intensity, 100.0);

        let restored = animation.advance(0.2, 0.3, &mut light, &mut rng);

        assert!(!animation.is_waving());
        assert_eq!(restored, LightState::new(ORIGINAL, 100.0));
        assert_eq!(light, LightState::new(ORIGINAL, 100.0));
        assert_eq!(animation.timer().next_interval_time, 2.0);
    }

    #[test]
    fn test_interval_starting_and_ending_in_one_frame_skips_animation() {
        let mut animation = LightAnimation::default();
        animation.wave.waveform = Waveform::Noise;
        animation.intermittency = IntermittencySettings {
            enabled: true,
            smallest_wave_interval: -1.0,
            largest_wave_interval: -1.0,
            ..Default::default()
        };
        let mut light = light();
        animation.initialize(ORIGINAL, 100.0);
        // Leftover values from an earlier frame
        light.color = LinearRgba::new(0.1, 0.2, 0.3, 0.4);
        light.intensity = 7.0;
        let mut rng = Scripted::new(&[0.5]);

        let state = animation.advance(0.016, 0.1, &mut light, &mut rng);

        assert!(!animation.is_waving());
        assert_eq!(state, LightState::new(ORIGINAL, 100.0));
        assert_eq!(light, LightState::new(ORIGINAL, 100.0));
        // Two interval samples, no wave evaluations
        assert_eq!(rng.draws(), 2);
        assert_eq!(animation.timer().next_interval_time, 3.0);
    }

    #[test]
    fn test_with_wave_keeps_other_defaults() {
        let animation = square();
        assert_eq!(animation.wave.waveform, Waveform::Square);
        assert_eq!(animation.color_channel, ColorChannel::All);
        assert!(animation.affects_intensity);
        assert!(!animation.is_initialized());
    }

    #[test]
    fn test_channel_next_wraps() {
        assert_eq!(ColorChannel::All.next(), ColorChannel::Red);
        assert_eq!(ColorChannel::Blue.next(), ColorChannel::All);
    }
}
