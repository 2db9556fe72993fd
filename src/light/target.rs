use bevy::prelude::*;

/// A light whose color and intensity can be animated
pub trait LightTarget {
    fn color(&self) -> LinearRgba;
    fn set_color(&mut self, color: LinearRgba);
    fn intensity(&self) -> f32;
    fn set_intensity(&mut self, intensity: f32);
}

/// Plain color + intensity pair, used as the per-frame result and for
/// driving lights outside the ECS
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub color: LinearRgba,
    pub intensity: f32,
}

impl LightState {
    pub fn new(color: LinearRgba, intensity: f32) -> Self {
        Self { color, intensity }
    }

    pub fn of(light: &impl LightTarget) -> Self {
        Self {
            color: light.color(),
            intensity: light.intensity(),
        }
    }
}

impl LightTarget for LightState {
    fn color(&self) -> LinearRgba {
        self.color
    }

    fn set_color(&mut self, color: LinearRgba) {
        self.color = color;
    }

    fn intensity(&self) -> f32 {
        self.intensity
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }
}

/// Lights with a `Color` and a luminous `intensity` field
macro_rules! impl_light_target {
    ($($light:ty),+) => {
        $(
            impl LightTarget for $light {
                fn color(&self) -> LinearRgba {
                    self.color.to_linear()
                }

                fn set_color(&mut self, color: LinearRgba) {
                    self.color = Color::LinearRgba(color);
                }

                fn intensity(&self) -> f32 {
                    self.intensity
                }

                fn set_intensity(&mut self, intensity: f32) {
                    self.intensity = intensity;
                }
            }
        )+
    };
}

impl_light_target!(PointLight, SpotLight);

/// Directional lights expose illuminance (lux) as their intensity
impl LightTarget for DirectionalLight {
    fn color(&self) -> LinearRgba {
        self.color.to_linear()
    }

    fn set_color(&mut self, color: LinearRgba) {
        self.color = Color::LinearRgba(color);
    }

    fn intensity(&self) -> f32 {
        self.illuminance
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.illuminance = intensity;
    }
}
