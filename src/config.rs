//! Tunable constants for the particle field.

use crate::color::Color;

/// Parameters used when spawning and stepping particles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Pool size used by the frame driver
    pub count: u32,
    /// Radius upper bound, radius is drawn from [0, max_size)
    pub max_size: f64,
    /// Per-axis velocity is drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    /// Opacity drift per tick is drawn from [-pulse / 2, pulse / 2)
    pub pulse: f64,
    /// Fill color, its alpha byte is replaced per particle
    pub color: Color,
}

impl FieldConfig {
    pub const DEFAULT_COUNT: u32 = 100;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::DEFAULT_COUNT,
            max_size: 2.0,
            max_speed: 0.25,
            pulse: 0.05,
            color: Color::CYAN,
        }
    }
}
