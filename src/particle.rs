// Simple particle struct to keep track of individual position, velocity, size and opacity

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            size,
            opacity,
        }
    }

    // Random particle somewhere inside a width x height surface.
    // Draw order is x, y, size, vel x, vel y, opacity
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let speed_range = config.max_speed * 2.0;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let size = rng.gen::<f64>() * config.max_size;
        let vel_x = rng.gen::<f64>() * speed_range - config.max_speed;
        let vel_y = rng.gen::<f64>() * speed_range - config.max_speed;
        let opacity = rng.gen::<f64>();
        Particle::new([pos_x, pos_y], [vel_x, vel_y], size, opacity)
    }

    // Advance one frame: move, wrap at the surface edges, then drift opacity
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64, pulse: f64) {
        self.pos = vec2_add(self.pos, self.vel);
        self.pos[0] = wrap(self.pos[0], width);
        self.pos[1] = wrap(self.pos[1], height);

        self.opacity += (rng.gen::<f64>() - 0.5) * pulse;
        self.opacity = self.opacity.max(0.0).min(1.0);
    }
}

// Only values strictly past an edge wrap, a coordinate sitting exactly on
// `limit` is left alone
fn wrap(value: f64, limit: f64) -> f64 {
    if value > limit {
        0.0
    } else if value < 0.0 {
        limit
    } else {
        value
    }
}
