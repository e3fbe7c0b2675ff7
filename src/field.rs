//! The particle pool and its per-frame update and redraw.
//!
//! A [`ParticleField`] owns every particle along with the surface
//! dimensions they live in. It has no scheduling of its own: the host calls
//! [`ParticleField::tick`] once per frame and passes in the random source and
//! the surface to draw onto.

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::particle::Particle;
use crate::surface::Surface;
use log::{debug, warn};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldState {
    Uninitialized,
    Running,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: u32,
    height: u32,
    config: FieldConfig,
    particles: Vec<Particle>,
    state: FieldState,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> ParticleField {
        ParticleField {
            width: 0,
            height: 0,
            config,
            particles: Vec::new(),
            state: FieldState::Uninitialized,
        }
    }

    /// Sets the surface dimensions. Both values change together; particles
    /// outside the new bounds wrap on the next update.
    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("particle field resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Replaces the pool with `count` randomly placed particles.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R, count: u32) -> Result<(), FieldError> {
        if count == 0 {
            return Err(FieldError::EmptyPool);
        }
        if self.width == 0 || self.height == 0 {
            warn!(
                "initializing particle field against a {}x{} surface",
                self.width, self.height
            );
        }

        let width = self.width as f64;
        let height = self.height as f64;
        self.particles.clear();
        self.particles.reserve(count as usize);
        for _ in 0..count {
            let p = Particle::spawn(rng, width, height, &self.config);
            self.particles.push(p);
        }
        self.state = FieldState::Running;
        debug!("particle field initialized with {} particles", count);
        Ok(())
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), FieldError> {
        if self.state != FieldState::Running {
            return Err(FieldError::NotInitialized);
        }
        let width = self.width as f64;
        let height = self.height as f64;
        let pulse = self.config.pulse;
        for particle in &mut self.particles {
            particle.step(rng, width, height, pulse);
        }
        Ok(())
    }

    /// Clears the whole surface and draws every particle as a filled circle.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), FieldError> {
        surface
            .clear(self.width as f64, self.height as f64)
            .map_err(FieldError::Surface)?;
        for p in &self.particles {
            let fill_style = self.config.color.to_css_rgba(p.opacity);
            surface
                .fill_circle(p.pos[0], p.pos[1], p.size, &fill_style)
                .map_err(FieldError::Surface)?;
        }
        Ok(())
    }

    /// One animation step: update every particle, then redraw.
    pub fn tick<R, S>(&mut self, rng: &mut R, surface: &mut S) -> Result<(), FieldError>
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        self.update(rng)?;
        self.render(surface)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == FieldState::Running
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        ParticleField::new(FieldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(f64, f64),
        Circle(f64, f64, f64, String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
        fail_draws: bool,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) -> Result<(), String> {
            self.calls.push(Call::Clear(width, height));
            Ok(())
        }

        fn fill_circle(
            &mut self,
            x: f64,
            y: f64,
            radius: f64,
            fill_style: &str,
        ) -> Result<(), String> {
            if self.fail_draws {
                return Err(String::from("no context"));
            }
            self.calls
                .push(Call::Circle(x, y, radius, fill_style.to_owned()));
            Ok(())
        }
    }

    fn running_field(width: u32, height: u32, count: u32, seed: u64) -> (ParticleField, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::default();
        field.resize(width, height);
        field.initialize(&mut rng, count).unwrap();
        (field, rng)
    }

    #[test]
    fn starts_uninitialized() {
        let field = ParticleField::default();
        assert_eq!(field.state(), FieldState::Uninitialized);
        assert!(field.is_empty());
        assert_eq!((field.width(), field.height()), (0, 0));
    }

    #[test]
    fn tick_before_initialize_fails() {
        let mut field = ParticleField::default();
        field.resize(800, 600);
        let mut surface = RecordingSurface::default();
        let result = field.tick(&mut StepRng::new(0, 1), &mut surface);
        assert_eq!(result, Err(FieldError::NotInitialized));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn initialize_rejects_zero() {
        let mut field = ParticleField::default();
        field.resize(800, 600);
        let result = field.initialize(&mut StepRng::new(0, 1), 0);
        assert_eq!(result, Err(FieldError::EmptyPool));
        assert!(!field.is_running());
    }

    #[test]
    fn resize_then_initialize_places_all_inside() {
        let (field, _) = running_field(800, 600, 100, 1);
        assert!(field.is_running());
        assert_eq!(field.len(), 100);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
        }
    }

    #[test]
    fn initialize_replaces_pool() {
        let (mut field, mut rng) = running_field(800, 600, 100, 2);
        field.initialize(&mut rng, 10).unwrap();
        assert_eq!(field.len(), 10);
    }

    #[test]
    fn invariants_hold_over_many_ticks() {
        let (mut field, mut rng) = running_field(320, 240, 100, 3);
        let mut surface = RecordingSurface::default();
        for _ in 0..5000 {
            field.tick(&mut rng, &mut surface).unwrap();
            assert_eq!(field.len(), 100);
            for p in field.particles() {
                assert!(p.pos[0] >= 0.0 && p.pos[0] <= 320.0);
                assert!(p.pos[1] >= 0.0 && p.pos[1] <= 240.0);
                assert!(p.opacity >= 0.0 && p.opacity <= 1.0);
            }
            surface.calls.clear();
        }
    }

    #[test]
    fn shrinking_wraps_outliers_on_next_update() {
        let (mut field, mut rng) = running_field(800, 600, 50, 4);
        field.particles_mut()[0].pos = [700.0, 500.0];
        field.particles_mut()[0].vel = [0.0, 0.0];
        field.resize(400, 300);
        field.update(&mut rng).unwrap();
        assert_eq!(field.particles()[0].pos, [0.0, 0.0]);
        for p in field.particles() {
            assert!(p.pos[0] <= 400.0 && p.pos[1] <= 300.0);
        }
    }

    #[test]
    fn render_clears_then_draws_each_particle() {
        let (mut field, _) = running_field(800, 600, 3, 5);
        field.particles_mut()[1].opacity = 0.25;
        let mut surface = RecordingSurface::default();
        field.render(&mut surface).unwrap();

        assert_eq!(surface.calls.len(), 4);
        assert_eq!(surface.calls[0], Call::Clear(800.0, 600.0));
        let p = field.particles()[1];
        assert_eq!(
            surface.calls[2],
            Call::Circle(p.pos[0], p.pos[1], p.size, String::from("rgba(0, 242, 255, 0.25)"))
        );
    }

    #[test]
    fn surface_errors_propagate() {
        let (field, _) = running_field(800, 600, 3, 6);
        let mut surface = RecordingSurface {
            fail_draws: true,
            ..RecordingSurface::default()
        };
        assert_eq!(
            field.render(&mut surface),
            Err(FieldError::Surface(String::from("no context")))
        );
    }

    #[test]
    fn tick_wraps_particle_on_right_edge() {
        let (mut field, _) = running_field(800, 600, 1, 7);
        field.particles_mut()[0].pos = [800.0, 300.0];
        field.particles_mut()[0].vel = [0.2, 0.0];
        let mut surface = RecordingSurface::default();
        field.tick(&mut StepRng::new(1 << 63, 0), &mut surface).unwrap();
        assert_eq!(field.particles()[0].pos, [0.0, 300.0]);
    }

    #[test]
    fn two_ticks_match_prediction() {
        let mut field = ParticleField::default();
        field.resize(800, 600);
        field.initialize(&mut StepRng::new(0, 0), 1).unwrap();
        field.particles_mut()[0] = Particle::new([100.0, 50.0], [0.25, 0.125], 1.0, 0.75);

        // gen::<f64>() yields 0.0, 0.25 for these raw values
        let mut rng = StepRng::new(0, 1 << 62);
        let mut surface = RecordingSurface::default();
        field.tick(&mut rng, &mut surface).unwrap();
        field.tick(&mut rng, &mut surface).unwrap();

        let first = (0.0_f64 - 0.5) * 0.05;
        let second = (0.25_f64 - 0.5) * 0.05;
        let expected = (0.75 + first) + second;
        let p = field.particles()[0];
        assert_eq!(p.pos[0].to_bits(), 100.5_f64.to_bits());
        assert_eq!(p.pos[1].to_bits(), 50.25_f64.to_bits());
        assert_eq!(p.opacity.to_bits(), expected.to_bits());
    }
}
