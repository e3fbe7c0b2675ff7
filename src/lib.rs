//! Ambient starfield background for the landing page.
//!
//! A fixed pool of faint cyan particles drifts across a full-viewport canvas,
//! wrapping at the edges and flickering as their opacity wanders. The core
//! ([`ParticleField`]) is plain Rust and takes its random source and drawing
//! surface as arguments; [`Starfield`] and [`run`] bind it to the browser.

mod utils;

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod particle;
pub mod surface;
pub mod web;

pub use color::Color;
pub use config::FieldConfig;
pub use driver::{run, FrameLoop};
pub use error::FieldError;
pub use field::{FieldState, ParticleField};
pub use particle::Particle;
pub use surface::Surface;
pub use web::Starfield;

use log::Level;
use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_console_log(Level::Info);
}
