// JS-facing wrapper that binds a ParticleField to a <canvas> on the page

use crate::config::FieldConfig;
use crate::field::ParticleField;
#[cfg(feature = "profiling")]
use crate::utils::Timer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

#[wasm_bindgen]
pub struct Starfield {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    rng: StdRng,
}

#[wasm_bindgen]
impl Starfield {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Starfield, JsValue> {
        Starfield::with_rng(canvas_id, StdRng::from_entropy())
    }

    // Deterministic variant, the same seed replays the same animation
    pub fn with_seed(canvas_id: &str, seed: u32) -> Result<Starfield, JsValue> {
        Starfield::with_rng(canvas_id, StdRng::seed_from_u64(seed as u64))
    }

    // Matches the canvas backing store to the viewport. Setting the canvas
    // size also wipes whatever was drawn on it
    pub fn resize_to_window(&mut self) -> Result<(), JsValue> {
        let window = window()?;
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
        self.resize(width as u32, height as u32);
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width, height);
    }

    pub fn initialize(&mut self, count: u32) -> Result<(), JsValue> {
        self.field.initialize(&mut self.rng, count)?;
        Ok(())
    }

    pub fn tick(&mut self) -> Result<(), JsValue> {
        #[cfg(feature = "profiling")]
        let _timer = Timer::new("Starfield::tick");
        self.field.tick(&mut self.rng, &mut self.ctx)?;
        Ok(())
    }

    pub fn particle_count(&self) -> u32 {
        self.field.len() as u32
    }

    pub fn width(&self) -> u32 {
        self.field.width()
    }

    pub fn height(&self) -> u32 {
        self.field.height()
    }
}

impl Starfield {
    fn with_rng(canvas_id: &str, rng: StdRng) -> Result<Starfield, JsValue> {
        let canvas = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("No 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Starfield {
            canvas,
            ctx,
            field: ParticleField::new(FieldConfig::default()),
            rng,
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}
