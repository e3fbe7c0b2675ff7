// Drawing target for the particle field, implemented for the browser's 2D
// canvas context and by recording surfaces in tests

use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), String>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill_style: &str)
        -> Result<(), String>;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), String> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        fill_style: &str,
    ) -> Result<(), String> {
        self.set_fill_style_str(fill_style);
        self.begin_path();
        self.arc(x, y, radius, 0.0, PI * 2.0).map_err(js_error_message)?;
        self.fill();
        Ok(())
    }
}

pub fn js_error_message(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| String::from("Unknown canvas error"))
}
