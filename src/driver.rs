// Host-side frame loop. Keeps re-requesting animation frames and ticks the
// Starfield on each one; also keeps the canvas sized to the window

use crate::web::{window, Starfield};
use log::{error, info};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

#[wasm_bindgen]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    starfield: Rc<RefCell<Starfield>>,
}

#[wasm_bindgen]
impl FrameLoop {
    // The pending frame still fires once but will not tick or reschedule
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn particle_count(&self) -> u32 {
        self.starfield.borrow().particle_count()
    }
}

fn request_animation_frame(f: &FrameCallback) -> Result<i32, JsValue> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref())
}

#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<FrameLoop, JsValue> {
    let mut starfield = Starfield::new(canvas_id)?;
    starfield.resize_to_window()?;
    let count = starfield.field().config().count;
    starfield.initialize(count)?;
    let starfield = Rc::new(RefCell::new(starfield));
    let running = Rc::new(Cell::new(true));

    let resize_target = starfield.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Err(err) = resize_target.borrow_mut().resize_to_window() {
            error!("failed to resize starfield: {:?}", err);
        }
    }) as Box<dyn FnMut()>);
    window()?.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    // The callback owns a handle to itself so it can schedule the next frame
    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let tick_target = starfield.clone();
    let tick_running = running.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        if !tick_running.get() {
            return;
        }
        if let Err(err) = tick_target.borrow_mut().tick() {
            error!("starfield frame failed, stopping: {:?}", err);
            tick_running.set(false);
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                error!("failed to request animation frame: {:?}", err);
                tick_running.set(false);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    match frame.borrow().as_ref() {
        Some(callback) => request_animation_frame(callback)?,
        None => return Err(JsValue::from_str("Frame callback missing")),
    };
    info!("starfield running with {} particles on #{}", count, canvas_id);

    Ok(FrameLoop { running, starfield })
}
