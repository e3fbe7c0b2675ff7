use log::Level;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Routes `log` records to the browser console. A logger can only be installed
// once, later calls are no-ops
pub fn init_console_log(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(feature = "profiling")]
pub struct Timer<'a> {
    name: &'a str,
}

#[cfg(feature = "profiling")]
impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(feature = "profiling")]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        web_sys::console::time_end_with_label(self.name);
    }
}
