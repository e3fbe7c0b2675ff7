use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// `update` or `tick` ran before the pool was populated
    NotInitialized,
    /// `initialize` was asked for zero particles
    EmptyPool,
    /// The drawing surface rejected a call
    Surface(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NotInitialized => write!(f, "particle field has not been initialized"),
            FieldError::EmptyPool => write!(f, "particle pool size must be positive"),
            FieldError::Surface(msg) => write!(f, "drawing surface error: {}", msg),
        }
    }
}

impl Error for FieldError {}

impl From<FieldError> for wasm_bindgen::JsValue {
    fn from(err: FieldError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
