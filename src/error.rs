use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Invalid counter target: {0:?}")]
    InvalidCounterTarget(String),
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: &'static str,
    },
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for PageError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        PageError::Js(value.to_string())
    }
}
