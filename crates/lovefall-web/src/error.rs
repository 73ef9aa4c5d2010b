use lovefall_engine::SceneError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Startup failures in the browser bridge.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a <canvas>")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext2d,
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl WebError {
    pub fn js(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
