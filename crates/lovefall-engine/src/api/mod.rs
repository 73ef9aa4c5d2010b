pub mod config;
pub mod error;

pub use config::{SceneConfig, SpanF32};
pub use error::SceneError;
