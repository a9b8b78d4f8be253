use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectsError {
    #[error("missing required page elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid effects config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EffectsError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T, E = EffectsError> = std::result::Result<T, E>;
