use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    NoWindow,
    NoDocument,
    Cookie(String),
    Listener(String),
}

impl DomError {
    pub fn cookie(value: &JsValue) -> Self {
        DomError::Cookie(describe(value))
    }

    pub fn listener(value: &JsValue) -> Self {
        DomError::Listener(describe(value))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::NoWindow => write!(f, "DOM Error: no global window"),
            DomError::NoDocument => write!(f, "DOM Error: window has no document"),
            DomError::Cookie(msg) => write!(f, "Cookie Error: {}", msg),
            DomError::Listener(msg) => write!(f, "Listener Error: {}", msg),
        }
    }
}

impl std::error::Error for DomError {}
