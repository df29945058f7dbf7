//! Errors raised while initializing the header controller.
//!
//! Event handlers never return these: a failed DOM call inside a handler is
//! logged and the handler carries on. Only initialization surfaces an error.

use wasm_bindgen::JsValue;

/// Error returned by [`HeaderController::init`](crate::header::HeaderController::init)
/// and the config loaders.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window object")]
    NoWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` yet.
    #[error("document has no body element")]
    NoBody,
    /// A DOM call threw; the payload is the debug form of the thrown value.
    #[error("DOM call failed: {0}")]
    Dom(String),
    /// The JSON config override could not be parsed.
    #[error("failed to parse header config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// A config field has a value that cannot be used as a class name or selector.
    #[error("invalid header config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// `start` ran more than once.
    #[error("header controller already initialized")]
    AlreadyInitialized,
}

impl From<JsValue> for HeaderError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

impl From<HeaderError> for JsValue {
    fn from(err: HeaderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
