use thiserror::Error;

/// Failures reported by the host document.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("no active document")]
    NoDocument,

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("{0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// The binary module could not finish its initialization call.
#[derive(Error, Debug)]
#[error("module initialization failed: {reason}")]
pub struct ModuleInitError {
    reason: String,
}

impl ModuleInitError {
    pub fn new<T: Into<String>>(reason: T) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ComponentError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("{0}")]
    Construct(String),
}

/// Every way the startup sequence can fail. None of them is retried.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    ModuleInit(#[from] ModuleInitError),

    #[error("attachment point `{selector}` not found")]
    AttachmentPointNotFound { selector: String },

    #[error("attachment point `{selector}` lookup failed: {source}")]
    AttachmentPointLookup {
        selector: String,
        #[source]
        source: HostError,
    },

    #[error("root component construction failed: {0}")]
    ComponentConstruction(#[source] ComponentError),

    #[error("startup already ran in this process")]
    AlreadyStarted,
}

pub type Result<T> = std::result::Result<T, StartupError>;
