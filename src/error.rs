//! Error taxonomy for panel operations.
//!
//! ERROR HANDLING
//! ==============
//! Every failure aborts the current handler. At the JS boundary the error is
//! logged and rethrown so the browser reports it like any uncaught script
//! error; nothing is swallowed to paper over mismatched markup.

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("element not found: #{id}")]
    MissingElement { id: String },
    #[error("trigger is missing data attribute: {key}")]
    MissingAttribute { key: String },
    #[error("element #{id} is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },
    #[error("malformed chart data: {0}")]
    ChartData(#[source] serde_json::Error),
    #[error("malformed panel config: {0}")]
    Config(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl PanelError {
    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }

    /// Stable machine-readable code, used as the thrown error's name.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement { .. } => "E_MISSING_ELEMENT",
            Self::MissingAttribute { .. } => "E_MISSING_ATTRIBUTE",
            Self::WrongElementKind { .. } => "E_WRONG_ELEMENT_KIND",
            Self::ChartData(_) => "E_CHART_DATA",
            Self::Config(_) => "E_CONFIG",
            Self::Js(_) => "E_JS",
        }
    }
}
