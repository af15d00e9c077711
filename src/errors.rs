// errors.rs
use thiserror::Error;

/// Errors raised while turning a Vorgang record into page text.
///
/// Missing optional fields and unknown codes are never errors; they
/// degrade to fallbacks inside the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Header and body both derive from the latest station.
    #[error("empty station list for Vorgang '{titel}'")]
    EmptyStations { titel: String },

    #[error("invalid date format '{0}'")]
    DateFormat(String),

    #[error("JSON parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err.to_string())
    }
}

// Type alias used by the rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
