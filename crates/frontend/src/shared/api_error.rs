use thiserror::Error;

/// Failure of a backend call.
///
/// `Display` is the text that ends up in the error toast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never got an HTTP answer
    #[error("Error de red: {0}")]
    Network(String),

    /// Non-2xx answer, message extracted from the body
    #[error("{message}")]
    Application { status: u16, message: String },

    #[error("Respuesta inválida: {0}")]
    Decode(String),

    #[error("Solicitud inválida: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }
}
