use serde::Deserialize;
use thiserror::Error;

/// Why a backend call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("falha de comunicação com o servidor: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{}", describe_rejection(.status, .message))]
    Rejected { status: u16, message: Option<String> },

    /// A 2xx response whose body is not what the endpoint promises.
    #[error("resposta inválida do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response, keeping the backend's
    /// structured message when the body carries one.
    pub fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            message: extract_backend_message(body),
        }
    }

    /// Message supplied by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Text shown to the user after "Erro ao ...: ".
    pub fn detail(&self) -> String {
        match self.backend_message() {
            Some(message) => message.to_string(),
            None => self.to_string(),
        }
    }
}

fn describe_rejection(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("o servidor respondeu com status {status}"),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts `message` from a JSON error body such as
/// `{"status":400,"message":"Email já cadastrado"}`.
pub fn extract_backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
