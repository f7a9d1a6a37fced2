use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum StoreError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` comes from the `error` field when present.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("invalid expense: {0}")]
    Invalid(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Text shown to the user in the notification banner.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Network(_) => "Network error. Please check your connection.".to_string(),
            StoreError::Server { message, .. } => message.clone(),
            StoreError::Decode(_) => "Unexpected response from server.".to_string(),
            StoreError::Invalid(message) => message.clone(),
            StoreError::Storage(_) => "Could not save to browser storage.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        let network = StoreError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(
            network.user_message(),
            "Network error. Please check your connection."
        );

        let server = StoreError::Server {
            status: 404,
            message: "Expense not found".to_string(),
        };
        assert_eq!(server.user_message(), "Expense not found");
        assert_eq!(server.to_string(), "server error 404: Expense not found");
    }
}
