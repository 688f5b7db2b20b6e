#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with an error message.
    #[error("{0}")]
    Rejected(String),

    /// Local input check failed, nothing was sent.
    #[error("{0}")]
    Validation(String),

    #[error("You are already interested in this event")]
    AlreadyInterested,
}

impl ClientError {
    /// Message to show to the user. Transport failures are only logged.
    pub fn alert(&self) -> Option<String> {
        match self {
            ClientError::Transport(_) => None,
            ClientError::Rejected(msg) => Some(format!("Error: {msg}")),
            ClientError::Validation(msg) => Some(msg.to_owned()),
            ClientError::AlreadyInterested => Some(self.to_string()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
