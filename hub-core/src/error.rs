use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    /// A required secret is missing or a configured value is unusable.
    #[error("Config error: {0}")]
    Config(String),

    /// The language-model provider answered with a non-success status or an unusable payload.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Malformed model output: {0}")]
    MalformedModelOutput(#[from] ModelOutputError),

    /// The chat platform rejected an outbound call; carries the platform description.
    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Why a model completion could not be read as an [`AgentReply`](crate::AgentReply).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelOutputError {
    #[error("not a reply JSON object: {0}")]
    InvalidJson(String),

    #[error("reply text is empty")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, HubError>;
