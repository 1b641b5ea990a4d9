use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid API base url {0}")]
    BaseUrl(String),

    /// Connection failures and undecodable bodies.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-OK status. `detail` is the server's `detail` field when present.
    #[error("server responded {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ClientError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
