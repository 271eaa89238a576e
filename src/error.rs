pub type GlazeResult<T> = Result<T, GlazeError>;

#[derive(thiserror::Error, Debug)]
pub enum GlazeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("artwork error: {0}")]
    Artwork(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlazeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn artwork(msg: impl Into<String>) -> Self {
        Self::Artwork(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
