pub type OpStateResult<T> = Result<T, OpStateError>;

#[derive(thiserror::Error, Debug)]
pub enum OpStateError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("arena error: {0}")]
    Arena(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OpStateError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::Degenerate(msg.into())
    }

    pub fn arena(msg: impl Into<String>) -> Self {
        Self::Arena(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
