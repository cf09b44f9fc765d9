use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecisionLogError {
    #[error("Required value for `{0}` is empty")]
    EmptyField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DecisionLogError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyField(_) => 3,
            Self::Io(_) | Self::Serialization(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecisionLogError>;
