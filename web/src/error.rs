use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("no story with id `{0}`")]
    UnknownStory(String),

    #[error("invalid story args: {0}")]
    InvalidArgs(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
