pub type RemaskResult<T> = Result<T, RemaskError>;

#[derive(thiserror::Error, Debug)]
pub enum RemaskError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("transform error: {0}")]
    Transform(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RemaskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }
}
