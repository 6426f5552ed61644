use thiserror::Error;

/// Errors raised while loading complex tables or computing conservation.
#[derive(Error, Debug)]
pub enum CplxError {
    /// A referenced input file does not exist
    #[error("could not find {path}")]
    NotFound { path: String },

    /// A row does not meet the minimum field count
    #[error("malformed input at {path}:{line}: {message}")]
    MalformedInput {
        path: String,
        /// 1-based line number
        line: usize,
        message: String,
    },

    /// A complex with zero members reached a ratio computation
    #[error("invalid complex: {0}")]
    InvalidComplex(String),

    /// Too many inputs, or a set compared against itself
    #[error("duplicate input: {0}")]
    DuplicateInput(String),

    /// A requested step lacks the data it needs
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CplxError {
    pub fn malformed(path: &str, line: usize, message: impl Into<String>) -> Self {
        CplxError::MalformedInput {
            path: path.to_string(),
            line,
            message: message.into(),
        }
    }
}
