use std::error::Error as StdError;
use std::io;

use thiserror::Error;

pub const MISSING_INPUT_MESSAGE: &str = "Please upload a resume and provide a job description.";

/// Broad category of a [`ScorerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Server,
    Transport,
    Decode,
    Config,
}

/// Every failure a submission can end in.
///
/// The `Display` output of the variants that reach the results region is the
/// bare message, so a caller renders them as `Error: {err}`.
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Please upload a resume and provide a job description.")]
    MissingInput,

    #[error("{error_message}")]
    Server {
        endpoint_url: String,
        status: u16,
        error_message: String,
    },

    #[error("{}", describe_chain(.0))]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("Invalid server address: {0}")]
    Url(#[from] url::ParseError),

    #[error("Bad scheme: {scheme}")]
    BadScheme { scheme: String },
}

impl ScorerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScorerError::MissingInput => ErrorKind::Input,
            ScorerError::Server { .. } => ErrorKind::Server,
            ScorerError::Network(_) | ScorerError::Io(_) => ErrorKind::Transport,
            ScorerError::Decode(_) => ErrorKind::Decode,
            ScorerError::Url(_) | ScorerError::BadScheme { .. } => ErrorKind::Config,
        }
    }
}

/// Joins an error's message with those of its sources, skipping repeats.
pub fn describe_chain(err: &dyn StdError) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !parts.contains(&message) {
            parts.push(message);
        }
        source = cause.source();
    }
    parts.join(": ")
}

pub type Result<T> = std::result::Result<T, ScorerError>;
