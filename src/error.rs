use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A broken tree invariant found by `AVLTree::validate`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Keys out of order: {previous} visited before {next}")]
    Unordered { previous: String, next: String },

    #[error("Node {key} is unbalanced: balance factor {balance}")]
    Unbalanced { key: String, balance: i32 },

    #[error("Node {key} stores height {stored}, computed {computed}")]
    HeightMismatch {
        key: String,
        stored: i32,
        computed: i32,
    },

    #[error("Tree records {recorded} keys but holds {counted}")]
    SizeMismatch { counted: usize, recorded: usize },
}

pub type InvariantResult<T> = Result<T, InvariantError>;
