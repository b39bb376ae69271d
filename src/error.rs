use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BashGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file has to start with #!/bin/bash or #!/usr/bin/env bash, found {found:?}")]
    MalformedShebang { found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BashGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
