// Copyright 2026 The madlad-adapter Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rust_bert::RustBertError;
use rust_tokenizers::error::TokenizerError;
use std::path::PathBuf;
use tch::TchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Model configuration not found, tried: {}", display_paths(.0))]
    ConfigurationNotFound(Vec<PathBuf>),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Tch tensor error: {0}")]
    TchError(String),

    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Invalid input error: {0}")]
    InvalidInputError(String),

    #[error("adapter is not initialized")]
    NotInitialized,
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl From<std::io::Error> for AdapterError {
    fn from(error: std::io::Error) -> Self {
        AdapterError::IOError(error.to_string())
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(error: serde_json::Error) -> Self {
        AdapterError::InvalidConfigurationError(error.to_string())
    }
}

impl From<TokenizerError> for AdapterError {
    fn from(error: TokenizerError) -> Self {
        AdapterError::TokenizerError(error.to_string())
    }
}

impl From<TchError> for AdapterError {
    fn from(error: TchError) -> Self {
        AdapterError::TchError(error.to_string())
    }
}

impl From<RustBertError> for AdapterError {
    fn from(error: RustBertError) -> Self {
        AdapterError::ModelError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_not_found_lists_candidates() {
        let error = AdapterError::ConfigurationNotFound(vec![
            PathBuf::from("/mnt/models/1/model.json"),
            PathBuf::from("/mnt/models/madlad400-3b-mt/1/model.json"),
        ]);
        assert_eq!(
            error.to_string(),
            "Model configuration not found, tried: /mnt/models/1/model.json, \
             /mnt/models/madlad400-3b-mt/1/model.json"
        );
    }

    #[test]
    fn io_errors_convert() {
        let error: AdapterError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(error, AdapterError::IOError(message) if message == "missing"));
    }
}
