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

use crate::common::error::AdapterError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_VERSION: &str = "1";
pub const DEFAULT_MODEL_NAME: &str = "madlad400-3b-mt";
pub const DEFAULT_MODEL_REPOSITORY: &str = "/mnt/models";
pub const MODEL_CONFIGURATION_FILE: &str = "model.json";

/// # Startup arguments handed over by the serving host
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeArgs {
    /// Host model configuration, serialized as JSON
    pub model_config: Option<String>,
    pub model_version: String,
    pub model_name: String,
    pub model_repository: PathBuf,
}

impl Default for InitializeArgs {
    fn default() -> InitializeArgs {
        InitializeArgs {
            model_config: Some("{}".to_string()),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_repository: PathBuf::from(DEFAULT_MODEL_REPOSITORY),
        }
    }
}

impl InitializeArgs {
    /// Defaults overridden by `MADLAD_MODEL_VERSION`, `MADLAD_MODEL_NAME` and
    /// `MADLAD_MODEL_REPOSITORY` when set.
    pub fn from_env() -> InitializeArgs {
        let defaults = InitializeArgs::default();
        InitializeArgs {
            model_version: env::var("MADLAD_MODEL_VERSION").unwrap_or(defaults.model_version),
            model_name: env::var("MADLAD_MODEL_NAME").unwrap_or(defaults.model_name),
            model_repository: env::var_os("MADLAD_MODEL_REPOSITORY")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_repository),
            ..defaults
        }
    }

    pub fn with_repository<P: Into<PathBuf>>(mut self, model_repository: P) -> InitializeArgs {
        self.model_repository = model_repository.into();
        self
    }

    pub fn with_model_name<S: Into<String>>(mut self, model_name: S) -> InitializeArgs {
        self.model_name = model_name.into();
        self
    }

    pub fn with_model_version<S: Into<String>>(mut self, model_version: S) -> InitializeArgs {
        self.model_version = model_version.into();
        self
    }

    pub fn with_model_config<S: Into<String>>(mut self, model_config: Option<S>) -> InitializeArgs {
        self.model_config = model_config.map(Into::into);
        self
    }

    /// Locations searched for `model.json`, in order: `{repository}/{version}` (the repository
    /// already points at the model directory), then `{repository}/{name}/{version}`.
    pub fn configuration_candidates(&self) -> [PathBuf; 2] {
        [
            self.model_repository
                .join(&self.model_version)
                .join(MODEL_CONFIGURATION_FILE),
            self.model_repository
                .join(&self.model_name)
                .join(&self.model_version)
                .join(MODEL_CONFIGURATION_FILE),
        ]
    }

    /// Returns the first candidate that is an existing file.
    pub fn resolve_configuration_path(&self) -> Result<PathBuf, AdapterError> {
        let candidates = self.configuration_candidates();
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Ok(path.clone()),
            None => Err(AdapterError::ConfigurationNotFound(candidates.to_vec())),
        }
    }

    /// Parses the host model configuration. It must be present and valid JSON.
    pub fn parse_model_config(&self) -> Result<serde_json::Value, AdapterError> {
        let raw = self.model_config.as_deref().ok_or_else(|| {
            AdapterError::InvalidConfigurationError(
                "host did not provide a model configuration".to_string(),
            )
        })?;
        Ok(serde_json::from_str(raw)?)
    }
}
