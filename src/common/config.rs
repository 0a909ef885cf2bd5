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
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// # Utility to deserialize JSON configuration files
pub trait Config
where
    Self: Sized + DeserializeOwned,
{
    /// Loads a `Config` object from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - `Path` to the configuration JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use madlad_adapter::{Config, ModelConfiguration};
    /// use std::path::Path;
    ///
    /// let config_path = Path::new("/mnt/models/1/model.json");
    /// let config = ModelConfiguration::from_file(config_path);
    /// ```
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AdapterError> {
        let f = File::open(path)?;
        let br = BufReader::new(f);
        let config: Self = serde_json::from_reader(br)?;
        Ok(config)
    }
}

/// # On-disk model configuration (`model.json`)
///
/// Points to the directory holding the model artifacts (`config.json`,
/// `spiece.model` and `rust_model.ot`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelConfiguration {
    pub model: PathBuf,
}

impl Config for ModelConfiguration {}
