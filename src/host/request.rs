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

use crate::host::tensor::HostTensor;
use std::fmt;

/// # Single inference request: a set of named input tensors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceRequest {
    inputs: Vec<HostTensor>,
}

impl InferenceRequest {
    pub fn new(inputs: Vec<HostTensor>) -> InferenceRequest {
        InferenceRequest { inputs }
    }

    /// Appends an input tensor, builder style.
    pub fn with_input(mut self, tensor: HostTensor) -> InferenceRequest {
        self.inputs.push(tensor);
        self
    }

    /// Looks up an input tensor by name. The first tensor with a matching name wins.
    pub fn input(&self, name: &str) -> Option<&HostTensor> {
        self.inputs.iter().find(|tensor| tensor.name() == name)
    }

    pub fn inputs(&self) -> &[HostTensor] {
        &self.inputs
    }
}

/// # Error reported to the host for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceError {
    message: String,
}

impl InferenceError {
    pub fn new<S: Into<String>>(message: S) -> InferenceError {
        InferenceError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// # Response to a single request
///
/// Holds either output tensors or an error, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceResponse {
    output_tensors: Vec<HostTensor>,
    error: Option<InferenceError>,
}

impl InferenceResponse {
    pub fn success(output_tensors: Vec<HostTensor>) -> InferenceResponse {
        InferenceResponse {
            output_tensors,
            error: None,
        }
    }

    pub fn failure(error: InferenceError) -> InferenceResponse {
        InferenceResponse {
            output_tensors: vec![],
            error: Some(error),
        }
    }

    pub fn output_tensors(&self) -> &[HostTensor] {
        &self.output_tensors
    }

    pub fn output(&self, name: &str) -> Option<&HostTensor> {
        self.output_tensors
            .iter()
            .find(|tensor| tensor.name() == name)
    }

    pub fn error(&self) -> Option<&InferenceError> {
        self.error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
