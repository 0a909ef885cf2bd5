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

//! # Host tensors
//!
//! Named, shaped arrays exchanged with the serving host. String data arrives either as raw
//! byte strings (the host's object dtype) or as native strings.

use crate::common::error::AdapterError;

/// # Typed payload of a host tensor (flattened, row-major)
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    /// Byte strings, expected to hold UTF-8 text
    Bytes(Vec<Vec<u8>>),
    /// Native strings
    Str(Vec<String>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
}

impl TensorData {
    pub fn len(&self) -> usize {
        match self {
            TensorData::Bytes(values) => values.len(),
            TensorData::Str(values) => values.len(),
            TensorData::Int32(values) => values.len(),
            TensorData::Int64(values) => values.len(),
            TensorData::Float32(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TensorData::Bytes(_) => "BYTES",
            TensorData::Str(_) => "STRING",
            TensorData::Int32(_) => "INT32",
            TensorData::Int64(_) => "INT64",
            TensorData::Float32(_) => "FP32",
        }
    }
}

/// # Named host tensor
#[derive(Debug, Clone, PartialEq)]
pub struct HostTensor {
    name: String,
    shape: Vec<usize>,
    data: TensorData,
}

impl HostTensor {
    /// Creates a tensor from its parts. The shape is not validated here: readers reject tensors
    /// whose shape does not match their element count.
    pub fn new<S: Into<String>>(name: S, shape: Vec<usize>, data: TensorData) -> HostTensor {
        HostTensor {
            name: name.into(),
            shape,
            data,
        }
    }

    /// One-dimensional tensor of native strings
    pub fn from_strings<N, S>(name: N, values: Vec<S>) -> HostTensor
    where
        N: Into<String>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        HostTensor::new(name, vec![values.len()], TensorData::Str(values))
    }

    /// One-dimensional tensor of UTF-8 byte strings
    pub fn from_bytes<N: Into<String>>(name: N, values: Vec<Vec<u8>>) -> HostTensor {
        HostTensor::new(name, vec![values.len()], TensorData::Bytes(values))
    }

    /// One-dimensional tensor of 64-bit integers
    pub fn from_i64<N: Into<String>>(name: N, values: Vec<i64>) -> HostTensor {
        HostTensor::new(name, vec![values.len()], TensorData::Int64(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }

    fn check_shape(&self) -> Result<(), AdapterError> {
        let expected: usize = self.shape.iter().product();
        if expected != self.data.len() {
            return Err(AdapterError::InvalidInputError(format!(
                "tensor {} has shape {:?} but holds {} elements",
                self.name,
                self.shape,
                self.data.len()
            )));
        }
        Ok(())
    }

    fn decode_utf8(&self, value: &[u8]) -> Result<String, AdapterError> {
        String::from_utf8(value.to_vec()).map_err(|error| {
            AdapterError::InvalidInputError(format!(
                "tensor {} holds invalid UTF-8: {}",
                self.name, error
            ))
        })
    }

    /// Flattens a string tensor into owned strings, decoding byte strings as UTF-8.
    pub fn to_strings(&self) -> Result<Vec<String>, AdapterError> {
        self.check_shape()?;
        match &self.data {
            TensorData::Bytes(values) => values
                .iter()
                .map(|value| self.decode_utf8(value))
                .collect(),
            TensorData::Str(values) => Ok(values.clone()),
            other => Err(AdapterError::InvalidInputError(format!(
                "tensor {} must hold strings, got {}",
                self.name,
                other.type_name()
            ))),
        }
    }

    /// Reads the first element as a string.
    pub fn first_string(&self) -> Result<String, AdapterError> {
        self.check_shape()?;
        match &self.data {
            TensorData::Bytes(values) => match values.first() {
                Some(value) => self.decode_utf8(value),
                None => Err(self.empty_error()),
            },
            TensorData::Str(values) => values.first().cloned().ok_or_else(|| self.empty_error()),
            other => Err(AdapterError::InvalidInputError(format!(
                "tensor {} must hold a string, got {}",
                self.name,
                other.type_name()
            ))),
        }
    }

    /// Reads the first element as an integer. Numeric strings are parsed and floating point
    /// values are truncated towards zero.
    pub fn first_integer(&self) -> Result<i64, AdapterError> {
        self.check_shape()?;
        match &self.data {
            TensorData::Int32(values) => values
                .first()
                .map(|value| *value as i64)
                .ok_or_else(|| self.empty_error()),
            TensorData::Int64(values) => values.first().copied().ok_or_else(|| self.empty_error()),
            TensorData::Float32(values) => match values.first() {
                Some(value) if value.is_finite() => Ok(value.trunc() as i64),
                Some(value) => Err(AdapterError::InvalidInputError(format!(
                    "tensor {} holds a non-finite value {}",
                    self.name, value
                ))),
                None => Err(self.empty_error()),
            },
            TensorData::Bytes(_) | TensorData::Str(_) => {
                let value = self.first_string()?;
                value.trim().parse::<i64>().map_err(|error| {
                    AdapterError::InvalidInputError(format!(
                        "tensor {} holds {:?}, not an integer: {}",
                        self.name, value, error
                    ))
                })
            }
        }
    }

    fn empty_error(&self) -> AdapterError {
        AdapterError::InvalidInputError(format!("tensor {} is empty", self.name))
    }
}
