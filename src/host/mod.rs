//! # Serving host contract
//!
//! Types exchanged with the inference-serving host: startup arguments, requests made of named
//! input tensors, and per-request responses carrying either output tensors or an error.
//!
//! ```no_run
//! use madlad_adapter::host::{HostTensor, InferenceRequest};
//!
//! let request = InferenceRequest::default()
//!     .with_input(HostTensor::from_strings("INPUT_TEXT", vec!["Hello, world!"]))
//!     .with_input(HostTensor::from_strings("TARGET_LANG", vec!["es"]))
//!     .with_input(HostTensor::from_i64("MAX_LENGTH", vec![64]));
//! ```

mod args;
mod request;
mod tensor;

pub use args::{
    InitializeArgs, DEFAULT_MODEL_NAME, DEFAULT_MODEL_REPOSITORY, DEFAULT_MODEL_VERSION,
    MODEL_CONFIGURATION_FILE,
};
pub use request::{InferenceError, InferenceRequest, InferenceResponse};
pub use tensor::{HostTensor, TensorData};
