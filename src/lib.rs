//! Inference-server adapter serving MADLAD-400 translation models.
//!
//! The adapter bridges a generic serving host and a T5-architecture multilingual translation model
//! loaded with [rust-bert](https://docs.rs/rust-bert) on libtorch (via `tch`). The host drives a
//! three-step lifecycle:
//!
//! - `initialize`: locate `model.json` under the model repository, load the tokenizer and model
//!   on CUDA (half precision) when available or on the CPU (full precision)
//! - `execute`: translate a batch of requests, one response per request
//! - `finalize`: release the model and device memory
//!
//! # Model repository layout
//!
//! `model.json` is looked up at `{repository}/{version}/model.json`, then at
//! `{repository}/{name}/{version}/model.json`. It points to the directory holding the model
//! artifacts:
//!
//! ```json
//! { "model": "/mnt/models/madlad400-3b-mt/artifacts" }
//! ```
//!
//! The artifacts directory contains `config.json`, `spiece.model` and `rust_model.ot` (weights
//! converted to the libtorch format).
//!
//! # Quick start
//!
//! ```no_run
//! use madlad_adapter::host::{HostTensor, InferenceRequest, InitializeArgs};
//! use madlad_adapter::pipelines::translation::{TranslationAdapter, OUTPUT_TEXT};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut adapter = TranslationAdapter::new();
//!     adapter.initialize(&InitializeArgs::default().with_repository("/mnt/models"))?;
//!
//!     let request = InferenceRequest::default()
//!         .with_input(HostTensor::from_strings(
//!             "INPUT_TEXT",
//!             vec!["This sentence will be translated.", "So will this one."],
//!         ))
//!         .with_input(HostTensor::from_strings("TARGET_LANG", vec!["de"]));
//!
//!     let responses = adapter.execute(&[request]);
//!     if let Some(output) = responses[0].output(OUTPUT_TEXT) {
//!         println!("{:?}", output.to_strings()?);
//!     }
//!     adapter.finalize();
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod host;
pub mod pipelines;

pub use common::error::AdapterError;
pub use common::{Config, ModelConfiguration, Placement};
