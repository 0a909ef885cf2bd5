//! # Translation adapter
//!
//! Serves a MADLAD-400 model behind the host request contract. Each request carries:
//! - `INPUT_TEXT` (required): texts to translate, as byte strings or native strings
//! - `MAX_LENGTH` (optional): bound on the generated length, 256 when absent
//! - `TARGET_LANG` (optional): language code, prepended to every text as `<2xx> `
//!
//! and is answered with `OUTPUT_TEXT`, one translation per input text, or with an error whose
//! message starts with `Error during inference: `. Requests of a batch succeed or fail
//! independently.
//!
//! Optional inputs never fail a request: an unreadable value is logged and replaced by its
//! default.
//!
//! ```no_run
//! use madlad_adapter::host::{HostTensor, InferenceRequest, InitializeArgs};
//! use madlad_adapter::pipelines::translation::TranslationAdapter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut adapter = TranslationAdapter::new();
//!     adapter.initialize(&InitializeArgs::from_env())?;
//!
//!     let requests = vec![
//!         InferenceRequest::default()
//!             .with_input(HostTensor::from_strings("INPUT_TEXT", vec!["The dog did not wake up."]))
//!             .with_input(HostTensor::from_strings("TARGET_LANG", vec!["fr"])),
//!         InferenceRequest::default()
//!             .with_input(HostTensor::from_strings("INPUT_TEXT", vec!["Good morning"]))
//!             .with_input(HostTensor::from_strings("TARGET_LANG", vec!["es"]))
//!             .with_input(HostTensor::from_i64("MAX_LENGTH", vec![32])),
//!     ];
//!
//!     for response in adapter.execute(&requests) {
//!         match response.error() {
//!             Some(error) => eprintln!("{}", error),
//!             None => println!("{:?}", response.output("OUTPUT_TEXT")),
//!         }
//!     }
//!     adapter.finalize();
//!     Ok(())
//! }
//! ```

mod language;
mod translation_adapter;

pub use language::{prepare_source_texts, TargetLanguage};
pub use translation_adapter::{
    optional_max_length, optional_target_language, TranslationAdapter, ERROR_PREFIX, INPUT_TEXT,
    MAX_LENGTH, OUTPUT_TEXT, TARGET_LANG,
};
