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

use crate::common::config::{Config, ModelConfiguration};
use crate::common::device::{release_device_memory, Placement};
use crate::common::error::AdapterError;
use crate::host::{
    HostTensor, InferenceError, InferenceRequest, InferenceResponse, InitializeArgs,
};
use crate::pipelines::generation::{
    GenerationSettings, LoadedModel, ModelLoader, DEFAULT_MAX_LENGTH, MAX_INPUT_LENGTH,
};
use crate::pipelines::madlad::MadladLoader;
use crate::pipelines::translation::language::{prepare_source_texts, TargetLanguage};
use tch::Kind;
use tracing::{debug, error, info, warn};

/// Required input: texts to translate
pub const INPUT_TEXT: &str = "INPUT_TEXT";
/// Optional input: maximum generated length
pub const MAX_LENGTH: &str = "MAX_LENGTH";
/// Optional input: target language code
pub const TARGET_LANG: &str = "TARGET_LANG";
/// Output: translated texts
pub const OUTPUT_TEXT: &str = "OUTPUT_TEXT";

/// Prefix of the message carried by a failed request's error response
pub const ERROR_PREFIX: &str = "Error during inference: ";

/// # Translation adapter
///
/// Drives a tokenizer and a sequence-to-sequence model through the host lifecycle:
/// `initialize` loads them, `execute` answers request batches, `finalize` releases them.
///
/// ```no_run
/// use madlad_adapter::host::{HostTensor, InferenceRequest, InitializeArgs};
/// use madlad_adapter::pipelines::translation::{TranslationAdapter, OUTPUT_TEXT};
///
/// fn main() -> anyhow::Result<()> {
///     let mut adapter = TranslationAdapter::new();
///     adapter.initialize(&InitializeArgs::default())?;
///
///     let request = InferenceRequest::default()
///         .with_input(HostTensor::from_strings("INPUT_TEXT", vec!["I love pizza!"]))
///         .with_input(HostTensor::from_strings("TARGET_LANG", vec!["pt"]));
///     let responses = adapter.execute(&[request]);
///     println!("{:?}", responses[0].output(OUTPUT_TEXT));
///
///     adapter.finalize();
///     Ok(())
/// }
/// ```
pub struct TranslationAdapter<L = MadladLoader>
where
    L: ModelLoader,
{
    loader: L,
    placement: Option<Placement>,
    model: Option<LoadedModel>,
}

impl TranslationAdapter<MadladLoader> {
    pub fn new() -> TranslationAdapter<MadladLoader> {
        TranslationAdapter::with_loader(MadladLoader)
    }
}

impl Default for TranslationAdapter<MadladLoader> {
    fn default() -> Self {
        TranslationAdapter::new()
    }
}

impl<L> TranslationAdapter<L>
where
    L: ModelLoader,
{
    pub fn with_loader(loader: L) -> TranslationAdapter<L> {
        TranslationAdapter {
            loader,
            placement: None,
            model: None,
        }
    }

    /// Pins device and precision instead of detecting them at initialization.
    pub fn with_placement(mut self, placement: Placement) -> TranslationAdapter<L> {
        self.placement = Some(placement);
        self
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Placement of the loaded model, if any
    pub fn placement(&self) -> Option<Placement> {
        self.model.as_ref().map(|model| model.placement)
    }

    /// Precision the loaded model weights were converted to, if the backend reports it
    pub fn model_precision(&self) -> Option<Kind> {
        self.model
            .as_ref()
            .and_then(|model| model.generator.precision())
    }

    /// Loads the tokenizer and model referenced by the repository's `model.json`.
    ///
    /// Errors are fatal for the adapter, which stays uninitialized. Initializing a ready adapter
    /// releases the previous model first.
    pub fn initialize(&mut self, args: &InitializeArgs) -> Result<(), AdapterError> {
        if self.is_ready() {
            self.finalize();
        }

        let host_config = args.parse_model_config()?;
        if let Some(name) = host_config.get("name").and_then(|name| name.as_str()) {
            debug!(host_model = name, "Host model configuration parsed");
        }

        let configuration_path = args.resolve_configuration_path()?;
        info!(
            "Reading model configuration from: {}",
            configuration_path.display()
        );
        let configuration = ModelConfiguration::from_file(&configuration_path)?;

        info!("Loading model from: {}", configuration.model.display());
        let placement = self.placement.unwrap_or_else(Placement::detect);
        info!(kind = ?placement.kind, "Using device: {:?}", placement.device);

        let model = self.loader.load(&configuration.model, placement)?;
        self.model = Some(model);
        info!("Model loaded successfully");
        Ok(())
    }

    /// Translates a batch of requests, returning exactly one response per request in the same
    /// order. Failures are reported on the failing request only.
    pub fn execute(&self, requests: &[InferenceRequest]) -> Vec<InferenceResponse> {
        requests
            .iter()
            .map(|request| {
                let result = match &self.model {
                    Some(model) => self.translate_request(model, request),
                    None => Err(AdapterError::NotInitialized),
                };
                match result {
                    Ok(translations) => InferenceResponse::success(vec![
                        HostTensor::from_strings(OUTPUT_TEXT, translations),
                    ]),
                    Err(err) => {
                        let message = format!("{}{}", ERROR_PREFIX, err);
                        error!("{}", message);
                        InferenceResponse::failure(InferenceError::new(message))
                    }
                }
            })
            .collect()
    }

    /// Drops the model and tokenizer. Safe to call in any state.
    pub fn finalize(&mut self) {
        match self.model.take() {
            Some(model) => {
                info!("Cleaning up model...");
                let device = model.placement.device;
                drop(model);
                release_device_memory(device);
            }
            None => debug!("No model loaded, nothing to clean up"),
        }
    }

    fn translate_request(
        &self,
        model: &LoadedModel,
        request: &InferenceRequest,
    ) -> Result<Vec<String>, AdapterError> {
        let texts = request
            .input(INPUT_TEXT)
            .ok_or_else(|| {
                AdapterError::InvalidInputError(format!("missing input tensor {}", INPUT_TEXT))
            })?
            .to_strings()?;

        let max_length = optional_max_length(request).unwrap_or_else(|err| {
            warn!("Ignoring {}: {}", MAX_LENGTH, err);
            None
        });
        let target_language = optional_target_language(request).unwrap_or_else(|err| {
            warn!("Ignoring {}: {}", TARGET_LANG, err);
            None
        });

        if texts.is_empty() {
            return Ok(vec![]);
        }
        let input_count = texts.len();
        let texts = prepare_source_texts(texts, target_language.as_ref());

        let batch = model.tokenizer.encode_batch(&texts, MAX_INPUT_LENGTH)?;
        let settings =
            GenerationSettings::with_max_length(max_length.unwrap_or(DEFAULT_MAX_LENGTH));
        let sequences = model.generator.generate(&batch, &settings)?;
        let translations = model.tokenizer.decode_batch(&sequences)?;

        if translations.len() != input_count {
            return Err(AdapterError::ModelError(format!(
                "model returned {} sequences for {} inputs",
                translations.len(),
                input_count
            )));
        }
        Ok(translations)
    }
}

/// `Ok(None)` when `MAX_LENGTH` is absent, `Err` when it is present but unusable.
pub fn optional_max_length(request: &InferenceRequest) -> Result<Option<i64>, AdapterError> {
    match request.input(MAX_LENGTH) {
        Some(tensor) => {
            let value = tensor.first_integer()?;
            if value <= 0 {
                return Err(AdapterError::InvalidInputError(format!(
                    "{} must be positive, got {}",
                    MAX_LENGTH, value
                )));
            }
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// `Ok(None)` when `TARGET_LANG` is absent or blank, `Err` when it is present but unusable.
pub fn optional_target_language(
    request: &InferenceRequest,
) -> Result<Option<TargetLanguage>, AdapterError> {
    match request.input(TARGET_LANG) {
        Some(tensor) => Ok(TargetLanguage::new(tensor.first_string()?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TensorData;

    fn request_with(tensor: HostTensor) -> InferenceRequest {
        InferenceRequest::default()
            .with_input(HostTensor::from_strings(INPUT_TEXT, vec!["Hello"]))
            .with_input(tensor)
    }

    #[test]
    fn max_length_reading() {
        let request = InferenceRequest::default();
        assert_eq!(optional_max_length(&request).unwrap(), None);

        let request = request_with(HostTensor::from_i64(MAX_LENGTH, vec![64]));
        assert_eq!(optional_max_length(&request).unwrap(), Some(64));

        let request = request_with(HostTensor::from_i64(MAX_LENGTH, vec![0]));
        assert!(optional_max_length(&request).is_err());

        let request = request_with(HostTensor::from_strings(MAX_LENGTH, vec!["many"]));
        assert!(optional_max_length(&request).is_err());
    }

    #[test]
    fn target_language_reading() {
        let request = request_with(HostTensor::from_bytes(TARGET_LANG, vec![b"de".to_vec()]));
        assert_eq!(
            optional_target_language(&request).unwrap(),
            TargetLanguage::new("de")
        );

        let request = request_with(HostTensor::from_strings(TARGET_LANG, vec![""]));
        assert_eq!(optional_target_language(&request).unwrap(), None);

        let request = request_with(HostTensor::new(
            TARGET_LANG,
            vec![2, 2],
            TensorData::Str(vec!["fr".to_string()]),
        ));
        assert!(optional_target_language(&request).is_err());
    }

    #[test]
    fn uninitialized_adapter_answers_every_request() {
        let adapter = TranslationAdapter::new();
        let requests = vec![
            request_with(HostTensor::from_i64(MAX_LENGTH, vec![8])),
            InferenceRequest::default(),
        ];

        let responses = adapter.execute(&requests);
        assert_eq!(responses.len(), 2);
        for response in responses {
            assert_eq!(
                response.error().unwrap().message(),
                "Error during inference: adapter is not initialized"
            );
        }
    }

    #[test]
    fn finalize_without_model() {
        let mut adapter = TranslationAdapter::new();
        adapter.finalize();
        adapter.finalize();
        assert!(!adapter.is_ready());
    }
}
