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

//! # MADLAD-400 on libtorch
//!
//! MADLAD-400 checkpoints share the T5 architecture and SentencePiece vocabulary, so they are
//! served by `rust-bert`'s T5 generator. The model directory is expected to contain:
//! - `config.json`: T5 model configuration
//! - `spiece.model`: SentencePiece vocabulary
//! - `rust_model.ot`: weights converted for libtorch

use crate::common::device::Placement;
use crate::common::error::AdapterError;
use crate::pipelines::generation::{
    EncodedBatch, GenerationSettings, LoadedModel, ModelLoader, Seq2SeqGenerator, TextTokenizer,
    DEFAULT_MAX_LENGTH, NUM_BEAMS,
};
use rust_bert::pipelines::common::{ModelResource, ModelType, TokenizerOption};
use rust_bert::pipelines::generation_utils::{GenerateConfig, GenerateOptions, LanguageGenerator};
use rust_bert::resources::LocalResource;
use rust_bert::t5::T5Generator;
use rust_tokenizers::tokenizer::TruncationStrategy;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tch::{no_grad, Device, Kind, Tensor};

pub const CONFIG_FILE: &str = "config.json";
pub const VOCAB_FILE: &str = "spiece.model";
pub const WEIGHTS_FILE: &str = "rust_model.ot";

/// # Paths of the artifacts making up a MADLAD-400 model
#[derive(Debug, Clone, PartialEq)]
pub struct MadladResources {
    pub config: PathBuf,
    pub vocab: PathBuf,
    pub weights: PathBuf,
}

impl MadladResources {
    /// Locates the artifacts in `model_path`, failing on the first one missing.
    pub fn from_directory(model_path: &Path) -> Result<MadladResources, AdapterError> {
        let resources = MadladResources {
            config: model_path.join(CONFIG_FILE),
            vocab: model_path.join(VOCAB_FILE),
            weights: model_path.join(WEIGHTS_FILE),
        };
        for path in &[&resources.config, &resources.vocab, &resources.weights] {
            if !path.is_file() {
                return Err(AdapterError::InvalidConfigurationError(format!(
                    "model artifact {} not found",
                    path.display()
                )));
            }
        }
        Ok(resources)
    }
}

/// # SentencePiece tokenizer of the T5 family
///
/// Reads the vocabulary already loaded by the generator instead of loading it a second time.
pub struct MadladTokenizer {
    model: Rc<T5Generator>,
    pad_id: i64,
}

impl MadladTokenizer {
    pub fn new(model: Rc<T5Generator>) -> Result<MadladTokenizer, AdapterError> {
        let pad_id = model.get_tokenizer().get_pad_id().ok_or_else(|| {
            AdapterError::TokenizerError("vocabulary has no padding token".to_string())
        })?;
        Ok(MadladTokenizer { model, pad_id })
    }

    fn tokenizer(&self) -> &TokenizerOption {
        self.model.get_tokenizer()
    }
}

impl TextTokenizer for MadladTokenizer {
    fn encode_batch(
        &self,
        texts: &[String],
        max_input_length: usize,
    ) -> Result<EncodedBatch, AdapterError> {
        let token_ids = self
            .tokenizer()
            .encode_list(texts, max_input_length, &TruncationStrategy::LongestFirst, 0)
            .into_iter()
            .map(|input| input.token_ids)
            .collect::<Vec<Vec<i64>>>();
        Ok(EncodedBatch::from_token_ids(token_ids, self.pad_id))
    }

    fn decode_batch(&self, sequences: &[Vec<i64>]) -> Result<Vec<String>, AdapterError> {
        let tokenizer = self.tokenizer();
        Ok(sequences
            .iter()
            .map(|sequence| tokenizer.decode(sequence, true, true))
            .collect())
    }
}

/// Options passed to every generation call: beam search bounded by the request's maximum length.
pub fn generate_options(settings: &GenerationSettings) -> GenerateOptions<'static> {
    GenerateOptions {
        max_length: Some(settings.max_length),
        num_beams: Some(settings.num_beams),
        early_stopping: Some(settings.early_stopping),
        do_sample: Some(false),
        ..Default::default()
    }
}

/// Converts the model weights to `kind`. Weights are stored in full precision.
fn apply_precision(model: &mut T5Generator, kind: Kind) -> Result<(), AdapterError> {
    match kind {
        Kind::Half => model.half()?,
        Kind::Float => model.float()?,
        other => {
            return Err(AdapterError::InvalidConfigurationError(format!(
                "unsupported model precision {:?}",
                other
            )))
        }
    }
    Ok(())
}

/// # Beam-search generator over the T5 encoder-decoder
pub struct MadladGenerator {
    model: Rc<T5Generator>,
    device: Device,
    kind: Kind,
}

impl MadladGenerator {
    pub fn new(
        resources: &MadladResources,
        placement: Placement,
    ) -> Result<MadladGenerator, AdapterError> {
        let generate_config = GenerateConfig {
            model_type: ModelType::T5,
            model_resource: ModelResource::Torch(Box::new(LocalResource {
                local_path: resources.weights.clone(),
            })),
            config_resource: Box::new(LocalResource {
                local_path: resources.config.clone(),
            }),
            vocab_resource: Box::new(LocalResource {
                local_path: resources.vocab.clone(),
            }),
            merges_resource: None,
            min_length: 0,
            max_length: Some(DEFAULT_MAX_LENGTH),
            do_sample: false,
            early_stopping: true,
            num_beams: NUM_BEAMS,
            no_repeat_ngram_size: 0,
            device: placement.device,
            ..Default::default()
        };
        let mut model = T5Generator::new(generate_config)?;
        apply_precision(&mut model, placement.kind)?;
        Ok(MadladGenerator {
            model: Rc::new(model),
            device: placement.device,
            kind: placement.kind,
        })
    }

    /// Handle on the underlying model, shared with the tokenizer.
    pub fn shared_model(&self) -> Rc<T5Generator> {
        self.model.clone()
    }

    fn to_tensors(&self, batch: &EncodedBatch) -> Result<(Tensor, Tensor), AdapterError> {
        let input_ids = batch
            .input_ids
            .iter()
            .map(|ids| Tensor::from_slice(ids))
            .collect::<Vec<Tensor>>();
        let attention_mask = batch
            .attention_mask
            .iter()
            .map(|mask| Tensor::from_slice(mask))
            .collect::<Vec<Tensor>>();
        Ok((
            Tensor::f_stack(&input_ids, 0)?.to(self.device),
            Tensor::f_stack(&attention_mask, 0)?.to(self.device),
        ))
    }
}

impl Seq2SeqGenerator for MadladGenerator {
    fn generate(
        &self,
        batch: &EncodedBatch,
        settings: &GenerationSettings,
    ) -> Result<Vec<Vec<i64>>, AdapterError> {
        let (input_ids, attention_mask) = self.to_tensors(batch)?;
        let output = no_grad(|| {
            self.model.generate_from_ids_and_past(
                input_ids,
                Some(attention_mask),
                Some(generate_options(settings)),
            )
        });
        Ok(output.into_iter().map(|sequence| sequence.indices).collect())
    }

    fn precision(&self) -> Option<Kind> {
        Some(self.kind)
    }
}

/// # Loads MADLAD-400 artifacts with `rust-bert`
#[derive(Debug, Clone, Copy, Default)]
pub struct MadladLoader;

impl ModelLoader for MadladLoader {
    fn load(&self, model_path: &Path, placement: Placement) -> Result<LoadedModel, AdapterError> {
        let resources = MadladResources::from_directory(model_path)?;
        let generator = MadladGenerator::new(&resources, placement)?;
        let tokenizer = MadladTokenizer::new(generator.shared_model())?;
        Ok(LoadedModel {
            tokenizer: Box::new(tokenizer),
            generator: Box::new(generator),
            placement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_artifacts_are_reported() -> anyhow::Result<()> {
        let model_dir = tempfile::tempdir()?;
        fs::write(model_dir.path().join(CONFIG_FILE), "{}")?;

        match MadladResources::from_directory(model_dir.path()) {
            Err(AdapterError::InvalidConfigurationError(message)) => {
                assert!(message.contains(VOCAB_FILE))
            }
            other => panic!("unexpected result: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn complete_directory() -> anyhow::Result<()> {
        let model_dir = tempfile::tempdir()?;
        for file in &[CONFIG_FILE, VOCAB_FILE, WEIGHTS_FILE] {
            fs::write(model_dir.path().join(file), "")?;
        }

        let resources = MadladResources::from_directory(model_dir.path())?;
        assert_eq!(resources.weights, model_dir.path().join(WEIGHTS_FILE));
        Ok(())
    }

    #[test]
    fn generation_options_follow_settings() {
        let options = generate_options(&GenerationSettings::default());
        assert_eq!(options.num_beams, Some(4));
        assert_eq!(options.early_stopping, Some(true));
        assert_eq!(options.max_length, Some(256));
        assert_eq!(options.do_sample, Some(false));
        assert_eq!(options.max_new_tokens, None);

        let options = generate_options(&GenerationSettings::with_max_length(64));
        assert_eq!(options.max_length, Some(64));
        assert_eq!(options.num_beams, Some(4));
    }
}
