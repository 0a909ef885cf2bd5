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

//! # Seams to the pretrained model library
//!
//! The adapter only talks to a tokenizer and a sequence-to-sequence generator through the traits
//! defined here. `crate::pipelines::madlad` provides the libtorch implementation; tests plug in
//! stubs.

use crate::common::device::Placement;
use crate::common::error::AdapterError;
use std::path::Path;
use tch::Kind;

/// Inputs longer than this (in tokens) are truncated.
pub const MAX_INPUT_LENGTH: usize = 512;
/// Generation bound used when a request does not provide `MAX_LENGTH`.
pub const DEFAULT_MAX_LENGTH: i64 = 256;
pub const NUM_BEAMS: i64 = 4;

/// # Tokenized batch, right-padded to the longest sequence
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBatch {
    pub input_ids: Vec<Vec<i64>>,
    /// 1 for real tokens, 0 for padding
    pub attention_mask: Vec<Vec<i64>>,
}

impl EncodedBatch {
    /// Pads every sequence with `pad_id` up to the length of the longest one.
    pub fn from_token_ids(token_ids: Vec<Vec<i64>>, pad_id: i64) -> EncodedBatch {
        let max_len = token_ids.iter().map(Vec::len).max().unwrap_or(0);
        let mut input_ids = Vec::with_capacity(token_ids.len());
        let mut attention_mask = Vec::with_capacity(token_ids.len());
        for mut ids in token_ids {
            let mut mask = vec![1; ids.len()];
            mask.resize(max_len, 0);
            ids.resize(max_len, pad_id);
            input_ids.push(ids);
            attention_mask.push(mask);
        }
        EncodedBatch {
            input_ids,
            attention_mask,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.input_ids.len()
    }

    pub fn sequence_length(&self) -> usize {
        self.input_ids.first().map_or(0, Vec::len)
    }
}

/// # Generation parameters for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    /// Maximum length of the generated sequences
    pub max_length: i64,
    /// Beam search width
    pub num_beams: i64,
    /// Stop the beam search once `num_beams` hypotheses are finished
    pub early_stopping: bool,
}

impl Default for GenerationSettings {
    fn default() -> GenerationSettings {
        GenerationSettings {
            max_length: DEFAULT_MAX_LENGTH,
            num_beams: NUM_BEAMS,
            early_stopping: true,
        }
    }
}

impl GenerationSettings {
    pub fn with_max_length(max_length: i64) -> GenerationSettings {
        GenerationSettings {
            max_length,
            ..Default::default()
        }
    }
}

/// # Text to token ids and back
pub trait TextTokenizer {
    /// Tokenizes a batch with padding to equal length, truncating each input to
    /// `max_input_length` tokens.
    fn encode_batch(
        &self,
        texts: &[String],
        max_input_length: usize,
    ) -> Result<EncodedBatch, AdapterError>;

    /// Decodes generated sequences, skipping special tokens.
    fn decode_batch(&self, sequences: &[Vec<i64>]) -> Result<Vec<String>, AdapterError>;
}

/// # Encoder-decoder generation
pub trait Seq2SeqGenerator {
    /// Returns one generated token sequence per input row, in input order.
    fn generate(
        &self,
        batch: &EncodedBatch,
        settings: &GenerationSettings,
    ) -> Result<Vec<Vec<i64>>, AdapterError>;

    /// Precision of the model weights, when the backend tracks it.
    fn precision(&self) -> Option<Kind> {
        None
    }
}

/// # Tokenizer and model bound to a device
pub struct LoadedModel {
    pub tokenizer: Box<dyn TextTokenizer>,
    pub generator: Box<dyn Seq2SeqGenerator>,
    pub placement: Placement,
}

/// # Loads a tokenizer and a model from a directory of artifacts
pub trait ModelLoader {
    fn load(&self, model_path: &Path, placement: Placement) -> Result<LoadedModel, AdapterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_longest_sequence() {
        let batch = EncodedBatch::from_token_ids(vec![vec![5, 6, 1], vec![7, 1]], 0);

        assert_eq!(batch.batch_size(), 2);
        assert_eq!(batch.sequence_length(), 3);
        assert_eq!(batch.input_ids, vec![vec![5, 6, 1], vec![7, 1, 0]]);
        assert_eq!(batch.attention_mask, vec![vec![1, 1, 1], vec![1, 1, 0]]);
    }

    #[test]
    fn empty_batch() {
        let batch = EncodedBatch::from_token_ids(vec![], 0);
        assert_eq!(batch.batch_size(), 0);
        assert_eq!(batch.sequence_length(), 0);
    }

    #[test]
    fn default_settings() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.max_length, 256);
        assert_eq!(settings.num_beams, 4);
        assert!(settings.early_stopping);
        assert_eq!(GenerationSettings::with_max_length(64).max_length, 64);
    }
}
