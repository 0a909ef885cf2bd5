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

use clap::Parser;
use madlad_adapter::host::{HostTensor, InferenceRequest, InitializeArgs};
use madlad_adapter::pipelines::translation::{
    TranslationAdapter, INPUT_TEXT, MAX_LENGTH, OUTPUT_TEXT, TARGET_LANG,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Translates texts with a MADLAD-400 model through the adapter lifecycle
#[derive(Parser, Debug)]
#[command(name = "madlad-translate", version, about, long_about = None)]
struct Args {
    /// Model repository root (defaults to MADLAD_MODEL_REPOSITORY or /mnt/models)
    #[arg(long)]
    repository: Option<PathBuf>,

    /// Model name
    #[arg(long)]
    name: Option<String>,

    /// Model version
    #[arg(long)]
    version: Option<String>,

    /// Target language code, e.g. `es`
    #[arg(short, long)]
    target_lang: Option<String>,

    /// Maximum generated length
    #[arg(short, long)]
    max_length: Option<i64>,

    /// Texts to translate
    #[arg(required = true)]
    texts: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut init_args = InitializeArgs::from_env();
    if let Some(repository) = args.repository {
        init_args = init_args.with_repository(repository);
    }
    if let Some(name) = args.name {
        init_args = init_args.with_model_name(name);
    }
    if let Some(version) = args.version {
        init_args = init_args.with_model_version(version);
    }

    let mut request =
        InferenceRequest::default().with_input(HostTensor::from_strings(INPUT_TEXT, args.texts));
    if let Some(target_lang) = args.target_lang {
        request = request.with_input(HostTensor::from_strings(TARGET_LANG, vec![target_lang]));
    }
    if let Some(max_length) = args.max_length {
        request = request.with_input(HostTensor::from_i64(MAX_LENGTH, vec![max_length]));
    }

    let mut adapter = TranslationAdapter::new();
    adapter.initialize(&init_args)?;
    let mut responses = adapter.execute(&[request]);
    adapter.finalize();

    let response = responses.remove(0);
    if let Some(error) = response.error() {
        anyhow::bail!("{}", error);
    }
    if let Some(output) = response.output(OUTPUT_TEXT) {
        for translation in output.to_strings()? {
            println!("{}", translation);
        }
    }
    Ok(())
}
