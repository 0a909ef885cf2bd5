#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use madlad_adapter::host::{HostTensor, InferenceRequest, InitializeArgs};
use madlad_adapter::pipelines::translation::{TranslationAdapter, INPUT_TEXT, TARGET_LANG};
use std::time::{Duration, Instant};

// Model artifacts are located through MADLAD_MODEL_REPOSITORY (default: /mnt/models).
fn create_adapter() -> TranslationAdapter {
    let mut adapter = TranslationAdapter::new();
    adapter.initialize(&InitializeArgs::from_env()).unwrap();
    adapter
}

fn translation_forward_pass(
    iters: u64,
    adapter: &TranslationAdapter,
    requests: &[InferenceRequest],
) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        let _ = adapter.execute(requests);
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn translation_load_model(iters: u64) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        let mut adapter = create_adapter();
        duration = duration.checked_add(start.elapsed()).unwrap();
        adapter.finalize();
    }
    duration
}

fn bench_translation(c: &mut Criterion) {
    //    Set-up translation adapter
    unsafe {
        torch_sys::dummy_cuda_dependency();
    }
    let adapter = create_adapter();

    //    Define input
    let input = vec![
        "In findings published Tuesday in Cornell University's arXiv by a team of scientists from the University of Montreal and a separate report published Wednesday in Nature Astronomy by a team from University College London (UCL), the presence of water vapour was confirmed in the atmosphere of K2-18b, a planet circling a star in the constellation Leo.",
        "This is the first such discovery in a planet in its star's habitable zone — not too hot and not too cold for liquid water to exist.",
        "They found that certain wavelengths of light, which are usually absorbed by water, weakened when the planet was in the way, indicating not only does K2-18b have an atmosphere, but the atmosphere contains water in vapour form.",
        "The team from UCL then analyzed the Montreal team's data using their own software and confirmed their conclusion.",
        "K2-18b was first identified in 2015 by the Kepler space telescope.",
        "It is about 110 light-years from Earth and larger but less dense.",
    ];
    // (New sample credits: [WikiNews](https://en.wikinews.org/wiki/Astronomers_find_water_vapour_in_atmosphere_of_exoplanet_K2-18b))
    let requests = vec![
        InferenceRequest::default()
            .with_input(HostTensor::from_strings(INPUT_TEXT, input.clone()))
            .with_input(HostTensor::from_strings(TARGET_LANG, vec!["fr"])),
        InferenceRequest::default()
            .with_input(HostTensor::from_strings(INPUT_TEXT, input))
            .with_input(HostTensor::from_strings(TARGET_LANG, vec!["es"])),
    ];

    c.bench_function("Translation forward pass", |b| {
        b.iter_custom(|iters| black_box(translation_forward_pass(iters, &adapter, &requests)))
    });

    c.bench_function("Load model", |b| {
        b.iter_custom(|iters| black_box(translation_load_model(iters)))
    });
}

criterion_group! {
name = benches;
config = Criterion::default().sample_size(10);
targets = bench_translation
}

criterion_main!(benches);
