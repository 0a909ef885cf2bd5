use madlad_adapter::host::{HostTensor, InferenceRequest, InitializeArgs};
use madlad_adapter::pipelines::translation::{
    TranslationAdapter, INPUT_TEXT, MAX_LENGTH, OUTPUT_TEXT, TARGET_LANG,
};
use madlad_adapter::Placement;
use tch::Device;

// Requires converted MADLAD-400 artifacts under MADLAD_MODEL_REPOSITORY (or /mnt/models).
#[test]
#[ignore]
fn test_translation_madlad() -> anyhow::Result<()> {
    //    Set-up adapter
    let placement = Placement::for_device(Device::cuda_if_available());
    let mut adapter = TranslationAdapter::new().with_placement(placement);
    adapter.initialize(&InitializeArgs::from_env())?;
    assert_eq!(adapter.placement(), Some(placement));
    assert_eq!(adapter.model_precision(), Some(placement.kind));

    let spanish = InferenceRequest::default()
        .with_input(HostTensor::from_strings(
            INPUT_TEXT,
            vec!["I love pizza!", "The dog did not wake up."],
        ))
        .with_input(HostTensor::from_strings(TARGET_LANG, vec!["es"]));
    let french = InferenceRequest::default()
        .with_input(HostTensor::from_bytes(INPUT_TEXT, vec![b"Good morning".to_vec()]))
        .with_input(HostTensor::from_bytes(TARGET_LANG, vec![b"fr".to_vec()]))
        .with_input(HostTensor::from_i64(MAX_LENGTH, vec![32]));

    let responses = adapter.execute(&[spanish, french]);
    adapter.finalize();

    assert_eq!(responses.len(), 2);
    let spanish = responses[0].output(OUTPUT_TEXT).unwrap().to_strings()?;
    assert_eq!(spanish.len(), 2);
    assert!(spanish.iter().all(|text| !text.is_empty() && !text.contains("<2es>")));
    let french = responses[1].output(OUTPUT_TEXT).unwrap().to_strings()?;
    assert_eq!(french.len(), 1);
    assert!(!french[0].is_empty());

    Ok(())
}
