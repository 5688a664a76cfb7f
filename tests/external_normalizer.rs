use wav2vec2_vocab::{
    encode, NormalizedTranscript, Normalizer, Transcript, VocabConfig, VocabularyPipelineBuilder,
};

/// Keeps only ASCII letters and spaces, lowercased.
struct AsciiLettersNormalizer;

impl Normalizer for AsciiLettersNormalizer {
    fn normalize(&self, transcript: &Transcript) -> NormalizedTranscript {
        let text: String = transcript
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NormalizedTranscript::new(text)
    }
}

#[test]
fn downstream_normalizer_drives_the_pipeline() {
    let pipeline = VocabularyPipelineBuilder::new(VocabConfig::default())
        .with_normalizer(Box::new(AsciiLettersNormalizer))
        .build()
        .expect("build should succeed");

    let train = [Transcript::from("Año 2024: OK")];
    let prepared = pipeline.prepare(&[&train[..]]).expect("prepare");

    assert_eq!(prepared.partitions[0][0].as_str(), "ao  ok");
    // | a k o [UNK] [PAD]
    assert_eq!(prepared.vocab.len(), 6);
    assert_eq!(prepared.vocab.id_of("|"), Some(0));
    assert_eq!(prepared.vocab.id_of("ñ"), None);
    assert_eq!(prepared.vocab.id_of("2"), None);

    let ids = encode(&prepared.partitions[0][0], &prepared.vocab);
    assert_eq!(pipeline.decode(&ids, &prepared.vocab), "ao ok");
}

#[test]
fn normalized_transcript_new_keeps_text_verbatim() {
    let t = NormalizedTranscript::new(String::from("already clean"));
    assert_eq!(t.as_str(), "already clean");
    assert_eq!(t.to_string(), "already clean");
}
