use crate::types::{NormalizedTranscript, Transcript};
use crate::vocab::VocabularyMapping;

pub trait Normalizer: Send + Sync {
    fn normalize(&self, transcript: &Transcript) -> NormalizedTranscript;
}

pub trait Tokenizer: Send + Sync {
    fn encode(&self, transcript: &NormalizedTranscript, vocab: &VocabularyMapping) -> Vec<usize>;

    fn decode(&self, ids: &[usize], vocab: &VocabularyMapping) -> String;
}
