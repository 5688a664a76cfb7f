use crate::config::DEFAULT_IGNORED_CHARS;
use crate::pipeline::traits::{Normalizer, Tokenizer};
use crate::text::normalizer::normalize_with;
use crate::text::tokenization::{ctc_decode, encode};
use crate::types::{NormalizedTranscript, Transcript};
use crate::vocab::VocabularyMapping;

pub struct PunctuationNormalizer {
    ignored_chars: Vec<char>,
}

impl PunctuationNormalizer {
    pub fn new(ignored_chars: Vec<char>) -> Self {
        Self { ignored_chars }
    }
}

impl Default for PunctuationNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_CHARS.to_vec())
    }
}

impl Normalizer for PunctuationNormalizer {
    fn normalize(&self, transcript: &Transcript) -> NormalizedTranscript {
        NormalizedTranscript::new(normalize_with(
            transcript.as_str(),
            &self.ignored_chars,
        ))
    }
}

pub struct CtcCharTokenizer;

impl Tokenizer for CtcCharTokenizer {
    fn encode(&self, transcript: &NormalizedTranscript, vocab: &VocabularyMapping) -> Vec<usize> {
        encode(transcript, vocab)
    }

    fn decode(&self, ids: &[usize], vocab: &VocabularyMapping) -> String {
        ctc_decode(ids, vocab)
    }
}
