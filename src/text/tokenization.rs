use crate::types::NormalizedTranscript;
use crate::vocab::VocabularyMapping;

/// Maps a normalized transcript to token ids.
///
/// Only U+0020 separates words: runs of spaces become a single word
/// delimiter and edge spaces are dropped. Every other character, tabs and
/// no-break spaces included, is looked up as-is and falls back to the
/// unknown token.
pub fn encode(transcript: &NormalizedTranscript, vocab: &VocabularyMapping) -> Vec<usize> {
    let mut tokens = Vec::with_capacity(transcript.as_str().len());
    for word in transcript.as_str().split(' ').filter(|w| !w.is_empty()) {
        if !tokens.is_empty() {
            tokens.push(vocab.word_delimiter_id());
        }
        tokens.extend(
            word.chars()
                .map(|c| vocab.id_of_char(c).unwrap_or(vocab.unk_id())),
        );
    }
    tokens
}

/// Greedy CTC decoding of per-frame argmax ids.
///
/// Consecutive repeats collapse to one emission, the padding token acts as
/// the blank, and word delimiters become single spaces.
pub fn ctc_decode(ids: &[usize], vocab: &VocabularyMapping) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut prev: Option<usize> = None;

    for &id in ids {
        if prev == Some(id) {
            continue;
        }
        prev = Some(id);

        if id == vocab.pad_id() || id == vocab.unk_id() {
            continue;
        }
        if id == vocab.word_delimiter_id() {
            if !cur.is_empty() {
                words.push(std::mem::take(&mut cur));
            }
            continue;
        }
        match vocab.symbol_of(id) {
            Some(symbol) => cur.push_str(symbol),
            None => {
                tracing::warn!(
                    id,
                    vocab_size = vocab.len(),
                    "tokenization: id outside vocabulary, skipping"
                );
            }
        }
    }
    if !cur.is_empty() {
        words.push(cur);
    }
    words.join(" ")
}
