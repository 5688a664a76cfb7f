use crate::config::SpecialTokens;
use crate::error::VocabError;
use crate::types::NormalizedTranscript;
use crate::vocab::mapping::{CharacterSet, VocabularyMapping};

pub fn build_vocabulary(
    corpus: &[NormalizedTranscript],
) -> Result<VocabularyMapping, VocabError> {
    build_vocabulary_with(corpus, &SpecialTokens::default())
}

pub fn build_vocabulary_with(
    corpus: &[NormalizedTranscript],
    special_tokens: &SpecialTokens,
) -> Result<VocabularyMapping, VocabError> {
    let chars = CharacterSet::from_corpus(corpus);
    tracing::debug!(
        transcripts = corpus.len(),
        distinct_chars = chars.len(),
        "vocab: collected character set"
    );
    build_from_character_set(&chars, special_tokens)
}

/// Assigns indices to an already merged character set.
///
/// Characters are enumerated in code-point order. The word delimiter takes
/// the slot space was given; without a space in the corpus it is appended
/// instead. Unknown and padding tokens always take the last two indices.
pub fn build_from_character_set(
    chars: &CharacterSet,
    special_tokens: &SpecialTokens,
) -> Result<VocabularyMapping, VocabError> {
    if chars.is_empty() {
        return Err(VocabError::EmptyCorpus);
    }

    let substituted = chars.contains(' ');
    let mut symbols = Vec::with_capacity(chars.len() + 3);
    for c in chars.iter() {
        if c == ' ' {
            symbols.push(special_tokens.word_delimiter.clone());
            continue;
        }
        let symbol = c.to_string();
        if special_tokens.is_reserved(&symbol) {
            return Err(VocabError::ReservedSymbol { symbol });
        }
        symbols.push(symbol);
    }
    if !substituted {
        symbols.push(special_tokens.word_delimiter.clone());
    }
    symbols.push(special_tokens.unk.clone());
    symbols.push(special_tokens.pad.clone());

    let mapping = VocabularyMapping::from_symbols(symbols, special_tokens.clone())?;
    tracing::debug!(
        size = mapping.len(),
        word_delimiter_id = mapping.word_delimiter_id(),
        delimiter_from_space = substituted,
        "vocab: assigned indices"
    );
    Ok(mapping)
}
