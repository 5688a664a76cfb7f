use std::collections::{BTreeSet, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::SpecialTokens;
use crate::error::VocabError;
use crate::types::NormalizedTranscript;

/// Distinct characters across a corpus, kept in code-point order.
///
/// Shards built independently can be combined with [`CharacterSet::merge`];
/// the union does not depend on the order transcripts were seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    chars: BTreeSet<char>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_corpus<'a, I>(corpus: I) -> Self
    where
        I: IntoIterator<Item = &'a NormalizedTranscript>,
    {
        let mut set = Self::new();
        for transcript in corpus {
            set.extend(transcript);
        }
        set
    }

    pub fn extend(&mut self, transcript: &NormalizedTranscript) {
        self.chars.extend(transcript.chars());
    }

    pub fn merge(&mut self, other: CharacterSet) {
        self.chars.extend(other.chars);
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

/// Symbol to index mapping with indices dense over `[0, len)`.
///
/// Always holds the three reserved tokens and never the space character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyMapping {
    symbols: Vec<String>,
    ids: HashMap<String, usize>,
    special_tokens: SpecialTokens,
    word_delimiter_id: usize,
    unk_id: usize,
    pad_id: usize,
}

impl VocabularyMapping {
    /// Builds a mapping where `symbols[i]` gets index `i`.
    pub fn from_symbols(
        symbols: Vec<String>,
        special_tokens: SpecialTokens,
    ) -> Result<Self, VocabError> {
        let mut ids = HashMap::with_capacity(symbols.len());
        for (id, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(VocabError::invalid_vocabulary(format!(
                    "empty symbol at index {id}"
                )));
            }
            if symbol == " " {
                return Err(VocabError::invalid_vocabulary(
                    "space must be represented by the word delimiter",
                ));
            }
            if let Some(prev) = ids.insert(symbol.clone(), id) {
                return Err(VocabError::invalid_vocabulary(format!(
                    "symbol {symbol:?} assigned to both {prev} and {id}"
                )));
            }
        }

        let lookup = |token: &str| {
            ids.get(token).copied().ok_or_else(|| {
                VocabError::invalid_vocabulary(format!("missing reserved token {token:?}"))
            })
        };
        let word_delimiter_id = lookup(&special_tokens.word_delimiter)?;
        let unk_id = lookup(&special_tokens.unk)?;
        let pad_id = lookup(&special_tokens.pad)?;

        Ok(Self {
            symbols,
            ids,
            special_tokens,
            word_delimiter_id,
            unk_id,
            pad_id,
        })
    }

    /// Builds a mapping from a loaded `{symbol: index}` object, checking
    /// that the indices form a dense, duplicate-free range.
    pub fn from_index_map(
        map: HashMap<String, usize>,
        special_tokens: SpecialTokens,
    ) -> Result<Self, VocabError> {
        let mut entries: Vec<(usize, String)> = map.into_iter().map(|(k, v)| (v, k)).collect();
        entries.sort();

        let mut symbols = Vec::with_capacity(entries.len());
        for (expected, (id, symbol)) in entries.into_iter().enumerate() {
            if id < expected {
                return Err(VocabError::invalid_vocabulary(format!(
                    "index {id} assigned more than once"
                )));
            }
            if id > expected {
                return Err(VocabError::invalid_vocabulary(format!(
                    "indices are not dense: index {expected} is missing"
                )));
            }
            symbols.push(symbol);
        }
        Self::from_symbols(symbols, special_tokens)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn id_of(&self, symbol: &str) -> Option<usize> {
        self.ids.get(symbol).copied()
    }

    pub fn id_of_char(&self, c: char) -> Option<usize> {
        let mut buf = [0u8; 4];
        self.id_of(c.encode_utf8(&mut buf))
    }

    pub fn symbol_of(&self, id: usize) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(id, symbol)| (symbol.as_str(), id))
    }

    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    pub fn word_delimiter_id(&self) -> usize {
        self.word_delimiter_id
    }

    pub fn unk_id(&self) -> usize {
        self.unk_id
    }

    pub fn pad_id(&self) -> usize {
        self.pad_id
    }

    /// Single-character keys only, the shape a character-level CTC
    /// tokenizer looks up against.
    pub fn char_ids(&self) -> HashMap<char, usize> {
        self.iter()
            .filter_map(|(symbol, id)| {
                let mut it = symbol.chars();
                let c = it.next()?;
                if it.next().is_some() {
                    return None;
                }
                Some((c, id))
            })
            .collect()
    }
}

impl Serialize for VocabularyMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.symbols.len()))?;
        for (symbol, id) in self.iter() {
            map.serialize_entry(symbol, &id)?;
        }
        map.end()
    }
}
