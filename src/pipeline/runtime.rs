use std::path::{Path, PathBuf};

use crate::config::VocabConfig;
use crate::error::VocabError;
use crate::pipeline::traits::{Normalizer, Tokenizer};
use crate::types::{NormalizedTranscript, Transcript};
use crate::vocab::persist::{save_tokenizer_config, save_vocab};
use crate::vocab::{build_from_character_set, CharacterSet, VocabularyMapping};

pub struct VocabularyPipeline {
    config: VocabConfig,
    normalizer: Box<dyn Normalizer>,
    tokenizer: Box<dyn Tokenizer>,
}

pub(crate) struct VocabularyPipelineParts {
    pub config: VocabConfig,
    pub normalizer: Box<dyn Normalizer>,
    pub tokenizer: Box<dyn Tokenizer>,
}

/// Normalized partitions plus the vocabulary built over all of them.
#[derive(Debug, Clone)]
pub struct PreparedVocabulary {
    /// Same order and lengths as the partitions passed to `prepare`.
    pub partitions: Vec<Vec<NormalizedTranscript>>,
    pub vocab: VocabularyMapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPaths {
    pub vocab_path: PathBuf,
    pub tokenizer_config_path: PathBuf,
}

impl VocabularyPipeline {
    pub(crate) fn from_parts(parts: VocabularyPipelineParts) -> Self {
        Self {
            config: parts.config,
            normalizer: parts.normalizer,
            tokenizer: parts.tokenizer,
        }
    }

    pub fn normalize(&self, transcript: &Transcript) -> NormalizedTranscript {
        self.normalizer.normalize(transcript)
    }

    /// Normalizes every partition and builds one vocabulary over their union.
    ///
    /// Each partition contributes its own character set; indices are only
    /// assigned after all sets are merged.
    pub fn prepare(
        &self,
        partitions: &[&[Transcript]],
    ) -> Result<PreparedVocabulary, VocabError> {
        let mut merged = CharacterSet::new();
        let mut normalized_partitions = Vec::with_capacity(partitions.len());

        for (index, partition) in partitions.iter().enumerate() {
            let normalized: Vec<NormalizedTranscript> =
                partition.iter().map(|t| self.normalizer.normalize(t)).collect();
            let chars = CharacterSet::from_corpus(&normalized);
            tracing::debug!(
                partition = index,
                transcripts = normalized.len(),
                distinct_chars = chars.len(),
                "pipeline: normalized partition"
            );
            merged.merge(chars);
            normalized_partitions.push(normalized);
        }

        let vocab = build_from_character_set(&merged, &self.config.special_tokens)?;
        tracing::info!(
            partitions = partitions.len(),
            transcripts = normalized_partitions.iter().map(Vec::len).sum::<usize>(),
            vocab_size = vocab.len(),
            "pipeline: built vocabulary"
        );

        Ok(PreparedVocabulary {
            partitions: normalized_partitions,
            vocab,
        })
    }

    pub fn persist(&self, prepared: &PreparedVocabulary) -> Result<PersistedPaths, VocabError> {
        let vocab_path = self.config.vocab_path.clone();
        let tokenizer_config_path = self.config.tokenizer_config_path.clone();
        save_vocab(&vocab_path, &prepared.vocab)?;
        save_tokenizer_config(&tokenizer_config_path, &self.config.tokenizer_config())?;
        Ok(PersistedPaths {
            vocab_path,
            tokenizer_config_path,
        })
    }

    pub fn encode(
        &self,
        transcript: &NormalizedTranscript,
        vocab: &VocabularyMapping,
    ) -> Vec<usize> {
        self.tokenizer.encode(transcript, vocab)
    }

    pub fn decode(&self, ids: &[usize], vocab: &VocabularyMapping) -> String {
        self.tokenizer.decode(ids, vocab)
    }

    pub fn vocab_path(&self) -> &Path {
        &self.config.vocab_path
    }
}
