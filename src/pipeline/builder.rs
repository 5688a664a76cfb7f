use crate::config::VocabConfig;
use crate::error::VocabError;
use crate::pipeline::defaults::{CtcCharTokenizer, PunctuationNormalizer};
use crate::pipeline::runtime::{VocabularyPipeline, VocabularyPipelineParts};
use crate::pipeline::traits::{Normalizer, Tokenizer};

pub struct VocabularyPipelineBuilder {
    config: VocabConfig,
    normalizer: Option<Box<dyn Normalizer>>,
    tokenizer: Option<Box<dyn Tokenizer>>,
}

impl VocabularyPipelineBuilder {
    pub fn new(config: VocabConfig) -> Self {
        Self {
            config,
            normalizer: None,
            tokenizer: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn build(self) -> Result<VocabularyPipeline, VocabError> {
        self.config.validate()?;
        if self.config.vocab_path.as_os_str().is_empty()
            || self.config.tokenizer_config_path.as_os_str().is_empty()
        {
            return Err(VocabError::invalid_input("output paths must be non-empty"));
        }
        if self.config.vocab_path == self.config.tokenizer_config_path {
            return Err(VocabError::invalid_input(
                "vocab and tokenizer config must be written to different paths",
            ));
        }

        let normalizer = match self.normalizer {
            Some(normalizer) => normalizer,
            None => Box::new(PunctuationNormalizer::new(self.config.ignored_chars.clone())),
        };

        Ok(VocabularyPipeline::from_parts(VocabularyPipelineParts {
            config: self.config,
            normalizer,
            tokenizer: self.tokenizer.unwrap_or_else(|| Box::new(CtcCharTokenizer)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::SpecialTokens;
    use crate::types::{NormalizedTranscript, Transcript};

    use super::*;

    struct UppercaseNormalizer;

    impl Normalizer for UppercaseNormalizer {
        fn normalize(&self, transcript: &Transcript) -> NormalizedTranscript {
            NormalizedTranscript::new(transcript.as_str().to_uppercase())
        }
    }

    #[test]
    fn builder_defaults_to_punctuation_normalizer() {
        let builder = VocabularyPipelineBuilder::new(VocabConfig::default());
        assert!(builder.normalizer.is_none());
        assert!(builder.tokenizer.is_none());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn builder_normalizer_can_be_overridden() {
        let pipeline = VocabularyPipelineBuilder::new(VocabConfig::default())
            .with_normalizer(Box::new(UppercaseNormalizer))
            .build()
            .expect("build should succeed");
        let corpus = [Transcript::from("ab")];
        let prepared = pipeline.prepare(&[&corpus[..]]).expect("prepare");
        assert_eq!(prepared.vocab.id_of("A"), Some(0));
        assert_eq!(prepared.vocab.id_of("a"), None);
    }

    #[test]
    fn build_fails_on_invalid_special_tokens() {
        let config = VocabConfig {
            special_tokens: SpecialTokens {
                word_delimiter: String::new(),
                ..SpecialTokens::default()
            },
            ..VocabConfig::default()
        };
        assert!(VocabularyPipelineBuilder::new(config).build().is_err());
    }

    #[test]
    fn build_fails_when_outputs_collide() {
        let config = VocabConfig {
            tokenizer_config_path: PathBuf::from("vocab.json"),
            ..VocabConfig::default()
        };
        let err = VocabularyPipelineBuilder::new(config)
            .build()
            .err()
            .expect("colliding paths");
        assert!(matches!(err, VocabError::InvalidInput { .. }));
    }
}
