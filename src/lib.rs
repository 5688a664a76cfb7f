pub mod config;
pub mod error;
pub mod pipeline;
pub mod text;
pub mod types;
pub mod vocab;

pub use config::{SpecialTokens, TokenizerConfig, VocabConfig, DEFAULT_IGNORED_CHARS};
pub use error::VocabError;
pub use pipeline::builder::VocabularyPipelineBuilder;
pub use pipeline::runtime::{PersistedPaths, PreparedVocabulary, VocabularyPipeline};
pub use pipeline::traits::{Normalizer, Tokenizer};
pub use text::normalizer::normalize;
pub use text::tokenization::{ctc_decode, encode};
pub use types::{NormalizedTranscript, Transcript};
pub use vocab::persist::{load_tokenizer_config, load_vocab, save_tokenizer_config, save_vocab};
pub use vocab::{build_vocabulary, build_vocabulary_with, CharacterSet, VocabularyMapping};
