use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::VocabError;

/// Characters stripped from every transcript before vocabulary construction.
pub const DEFAULT_IGNORED_CHARS: [char; 8] = [',', '?', '.', '!', '-', ';', ':', '"'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTokens {
    /// Stands in for the space character.
    pub word_delimiter: String,
    pub unk: String,
    /// Padding token, also the CTC blank.
    pub pad: String,
}

impl SpecialTokens {
    pub const DEFAULT_WORD_DELIMITER: &'static str = "|";
    pub const DEFAULT_UNK: &'static str = "[UNK]";
    pub const DEFAULT_PAD: &'static str = "[PAD]";

    pub(crate) fn validate(&self) -> Result<(), VocabError> {
        let tokens = [&self.word_delimiter, &self.unk, &self.pad];
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(VocabError::invalid_input("reserved tokens must be non-empty"));
        }
        if tokens.iter().any(|t| t.chars().any(char::is_whitespace)) {
            return Err(VocabError::invalid_input(
                "reserved tokens must not contain whitespace",
            ));
        }
        if self.word_delimiter == self.unk
            || self.word_delimiter == self.pad
            || self.unk == self.pad
        {
            return Err(VocabError::invalid_input("reserved tokens must be distinct"));
        }
        Ok(())
    }

    pub(crate) fn is_reserved(&self, symbol: &str) -> bool {
        symbol == self.word_delimiter || symbol == self.unk || symbol == self.pad
    }
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            word_delimiter: Self::DEFAULT_WORD_DELIMITER.to_string(),
            unk: Self::DEFAULT_UNK.to_string(),
            pad: Self::DEFAULT_PAD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabConfig {
    pub vocab_path: PathBuf,
    pub tokenizer_config_path: PathBuf,
    pub special_tokens: SpecialTokens,
    pub ignored_chars: Vec<char>,
}

impl VocabConfig {
    pub const DEFAULT_VOCAB_FILE: &'static str = "vocab.json";
    pub const DEFAULT_TOKENIZER_CONFIG_FILE: &'static str = "tokenizer_config.json";

    pub fn load(path: &Path) -> Result<Self, VocabError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| VocabError::io("read vocab config", e))?;
        serde_json::from_str(&data).map_err(|e| VocabError::json("parse vocab config", e))
    }

    /// Points both output documents at `dir`, keeping the default file names.
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.vocab_path = dir.join(Self::DEFAULT_VOCAB_FILE);
        self.tokenizer_config_path = dir.join(Self::DEFAULT_TOKENIZER_CONFIG_FILE);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), VocabError> {
        self.special_tokens.validate()?;
        if let Some(c) = self.ignored_chars.iter().find(|c| c.is_whitespace()) {
            return Err(VocabError::invalid_input(format!(
                "whitespace {c:?} cannot be an ignored character"
            )));
        }
        Ok(())
    }

    pub fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig {
            unk_token: self.special_tokens.unk.clone(),
            pad_token: self.special_tokens.pad.clone(),
            word_delimiter_token: self.special_tokens.word_delimiter.clone(),
            do_lower_case: false,
        }
    }
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            vocab_path: PathBuf::from(Self::DEFAULT_VOCAB_FILE),
            tokenizer_config_path: PathBuf::from(Self::DEFAULT_TOKENIZER_CONFIG_FILE),
            special_tokens: SpecialTokens::default(),
            ignored_chars: DEFAULT_IGNORED_CHARS.to_vec(),
        }
    }
}

/// Reserved-token settings persisted next to `vocab.json`.
///
/// `do_lower_case` stays false: transcripts are already lowercased by the
/// normalizer before they reach the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub unk_token: String,
    pub pad_token: String,
    pub word_delimiter_token: String,
    #[serde(default)]
    pub do_lower_case: bool,
}

impl TokenizerConfig {
    pub fn special_tokens(&self) -> SpecialTokens {
        SpecialTokens {
            word_delimiter: self.word_delimiter_token.clone(),
            unk: self.unk_token.clone(),
            pad: self.pad_token.clone(),
        }
    }
}
