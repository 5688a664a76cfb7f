use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::{SpecialTokens, TokenizerConfig};
use crate::error::VocabError;
use crate::vocab::mapping::VocabularyMapping;

pub fn to_json_string(mapping: &VocabularyMapping) -> Result<String, VocabError> {
    serde_json::to_string_pretty(mapping).map_err(|e| VocabError::json("serialize vocab.json", e))
}

pub fn from_json_str(
    data: &str,
    special_tokens: &SpecialTokens,
) -> Result<VocabularyMapping, VocabError> {
    let raw: HashMap<String, usize> =
        serde_json::from_str(data).map_err(|e| VocabError::json("parse vocab.json", e))?;
    VocabularyMapping::from_index_map(raw, special_tokens.clone())
}

pub fn save_vocab(path: &Path, mapping: &VocabularyMapping) -> Result<(), VocabError> {
    write_json(path, mapping)?;
    tracing::info!(
        path = %path.display(),
        size = mapping.len(),
        "vocab: wrote vocabulary"
    );
    Ok(())
}

pub fn load_vocab(
    path: &Path,
    special_tokens: &SpecialTokens,
) -> Result<VocabularyMapping, VocabError> {
    let data = fs::read_to_string(path).map_err(|e| VocabError::io("read vocab.json", e))?;
    from_json_str(&data, special_tokens)
}

pub fn save_tokenizer_config(path: &Path, config: &TokenizerConfig) -> Result<(), VocabError> {
    write_json(path, config)?;
    tracing::info!(path = %path.display(), "vocab: wrote tokenizer config");
    Ok(())
}

pub fn load_tokenizer_config(path: &Path) -> Result<TokenizerConfig, VocabError> {
    let data = fs::read_to_string(path)
        .map_err(|e| VocabError::io("read tokenizer_config.json", e))?;
    serde_json::from_str(&data).map_err(|e| VocabError::json("parse tokenizer_config.json", e))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), VocabError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| VocabError::io("create output directory", e))?;
    }
    let mut file = File::create(path).map_err(|e| VocabError::io("create output file", e))?;
    serde_json::to_writer_pretty(&mut file, value)
        .map_err(|e| VocabError::json("serialize output file", e))?;
    file.write_all(b"\n")
        .map_err(|e| VocabError::io("finalize output file", e))?;
    Ok(())
}
