use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use wav2vec2_vocab::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One transcript per line.
    Text,
    /// One JSON object per line; the transcript is read from `--text-field`.
    Jsonl,
}

pub fn read_transcripts(
    path: &Path,
    format: InputFormat,
    text_field: &str,
) -> Result<Vec<Transcript>, String> {
    let file = File::open(path)
        .map_err(|err| format!("Failed to open transcripts '{}': {err}", path.display()))?;
    let reader = BufReader::new(file);

    let mut transcripts = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        match format {
            InputFormat::Text => transcripts.push(Transcript::from(line)),
            InputFormat::Jsonl => {
                if line.trim().is_empty() {
                    continue;
                }
                transcripts.push(parse_jsonl_record(&line, text_field).map_err(|err| {
                    format!("{}:{}: {err}", path.display(), line_no + 1)
                })?);
            }
        }
    }
    Ok(transcripts)
}

fn parse_jsonl_record(line: &str, text_field: &str) -> Result<Transcript, String> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|err| format!("invalid JSON: {err}"))?;
    value
        .get(text_field)
        .and_then(serde_json::Value::as_str)
        .map(Transcript::from)
        .ok_or_else(|| format!("missing string field '{text_field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_record_reads_configured_field() {
        let t = parse_jsonl_record(r#"{"id": 3, "text": "Hi there"}"#, "text").unwrap();
        assert_eq!(t.as_str(), "Hi there");
    }

    #[test]
    fn jsonl_record_missing_field() {
        let err = parse_jsonl_record(r#"{"sentence": "x"}"#, "text").unwrap_err();
        assert!(err.contains("'text'"));
    }

    #[test]
    fn jsonl_record_non_string_field() {
        assert!(parse_jsonl_record(r#"{"text": 5}"#, "text").is_err());
    }
}
