use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("corpus contains no characters after normalization")]
    EmptyCorpus,
    #[error("corpus character {symbol:?} collides with a reserved token")]
    ReservedSymbol { symbol: String },
    #[error("invalid vocabulary: {message}")]
    InvalidVocabulary { message: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl VocabError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_vocabulary(message: impl Into<String>) -> Self {
        Self::InvalidVocabulary {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_carries_context() {
        let err = VocabError::io(
            "read vocab.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "I/O error while read vocab.json: missing");
    }

    #[test]
    fn reserved_symbol_message_quotes_symbol() {
        let err = VocabError::ReservedSymbol {
            symbol: "|".to_string(),
        };
        assert!(err.to_string().contains("\"|\""));
    }
}
