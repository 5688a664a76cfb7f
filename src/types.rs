/// One raw transcript, as read from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Transcript {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Transcript {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A transcript after punctuation stripping and lowercasing.
///
/// Produced by a [`Normalizer`](crate::pipeline::traits::Normalizer); `new`
/// takes text the caller has already normalized and does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedTranscript {
    text: String,
}

impl NormalizedTranscript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

impl std::fmt::Display for NormalizedTranscript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
