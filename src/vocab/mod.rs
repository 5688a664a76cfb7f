pub mod builder;
pub mod mapping;
pub mod persist;

pub use builder::{build_from_character_set, build_vocabulary, build_vocabulary_with};
pub use mapping::{CharacterSet, VocabularyMapping};
