pub mod normalizer;
pub mod tokenization;
