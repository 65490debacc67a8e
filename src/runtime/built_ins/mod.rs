/// The native words of the language.
pub mod base_words;

/// The standard library written in gloom.
pub mod bootstrap;
