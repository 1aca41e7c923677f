pub mod language;
pub mod segment;
pub mod token;

pub use language::{LanguageTag, UnknownLanguage};
pub use segment::{segment, segment_with_dictionary, CHINESE_COMMON_WORDS};
pub use token::{Token, TokenSequence};
