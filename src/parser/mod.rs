//! OCR text parsing into card identity fields

mod card_parser;
mod vocabulary;

pub use card_parser::{CardTextParser, ParsedCardText};
pub use vocabulary::ParserVocabulary;
