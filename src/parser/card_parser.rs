//! Heuristic extraction of card identity fields from raw OCR text.
//!
//! Parsing never fails: fields that cannot be recognised are left as `None`
//! and callers decide whether that is acceptable.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;

use super::ParserVocabulary;
use crate::models::CardIdentity;

/// Card names sit near the top of the card
const NAME_SCAN_LINES: usize = 10;
const MIN_NAME_LEN: usize = 3;

lazy_static! {
    /// Title-case words separated by whitespace, e.g. "Mr Mime"
    static ref NAME_SHAPE: Regex = Regex::new(r"^[A-Z][a-z]+(\s+[A-Z][a-z]+)*$").unwrap();
    /// Collector number such as "4/102"
    static ref CARD_NUMBER: Regex = Regex::new(r"\d+/\d+").unwrap();
}

/// Best-effort parse of OCR text; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCardText {
    pub name: Option<String>,
    pub set: Option<String>,
    pub number: Option<String>,
    pub rarity: Option<String>,
}

impl ParsedCardText {
    /// Converts into a [`CardIdentity`] when a name was recognised
    pub fn into_identity(self) -> Option<CardIdentity> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(CardIdentity {
            name,
            set: self.set,
            number: self.number,
            rarity: self.rarity,
        })
    }
}

/// Parser for card text driven by an ordered [`ParserVocabulary`]
#[derive(Debug, Clone, Default)]
pub struct CardTextParser {
    vocabulary: ParserVocabulary,
}

impl CardTextParser {
    pub fn new(vocabulary: ParserVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &ParserVocabulary {
        &self.vocabulary
    }

    /// Runs all field extractors over the text
    pub fn parse(&self, text: &str) -> ParsedCardText {
        let (set, number) = self.parse_set_info(text);
        let parsed = ParsedCardText {
            name: self.parse_name(text),
            set,
            number,
            rarity: self.parse_rarity(text),
        };
        debug!("Parsed card text: {:?}", parsed);
        parsed
    }

    /// Returns the first title-case line among the first lines of the text.
    ///
    /// Lines that are too short or contain a stoplist entry are skipped
    /// before their shape is checked.
    pub fn parse_name(&self, text: &str) -> Option<String> {
        text.split('\n')
            .take(NAME_SCAN_LINES)
            .map(str::trim)
            .filter(|line| line.chars().count() >= MIN_NAME_LEN)
            .filter(|line| !self.is_boilerplate(line))
            .find(|line| NAME_SHAPE.is_match(line))
            .map(String::from)
    }

    /// Returns `(set, number)` found anywhere in the text
    pub fn parse_set_info(&self, text: &str) -> (Option<String>, Option<String>) {
        let number = CARD_NUMBER.find(text).map(|m| m.as_str().to_string());
        let set = first_listed_in(&self.vocabulary.known_sets, text);
        (set, number)
    }

    pub fn parse_rarity(&self, text: &str) -> Option<String> {
        first_listed_in(&self.vocabulary.known_rarities, text)
    }

    fn is_boilerplate(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.vocabulary
            .name_stoplist
            .iter()
            .any(|stop| lower.contains(stop.as_str()))
    }
}

/// First candidate (by list order) occurring case-insensitively in the text,
/// returned with the list's own capitalization
fn first_listed_in(candidates: &[String], text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    candidates
        .iter()
        .find(|candidate| lower.contains(&candidate.to_lowercase()))
        .cloned()
}

#[cfg(test)]
#[path = "card_parser_tests.rs"]
mod tests;
