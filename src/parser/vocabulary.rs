//! Ordered word lists driving the card text parser.
//!
//! Order matters: sets and rarities are matched by list position, not by
//! where they appear in the text.

/// Substrings (lowercase) that mark a line as card boilerplate rather than a name
const NAME_STOPLIST: &[&str] = &["hp", "©", "pokemon", "length"];

/// Known set names in match priority order
const KNOWN_SETS: &[&str] = &[
    "Base Set",
    "Jungle",
    "Fossil",
    "Team Rocket",
    "Gym Heroes",
    "Gym Challenge",
    "Neo Genesis",
    "Sword & Shield",
    "Vivid Voltage",
    "Evolving Skies",
    "Brilliant Stars",
    "Astral Radiance",
    "Lost Origin",
    "Silver Tempest",
    "Crown Zenith",
    "Paldea Evolved",
    "Obsidian Flames",
    "151",
    "Paradox Rift",
];

/// Known rarity labels in match priority order.
///
/// Compound labels precede the labels they contain ("Holo Rare" before
/// "Rare", "Uncommon" before "Common") so the more specific one wins.
const KNOWN_RARITIES: &[&str] = &[
    "Holo Rare",
    "Ultra Rare",
    "Secret Rare",
    "Rainbow Rare",
    "Uncommon",
    "Common",
    "Rare",
    "Full Art",
    "VMAX",
    "VSTAR",
    "GX",
    "V",
    "ex",
];

/// Word lists used by [`CardTextParser`](super::CardTextParser)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserVocabulary {
    pub name_stoplist: Vec<String>,
    pub known_sets: Vec<String>,
    pub known_rarities: Vec<String>,
}

impl ParserVocabulary {
    pub fn new(
        name_stoplist: Vec<String>,
        known_sets: Vec<String>,
        known_rarities: Vec<String>,
    ) -> Self {
        Self {
            // Stoplist is compared against lowercased lines
            name_stoplist: name_stoplist.into_iter().map(|s| s.to_lowercase()).collect(),
            known_sets,
            known_rarities,
        }
    }
}

impl Default for ParserVocabulary {
    fn default() -> Self {
        let owned =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self::new(owned(NAME_STOPLIST), owned(KNOWN_SETS), owned(KNOWN_RARITIES))
    }
}
