//! Tests for the card text parser

use super::*;

fn parser() -> CardTextParser {
    CardTextParser::default()
}

// ── parse_name ───────────────────────────────────────────────────────

#[test]
fn name_is_first_title_case_line() {
    let text = "Charizard\nHP 120\n4/102\nHolo Rare";
    assert_eq!(parser().parse_name(text).as_deref(), Some("Charizard"));
}

#[test]
fn name_accepts_multiple_words() {
    let text = "Basic\nDark Charizard\nHP 80";
    // "Basic" matches too and comes first
    assert_eq!(parser().parse_name(text).as_deref(), Some("Basic"));

    let text = "4/82\nDark Charizard\nHP 80";
    assert_eq!(parser().parse_name(text).as_deref(), Some("Dark Charizard"));
}

#[test]
fn name_skips_short_lines() {
    let text = "Ab\nMew\nHP 60";
    assert_eq!(parser().parse_name(text).as_deref(), Some("Mew"));
}

#[test]
fn name_skips_stoplist_lines_before_shape_check() {
    // Both lines would match the name shape but contain stoplist words
    let text = "Weight Length\nPokemon Center\nDrowzee";
    assert_eq!(parser().parse_name(text).as_deref(), Some("Drowzee"));
}

#[test]
fn name_rejects_digits_and_punctuation() {
    let text = "Pikachu V\nRaichu-GX\nPikachu 25\nlowercase name";
    assert_eq!(parser().parse_name(text), None);
}

#[test]
fn name_trims_surrounding_whitespace() {
    let text = "   Bulbasaur  \r\nHP 40";
    assert_eq!(parser().parse_name(text).as_deref(), Some("Bulbasaur"));
}

#[test]
fn name_only_scans_first_ten_lines() {
    let mut lines: Vec<&str> = vec!["123"; 10];
    lines.push("Squirtle");
    let text = lines.join("\n");
    assert_eq!(parser().parse_name(&text), None);

    let mut lines: Vec<&str> = vec!["123"; 9];
    lines.push("Squirtle");
    let text = lines.join("\n");
    assert_eq!(parser().parse_name(&text).as_deref(), Some("Squirtle"));
}

#[test]
fn name_absent_for_empty_text() {
    assert_eq!(parser().parse_name(""), None);
}

// ── parse_set_info ───────────────────────────────────────────────────

#[test]
fn number_first_match_wins() {
    let text = "Charizard\n4/102\nsomething 25/100";
    let (_, number) = parser().parse_set_info(text);
    assert_eq!(number.as_deref(), Some("4/102"));
}

#[test]
fn number_matches_inside_longer_token() {
    let text = "Illus. Foo  No.058/198ABC";
    let (_, number) = parser().parse_set_info(text);
    assert_eq!(number.as_deref(), Some("058/198"));
}

#[test]
fn set_uses_canonical_capitalization() {
    for text in ["vivid voltage", "VIVID VOLTAGE", "ViViD vOlTaGe"] {
        let (set, _) = parser().parse_set_info(text);
        assert_eq!(set.as_deref(), Some("Vivid Voltage"));
    }
}

#[test]
fn set_priority_follows_list_order() {
    // Jungle appears later in the text but earlier in the list
    let text = "Fossil reprint\nJungle";
    let (set, _) = parser().parse_set_info(text);
    assert_eq!(set.as_deref(), Some("Jungle"));
}

#[test]
fn set_matches_as_substring() {
    let text = "Vivid Voltage Energy";
    let (set, _) = parser().parse_set_info(text);
    assert_eq!(set.as_deref(), Some("Vivid Voltage"));
}

#[test]
fn set_and_number_absent() {
    let (set, number) = parser().parse_set_info("Charizard\nHP 120");
    assert_eq!(set, None);
    assert_eq!(number, None);
}

// ── parse_rarity ─────────────────────────────────────────────────────

#[test]
fn rarity_prefers_compound_label() {
    assert_eq!(
        parser().parse_rarity("Holo Rare").as_deref(),
        Some("Holo Rare")
    );
    assert_eq!(parser().parse_rarity("UNCOMMON").as_deref(), Some("Uncommon"));
    assert_eq!(parser().parse_rarity("rare").as_deref(), Some("Rare"));
}

#[test]
fn rarity_absent_when_nothing_matches() {
    assert_eq!(parser().parse_rarity("Charizard\nHP 120\n4/102"), None);
}

#[test]
fn custom_vocabulary_order_is_respected() {
    let vocab = ParserVocabulary::new(
        vec![],
        vec![],
        vec!["Rare".to_string(), "Holo Rare".to_string()],
    );
    let parser = CardTextParser::new(vocab);
    assert_eq!(parser.parse_rarity("Holo Rare").as_deref(), Some("Rare"));
}

// ── parse ────────────────────────────────────────────────────────────

#[test]
fn parse_full_card() {
    let parsed = parser().parse("Charizard\nHP 120\n4/102\nHolo Rare");
    assert_eq!(
        parsed,
        ParsedCardText {
            name: Some("Charizard".to_string()),
            set: None,
            number: Some("4/102".to_string()),
            rarity: Some("Holo Rare".to_string()),
        }
    );
}

#[test]
fn into_identity_requires_name() {
    let parsed = ParsedCardText {
        name: None,
        number: Some("4/102".to_string()),
        ..Default::default()
    };
    assert!(parsed.into_identity().is_none());

    let identity = parser()
        .parse("Blastoise\nBase Set 2/102")
        .into_identity()
        .unwrap();
    assert_eq!(identity.name, "Blastoise");
    assert_eq!(identity.set.as_deref(), Some("Base Set"));
    assert_eq!(identity.number.as_deref(), Some("2/102"));
}
