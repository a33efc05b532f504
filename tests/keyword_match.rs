// tests/keyword_match.rs
use std::fs;

use tcg_sentinel::{Config, KeywordFilter, Settings};

fn config_with_keywords(keywords: &str) -> Config {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("sources.toml"), "").unwrap();
    fs::write(tmp.path().join("keywords.toml"), keywords).unwrap();
    fs::write(tmp.path().join("routing.toml"), "").unwrap();
    fs::write(tmp.path().join("thresholds.toml"), "").unwrap();
    Config::load_with(Some(tmp.path()), Settings::default()).unwrap()
}

#[test]
fn blocklist_beats_allowlist() {
    let cfg = config_with_keywords("allowlist = [\"booster\"]\nblocklist = [\"funko\"]");
    assert!(!cfg.has_keyword_match("Funko Booster Box"));
    assert!(cfg.has_keyword_match("Booster Pack"));
}

#[test]
fn allowlist_phrase_matches() {
    let cfg = config_with_keywords("allowlist = [\"booster box\"]");
    assert!(cfg.has_keyword_match("Pokemon TCG Booster Box"));
    assert!(!cfg.has_keyword_match("Magic The Gathering Cards"));
}

#[test]
fn matching_ignores_case_on_both_sides() {
    let cfg = config_with_keywords("allowlist = [\"ETB\"]\nblocklist = [\"PLUSH\"]");
    assert_eq!(cfg.keywords().allowlist(), ["etb"]);
    assert!(cfg.has_keyword_match("Obsidian Flames etb"));
    assert!(cfg.has_keyword_match("Obsidian Flames ETB"));
    assert!(!cfg.has_keyword_match("Pikachu Plush ETB"));
}

#[test]
fn missing_lists_reject_everything() {
    let cfg = config_with_keywords("");
    assert!(!cfg.has_keyword_match("Pokemon TCG Booster Box"));
}

#[test]
fn bundled_examples() {
    let f = KeywordFilter::new(
        ["booster box", "elite trainer box", "etb"],
        ["yu-gi-oh", "funko"],
    );
    let cases = [
        ("Pokemon TCG Booster Box", true),
        ("Elite Trainer Box Scarlet Violet", true),
        ("Yu-Gi-Oh Booster Pack", false),
        ("Magic The Gathering Cards", false),
        ("Obsidian Flames ETB", true),
    ];
    for (text, expected) in cases {
        assert_eq!(f.matches(text), expected, "{text}");
    }
}
