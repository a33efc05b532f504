// src/config/keywords.rs
//! Allowlist / blocklist keyword filter.
//!
//! Matching is plain case-insensitive substring containment. No tokenizing,
//! no word boundaries: "etb" matches inside "Obsidian Flames ETB" and also
//! inside "betbox".

use serde::Deserialize;

/// On-disk shape of the keywords document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordsDocument {
    #[serde(default)]
    pub allowlist: Vec<String>,
    #[serde(default)]
    pub blocklist: Vec<String>,
}

/// Lower-cased keyword sets, ready for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFilter {
    allowlist: Vec<String>,
    blocklist: Vec<String>,
}

impl KeywordFilter {
    pub fn new<A, B>(allowlist: A, blocklist: B) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self {
            allowlist: lowercase_all(allowlist),
            blocklist: lowercase_all(blocklist),
        }
    }

    pub fn allowlist(&self) -> &[String] {
        &self.allowlist
    }

    pub fn blocklist(&self) -> &[String] {
        &self.blocklist
    }

    /// Blocklist is a veto and is checked first; then any allowlist hit
    /// accepts; anything else is rejected.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();

        if self.blocklist.iter().any(|kw| text.contains(kw.as_str())) {
            return false;
        }
        self.allowlist.iter().any(|kw| text.contains(kw.as_str()))
    }
}

impl From<KeywordsDocument> for KeywordFilter {
    fn from(doc: KeywordsDocument) -> Self {
        KeywordFilter::new(doc.allowlist, doc.blocklist)
    }
}

fn lowercase_all<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items.into_iter().map(|s| s.as_ref().to_lowercase()).collect()
}
