// src/registry.rs
//! Ordered collection of validated sources.
//!
//! Built with partial success: each record is validated on its own, good
//! ones are kept in document order, bad ones are reported as [`SkippedSource`].

use serde_json::Value;
use tracing::warn;

use crate::error::ValidationError;
use crate::source::{Source, SourceKind, SourceRecord};

/// A sources-document entry that did not make it into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    /// 0-based position in the document.
    pub index: usize,
    /// Name, when the record had a readable one.
    pub name: Option<String>,
    pub error: ValidationError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Validate raw document entries one by one. Never fails as a whole.
    pub fn from_entries(entries: Vec<Value>) -> (Self, Vec<SkippedSource>) {
        let mut sources = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string);

            let built = serde_json::from_value::<SourceRecord>(entry)
                .map_err(|e| ValidationError::Malformed(e.to_string()))
                .and_then(Source::from_record);

            match built {
                Ok(src) => sources.push(src),
                Err(error) => {
                    warn!(
                        target: "config",
                        index,
                        name = name.as_deref().unwrap_or("<unnamed>"),
                        %error,
                        "skipping invalid source"
                    );
                    skipped.push(SkippedSource { index, name, error });
                }
            }
        }

        (Self { sources }, skipped)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }

    pub fn as_slice(&self) -> &[Source] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn enabled(&self) -> Vec<&Source> {
        self.sources.iter().filter(|s| s.enabled()).collect()
    }

    /// First source with this exact name. Duplicates are allowed; later
    /// entries are shadowed.
    pub fn by_name(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name() == name)
    }

    pub fn by_kind(&self, kind: SourceKind) -> Vec<&Source> {
        self.sources.iter().filter(|s| s.kind() == kind).collect()
    }
}

impl<'a> IntoIterator for &'a SourceRegistry {
    type Item = &'a Source;
    type IntoIter = std::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
