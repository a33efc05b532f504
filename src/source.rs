// src/source.rs
//! Monitored source descriptors.
//!
//! A [`Source`] is validated once on construction and is immutable afterwards.
//! The only behaviour it carries is [`Source::should_poll`], a pure predicate:
//! the caller owns the clock and the last-poll bookkeeping.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Shortest poll interval a source may declare, in seconds.
pub const MIN_POLL_INTERVAL_SECS: u64 = 60;

/// What kind of target a source points at. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    RetailCategory,
    EventList,
    EventVendor,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [
        SourceKind::RetailCategory,
        SourceKind::EventList,
        SourceKind::EventVendor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::RetailCategory => "retail_category",
            SourceKind::EventList => "event_list",
            SourceKind::EventVendor => "event_vendor",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the wire name.
impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Loose, as-written shape of one entry in the sources document.
/// Every field is optional here so that a missing field is reported
/// per record instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub parser_key: Option<String>,
    pub poll_interval: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub enabled: Option<bool>,
    pub description: Option<String>,
}

/// One monitored target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    kind: SourceKind,
    url: String,
    parser_key: String,
    poll_interval: u64,
    tags: Vec<String>,
    enabled: bool,
    description: Option<String>,
}

impl Source {
    /// Validate and build a source. `tags` empty, `enabled` true and no
    /// description unless set through the `with_*` methods.
    pub fn new(
        name: impl Into<String>,
        kind: &str,
        url: impl Into<String>,
        parser_key: impl Into<String>,
        poll_interval: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let url = url.into();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl { name });
        }
        let kind = kind.parse::<SourceKind>().map_err(|kind| ValidationError::InvalidKind {
            name: name.clone(),
            kind,
        })?;
        let poll_interval = u64::try_from(poll_interval)
            .ok()
            .filter(|secs| *secs >= MIN_POLL_INTERVAL_SECS)
            .ok_or_else(|| ValidationError::PollIntervalTooShort {
                name: name.clone(),
                interval: poll_interval,
                min: MIN_POLL_INTERVAL_SECS,
            })?;

        Ok(Self {
            name,
            kind,
            url,
            parser_key: parser_key.into(),
            poll_interval,
            tags: Vec::new(),
            enabled: true,
            description: None,
        })
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Build from a document record. Required fields are checked in
    /// declaration order, so the first missing one is the one reported.
    pub fn from_record(rec: SourceRecord) -> Result<Self, ValidationError> {
        let name = rec.name.ok_or(ValidationError::MissingField("name"))?;
        let kind = rec.kind.ok_or(ValidationError::MissingField("type"))?;
        let url = rec.url.ok_or(ValidationError::MissingField("url"))?;
        let parser_key = rec
            .parser_key
            .ok_or(ValidationError::MissingField("parser_key"))?;
        let poll_interval = rec
            .poll_interval
            .ok_or(ValidationError::MissingField("poll_interval"))?;

        Ok(Self::new(name, &kind, url, parser_key, poll_interval)?
            .with_tags(rec.tags.unwrap_or_default())
            .with_enabled(rec.enabled.unwrap_or(true))
            .with_description(rec.description))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Opaque to this crate; names the collector's parsing strategy.
    pub fn parser_key(&self) -> &str {
        &self.parser_key
    }

    /// Seconds between polls, always >= [`MIN_POLL_INTERVAL_SECS`].
    pub fn poll_interval(&self) -> u64 {
        self.poll_interval
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Is this source due at `now`?
    /// - disabled: never
    /// - never polled: always
    /// - otherwise: once `poll_interval` has fully elapsed (inclusive)
    pub fn should_poll(&self, last_poll: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(last) = last_poll else {
            return true;
        };
        // An interval too large for TimeDelta can never elapse.
        match i64::try_from(self.poll_interval)
            .ok()
            .and_then(TimeDelta::try_seconds)
        {
            Some(interval) => now.signed_duration_since(last) >= interval,
            None => false,
        }
    }
}

impl TryFrom<SourceRecord> for Source {
    type Error = ValidationError;

    fn try_from(rec: SourceRecord) -> Result<Self, Self::Error> {
        Source::from_record(rec)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)?;
        if !self.enabled {
            f.write_str(" [disabled]")?;
        }
        Ok(())
    }
}
