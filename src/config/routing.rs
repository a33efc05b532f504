// src/config/routing.rs
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

pub const DEFAULT_PRIORITY: &str = "normal";

/// On-disk shape of the routing document: everything lives under `routing`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutingDocument {
    #[serde(default)]
    pub routing: BTreeMap<String, RouteConfig>,
}

/// Where alerts of one type go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    /// Send to the Telegram chat.
    #[serde(default, deserialize_with = "boolish")]
    pub telegram: bool,
    /// Discord channel identifier, e.g. "stock" or "events".
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

impl RouteConfig {
    /// Configured priority, or "normal".
    pub fn priority(&self) -> &str {
        self.priority.as_deref().unwrap_or(DEFAULT_PRIORITY)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Boolish {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// Accept `true`, `1`, `"yes"`, `"on"`... as well as real booleans.
fn boolish<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Boolish::deserialize(d)? {
        Boolish::Bool(b) => b,
        Boolish::Int(n) => n != 0,
        Boolish::Str(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1"
        ),
    })
}
