// src/config/thresholds.rs
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Thresholds document: cooldowns, price-drop trigger, rate cap, geo filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Thresholds {
    /// Alert type -> minimum seconds between alerts of that type.
    #[serde(default)]
    pub cooldowns: BTreeMap<String, u64>,
    /// Fractional drop (0.0..=1.0) that counts as a price drop.
    #[serde(default)]
    pub price_drop_threshold: f64,
    /// 0 means uncapped.
    #[serde(default)]
    pub max_alerts_per_hour: u32,
    #[serde(default)]
    pub geo_filter: Option<GeoFilter>,
}

impl Thresholds {
    /// Cooldown for `alert_type`; 0 (no cooldown) when not configured.
    pub fn cooldown(&self, alert_type: &str) -> u64 {
        self.cooldowns.get(alert_type).copied().unwrap_or(0)
    }

    /// Keep `price_drop_threshold` inside 0..=1.
    pub(crate) fn sanitize(mut self) -> Self {
        let t = self.price_drop_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            let clamped = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
            warn!(
                target: "config",
                configured = t,
                using = clamped,
                "price_drop_threshold outside 0..=1"
            );
            self.price_drop_threshold = clamped;
        }
        self
    }

    /// A filter that is absent or disabled allows every region.
    pub fn region_allowed(&self, region: &str) -> bool {
        self.geo_filter.as_ref().map_or(true, |g| g.allows(region))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoFilter {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, alias = "allowed_regions")]
    pub allowed_counties: Vec<String>,
}

impl GeoFilter {
    /// Case-insensitive, trimmed exact match against the allowed list.
    pub fn allows(&self, region: &str) -> bool {
        if !self.enabled {
            return true;
        }
        let region = region.trim();
        self.allowed_counties
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(region))
    }
}
