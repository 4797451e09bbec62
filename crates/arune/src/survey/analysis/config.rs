use serde::{Deserialize, Serialize};

/// Injected constants for the analyzer: life-expectancy horizon, the hour
/// the life clock starts at, and the classification band floors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    pub life_expectancy: u16,
    /// Hour of day (0-23) that maps to 0% of life on the 24h clock. The
    /// report booklet historically rendered from 06:00; the canonical
    /// scoring path anchors at midnight.
    pub clock_anchor_hour: u8,
    pub band_thresholds: BandThresholds,
}

/// Inclusive lower bounds for the total-score bands, ordered high to low.
/// Totals below `conservative` fall into the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub aggressive: u16,
    pub active: u16,
    pub balanced: u16,
    pub conservative: u16,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            life_expectancy: 80,
            clock_anchor_hour: 0,
            band_thresholds: BandThresholds::default(),
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            aggressive: 320,
            active: 280,
            balanced: 240,
            conservative: 200,
        }
    }
}
