use serde::{Deserialize, Serialize};

use super::config::AnalyzerConfig;

/// Age rendered as a fraction of the configured life expectancy, mapped onto
/// a 24-hour clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeClock {
    pub age: i32,
    pub time_string: String,
    pub phase: LifePhase,
    pub percentage_complete: u8,
}

/// Ordered life-stage bands covering every age from zero up with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifePhase {
    #[serde(rename = "청소년기")]
    Adolescence,
    #[serde(rename = "청년기")]
    Youth,
    #[serde(rename = "장년기 초반")]
    EarlyAdulthood,
    #[serde(rename = "중년기 진입")]
    MidlifeEntry,
    #[serde(rename = "중년기")]
    Midlife,
    #[serde(rename = "노년기 초반")]
    EarlySenior,
    #[serde(rename = "노년기")]
    Senior,
}

impl LifePhase {
    pub(crate) fn for_age(age: i32) -> Self {
        if age < 20 {
            LifePhase::Adolescence
        } else if age < 30 {
            LifePhase::Youth
        } else if age < 40 {
            LifePhase::EarlyAdulthood
        } else if age < 50 {
            LifePhase::MidlifeEntry
        } else if age < 60 {
            LifePhase::Midlife
        } else if age < 70 {
            LifePhase::EarlySenior
        } else {
            LifePhase::Senior
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LifePhase::Adolescence => "청소년기",
            LifePhase::Youth => "청년기",
            LifePhase::EarlyAdulthood => "장년기 초반",
            LifePhase::MidlifeEntry => "중년기 진입",
            LifePhase::Midlife => "중년기",
            LifePhase::EarlySenior => "노년기 초반",
            LifePhase::Senior => "노년기",
        }
    }
}

/// Recomputed fresh on every analysis; nothing here is cached or ticked.
pub(crate) fn life_clock(birth_year: i32, current_year: i32, config: &AnalyzerConfig) -> LifeClock {
    let age = current_year - birth_year;
    let progress = f64::from(age) / f64::from(config.life_expectancy);

    let percentage_complete = (progress * 100.0).round().clamp(0.0, 100.0) as u8;

    let elapsed_minutes = (progress * 24.0 * 60.0).round() as i64;
    let clock_minutes = elapsed_minutes + i64::from(config.clock_anchor_hour) * 60;
    let hour_of_day = (clock_minutes.div_euclid(60)).rem_euclid(24);
    let minute = clock_minutes.rem_euclid(60);

    let period = if hour_of_day < 12 { "오전" } else { "오후" };
    let display_hour = match hour_of_day {
        0 => 12,
        hour if hour > 12 => hour - 12,
        hour => hour,
    };
    let time_string = format!("{period} {display_hour}시 {minute}분");

    LifeClock {
        age,
        time_string,
        phase: LifePhase::for_age(age),
        percentage_complete,
    }
}
