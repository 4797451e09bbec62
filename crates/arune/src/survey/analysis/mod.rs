mod classify;
mod clock;
mod config;
mod recommend;
mod scores;

pub use classify::AnimalType;
pub use clock::{LifeClock, LifePhase};
pub use config::{AnalyzerConfig, BandThresholds};
pub use recommend::Recommendations;
pub use scores::CategoryScores;

#[cfg(test)]
pub(crate) use clock::life_clock;
#[cfg(test)]
pub(crate) use recommend::recommendations;
#[cfg(test)]
pub(crate) use scores::category_scores;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog;
use super::catalog::QuestionScore;
use super::domain::{PersonalInfo, SurveyAnswers, SurveySubmission};

/// Stamps the identity of one analysis run: the generation instant and the
/// report id derived from it. Injectable so tests can pin both.
pub trait AnalysisStamper: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn analysis_id(&self, now: DateTime<Utc>) -> String;
}

/// Default stamper: system clock plus a random base36 suffix. Ids are
/// probabilistically unique; storage enforces strict uniqueness if needed.
pub struct SystemStamper;

const ID_SUFFIX_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl AnalysisStamper for SystemStamper {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn analysis_id(&self, now: DateTime<Utc>) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("ARU-{}-{}", now.timestamp_millis(), suffix).to_uppercase()
    }
}

/// Stateless analyzer turning one survey submission into a full report.
///
/// Aside from the stamped id/timestamp, output is a pure function of the
/// submission and the configured constants; concurrent use needs no
/// coordination.
pub struct ProfileAnalyzer {
    config: AnalyzerConfig,
    stamper: Arc<dyn AnalysisStamper>,
}

impl ProfileAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_stamper(config, Arc::new(SystemStamper))
    }

    pub fn with_stamper(config: AnalyzerConfig, stamper: Arc<dyn AnalysisStamper>) -> Self {
        Self { config, stamper }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a completed survey.
    ///
    /// Missing or malformed answers degrade to neutral defaults rather than
    /// failing. `birth_year` is consumed as-is; plausibility is the caller's
    /// contract.
    pub fn analyze(&self, submission: &SurveySubmission) -> AruneReport {
        let generated_at = self.stamper.now();

        let scores = scores::category_scores(&submission.answers);
        let animal = AnimalType::from_total(scores.total, &self.config.band_thresholds);
        let life_clock = clock::life_clock(
            submission.personal_info.birth_year,
            generated_at.year(),
            &self.config,
        );
        let recommendations = recommend::recommendations(&scores, animal);

        AruneReport {
            analysis_id: self.stamper.analysis_id(generated_at),
            generated_at,
            scores,
            animal_type: animal.type_label(),
            animal_type_description: animal.description().to_string(),
            life_clock,
            recommendations,
            raw_analysis: RawAnalysis {
                detailed_scores: detailed_scores(&submission.answers),
                personal_info: submission.personal_info.clone(),
            },
        }
    }
}

/// Catalog lookups for every submitted answer, retained in the report for
/// transparency. The four category scores never read these.
pub fn detailed_scores(answers: &SurveyAnswers) -> BTreeMap<String, QuestionScore> {
    answers
        .iter()
        .map(|(id, value)| (id.clone(), catalog::score_for(id, *value)))
        .collect()
}

/// The complete analysis result, persisted verbatim on the counseling
/// session and surfaced unchanged through read paths. Append-only: a
/// regeneration produces a whole new report with a fresh id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AruneReport {
    pub analysis_id: String,
    pub generated_at: DateTime<Utc>,
    pub scores: CategoryScores,
    pub animal_type: String,
    pub animal_type_description: String,
    pub life_clock: LifeClock,
    pub recommendations: Recommendations,
    pub raw_analysis: RawAnalysis,
}

/// Debug-grade payload carried inside the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    pub detailed_scores: BTreeMap<String, QuestionScore>,
    pub personal_info: PersonalInfo,
}
