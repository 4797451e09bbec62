//! Arune survey intake, scoring, and report generation.
//!
//! The analyzer and catalog are pure; persistence and transport stay behind
//! the [`repository::SessionStore`] seam so the engine can be exercised in
//! isolation.

pub mod access;
pub mod analysis;
pub mod catalog;
pub mod domain;
pub mod repository;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisStamper, AnalyzerConfig, AnimalType, AruneReport, BandThresholds, CategoryScores,
    LifeClock, LifePhase, ProfileAnalyzer, RawAnalysis, Recommendations, SystemStamper,
};
pub use catalog::{AnswerOption, QuestionDefinition, QuestionScore};
pub use domain::{
    CallerIdentity, Gender, MaritalStatus, PersonalInfo, SessionId, SessionStatus, SurveyAnswers,
    SurveyState, SurveySubmission, UserId, UserRole,
};
pub use repository::{SessionRecord, SessionStore, StoreError};
pub use service::{SurveyService, SurveyServiceError};
pub use views::{ReportSummary, SurveyReceipt, SurveySummary};
