use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::info;

use super::access;
use super::analysis::{AnalyzerConfig, AruneReport, ProfileAnalyzer};
use super::domain::{CallerIdentity, SessionId, SurveyState, SurveySubmission, UserRole};
use super::repository::{SessionRecord, SessionStore, StoreError};
use super::views::{ReportSummary, SurveyReceipt, SurveySummary};

/// Birth years older than this are rejected before analysis.
const EARLIEST_BIRTH_YEAR: i32 = 1900;

/// Service composing the session store with the profile analyzer: survey
/// submission, report generation, and the participant-scoped read flows.
pub struct SurveyService<S> {
    store: Arc<S>,
    analyzer: Arc<ProfileAnalyzer>,
}

impl<S> SurveyService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, config: AnalyzerConfig) -> Self {
        Self::with_analyzer(store, ProfileAnalyzer::new(config))
    }

    pub fn with_analyzer(store: Arc<S>, analyzer: ProfileAnalyzer) -> Self {
        Self {
            store,
            analyzer: Arc::new(analyzer),
        }
    }

    /// Record a completed survey on a session.
    pub fn submit_survey(
        &self,
        session_id: &SessionId,
        caller: &CallerIdentity,
        submission: SurveySubmission,
    ) -> Result<SurveyReceipt, SurveyServiceError> {
        if submission.answers.is_empty() {
            return Err(SurveyServiceError::EmptyAnswers);
        }

        let mut record = self.fetch_record(session_id)?;
        if !access::can_submit_survey(&record, caller) {
            return Err(SurveyServiceError::Forbidden);
        }

        let completed_at = Utc::now();
        record.survey = SurveyState {
            completed: true,
            completed_at: Some(completed_at),
            answers: submission.answers,
            personal_info: Some(submission.personal_info),
        };
        self.store.update(record)?;

        info!(session_id = %session_id.0, "arune survey recorded");

        Ok(SurveyReceipt {
            session_id: session_id.clone(),
            completed: true,
            completed_at,
        })
    }

    /// Completed survey state for a session.
    pub fn survey_status(
        &self,
        session_id: &SessionId,
        caller: &CallerIdentity,
    ) -> Result<SurveyState, SurveyServiceError> {
        let record = self.fetch_record(session_id)?;
        if !access::can_view_details(&record, caller) {
            return Err(SurveyServiceError::Forbidden);
        }
        if !record.survey.completed {
            return Err(SurveyServiceError::SurveyIncomplete);
        }
        Ok(record.survey)
    }

    /// Run the analyzer over a completed survey and persist the report on
    /// the session. Regeneration is allowed and yields a fresh analysis id;
    /// prior reports are overwritten, never versioned here.
    pub fn generate_report(
        &self,
        session_id: &SessionId,
        caller: &CallerIdentity,
    ) -> Result<AruneReport, SurveyServiceError> {
        let mut record = self.fetch_record(session_id)?;
        if !access::can_submit_survey(&record, caller) {
            return Err(SurveyServiceError::Forbidden);
        }
        if !record.survey.completed {
            return Err(SurveyServiceError::SurveyIncomplete);
        }
        let personal_info = record
            .survey
            .personal_info
            .clone()
            .ok_or(SurveyServiceError::SurveyIncomplete)?;

        // The analyzer takes birth_year on trust; plausibility is checked here.
        let birth_year = personal_info.birth_year;
        if birth_year < EARLIEST_BIRTH_YEAR || birth_year > Utc::now().year() {
            return Err(SurveyServiceError::ImplausibleBirthYear(birth_year));
        }

        let submission = SurveySubmission {
            answers: record.survey.answers.clone(),
            personal_info,
        };
        let report = self.analyzer.analyze(&submission);

        record.report = Some(report.clone());
        self.store.update(record)?;

        info!(
            session_id = %session_id.0,
            analysis_id = %report.analysis_id,
            animal_type = %report.animal_type,
            "arune report generated"
        );

        Ok(report)
    }

    /// Stored report for a session.
    pub fn fetch_report(
        &self,
        session_id: &SessionId,
        caller: &CallerIdentity,
    ) -> Result<AruneReport, SurveyServiceError> {
        let record = self.fetch_record(session_id)?;
        if !access::can_view_details(&record, caller) {
            return Err(SurveyServiceError::Forbidden);
        }
        record
            .report
            .ok_or(SurveyServiceError::ReportNotGenerated)
    }

    /// Completed surveys across the caller's sessions, newest schedule first.
    pub fn list_surveys(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<SurveySummary>, SurveyServiceError> {
        let records = self.participant_records(caller)?;
        Ok(records.iter().filter_map(SurveySummary::from_record).collect())
    }

    /// Generated reports across the caller's sessions, newest schedule first.
    pub fn list_reports(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<ReportSummary>, SurveyServiceError> {
        let records = self.participant_records(caller)?;
        Ok(records.iter().filter_map(ReportSummary::from_record).collect())
    }

    fn fetch_record(&self, session_id: &SessionId) -> Result<SessionRecord, SurveyServiceError> {
        self.store
            .fetch(session_id)?
            .ok_or(SurveyServiceError::SessionNotFound)
    }

    /// Advisors see the sessions they advise; everyone else their own.
    fn participant_records(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<SessionRecord>, SurveyServiceError> {
        let mut records = match caller.role {
            UserRole::FinancialAdvisor => self.store.by_advisor(&caller.user_id)?,
            _ => self.store.by_client(&caller.user_id)?,
        };
        records.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
        Ok(records)
    }
}

/// Error raised by the survey service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error("counseling session not found")]
    SessionNotFound,
    #[error("caller is not allowed to access this session")]
    Forbidden,
    #[error("survey answers must not be empty")]
    EmptyAnswers,
    #[error("survey has not been completed for this session")]
    SurveyIncomplete,
    #[error("no report has been generated for this session")]
    ReportNotGenerated,
    #[error("birth year {0} is outside the plausible range")]
    ImplausibleBirthYear(i32),
    #[error(transparent)]
    Store(#[from] StoreError),
}
