use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{SessionId, SessionStatus, UserId};
use super::repository::SessionRecord;

/// Acknowledgement returned after a survey submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReceipt {
    pub session_id: SessionId,
    pub completed: bool,
    pub completed_at: DateTime<Utc>,
}

/// List entry for a completed survey.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub session_id: SessionId,
    pub client: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub scheduled_date: DateTime<Utc>,
    pub status: SessionStatus,
}

impl SurveySummary {
    /// Summarize a record, or `None` when its survey is not completed.
    pub fn from_record(record: &SessionRecord) -> Option<Self> {
        if !record.survey.completed {
            return None;
        }
        Some(Self {
            session_id: record.session_id.clone(),
            client: record.client.clone(),
            advisor: record.advisor.clone(),
            completed_at: record.survey.completed_at,
            scheduled_date: record.scheduled_date,
            status: record.status,
        })
    }
}

/// List entry for a generated report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub session_id: SessionId,
    pub client: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor: Option<UserId>,
    pub analysis_id: String,
    pub generated_at: DateTime<Utc>,
    pub animal_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: SessionStatus,
}

impl ReportSummary {
    /// Summarize a record, or `None` when no report has been generated.
    pub fn from_record(record: &SessionRecord) -> Option<Self> {
        let report = record.report.as_ref()?;
        Some(Self {
            session_id: record.session_id.clone(),
            client: record.client.clone(),
            advisor: record.advisor.clone(),
            analysis_id: report.analysis_id.clone(),
            generated_at: report.generated_at,
            animal_type: report.animal_type.clone(),
            scheduled_date: record.scheduled_date,
            status: record.status,
        })
    }
}
