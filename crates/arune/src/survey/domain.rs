use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for counseling sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Identifier wrapper for platform users (employees and advisors alike).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Role of the authenticated caller as resolved by the (external) auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Employee,
    FinancialAdvisor,
    SuperAdmin,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::FinancialAdvisor => "financial-advisor",
            UserRole::SuperAdmin => "super-admin",
        }
    }
}

/// Caller identity handed in by the excluded HTTP/auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub user_id: UserId,
    pub role: UserRole,
}

/// Lifecycle status of a counseling session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::InProgress => "in-progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
            SessionStatus::NoShow => "no-show",
        }
    }
}

/// Gender as collected by the survey intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "남성")]
    Male,
    #[serde(rename = "여성")]
    Female,
    #[serde(rename = "기타")]
    Other,
}

/// Marital status as collected by the survey intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "미혼")]
    Single,
    #[serde(rename = "기혼")]
    Married,
    #[serde(rename = "이혼")]
    Divorced,
    #[serde(rename = "사별")]
    Widowed,
}

/// Respondent metadata attached to a survey. Only `birth_year` feeds the
/// scoring math; the remaining fields ride along into the report's raw
/// analysis payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub birth_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
}

/// Answer map keyed by question id (`"FB01-3"`, `"ST02-14"`, ...) holding the
/// chosen 1-based option value. Absent keys are unanswered; a zero value is
/// treated the same way.
pub type SurveyAnswers = BTreeMap<String, u8>;

/// One completed survey handed to the analyzer: the answer map plus the
/// respondent metadata collected alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub answers: SurveyAnswers,
    pub personal_info: PersonalInfo,
}

/// Survey surface stored on a counseling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyState {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub answers: SurveyAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
}

impl SurveyState {
    /// Fresh state for a session that has not collected any answers yet.
    pub fn pending() -> Self {
        Self {
            completed: false,
            completed_at: None,
            answers: SurveyAnswers::new(),
            personal_info: None,
        }
    }
}
