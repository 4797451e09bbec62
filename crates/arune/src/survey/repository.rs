use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AruneReport;
use super::domain::{SessionId, SessionStatus, SurveyState, UserId};

/// Stored counseling-session row covering the survey and report surface.
/// Everything else the platform keeps on a session stays outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub client: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor: Option<UserId>,
    pub scheduled_date: DateTime<Utc>,
    pub status: SessionStatus,
    pub survey: SurveyState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AruneReport>,
}

/// Storage abstraction over the platform's session documents. The engine
/// treats persistence as opaque; implementations decide about indexes,
/// uniqueness enforcement, and concurrency.
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError>;
    fn update(&self, record: SessionRecord) -> Result<(), StoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, StoreError>;
    /// Sessions where the user is the client.
    fn by_client(&self, user: &UserId) -> Result<Vec<SessionRecord>, StoreError>;
    /// Sessions where the user is the assigned advisor.
    fn by_advisor(&self, user: &UserId) -> Result<Vec<SessionRecord>, StoreError>;
}

/// Error enumeration for session-store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
