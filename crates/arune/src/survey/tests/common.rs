use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::survey::analysis::{AnalysisStamper, AnalyzerConfig, ProfileAnalyzer};
use crate::survey::domain::{
    CallerIdentity, PersonalInfo, SessionId, SessionStatus, SurveyAnswers, SurveyState,
    SurveySubmission, UserId, UserRole,
};
use crate::survey::repository::{SessionRecord, SessionStore, StoreError};
use crate::survey::service::SurveyService;

pub(super) fn answers_from(pairs: &[(&str, u8)]) -> SurveyAnswers {
    pairs
        .iter()
        .map(|(id, value)| ((*id).to_string(), *value))
        .collect()
}

/// The moderate 26-answer sample used by the platform's smoke scripts.
pub(super) fn sample_answers() -> SurveyAnswers {
    answers_from(&[
        ("FB01-3", 3),
        ("FB02-1", 2),
        ("FB05-1", 2),
        ("FB05-3", 2),
        ("FB16-2", 3),
        ("FB21-1", 1),
        ("FB09-3", 4),
        ("FB11-3", 2),
        ("FB12-1", 5),
        ("FB17-1", 1),
        ("FB22-3", 3),
        ("ST02-01", 3),
        ("ST02-02", 2),
        ("ST02-06", 3),
        ("ST02-07", 3),
        ("ST02-08", 2),
        ("ST02-10", 3),
        ("ST02-13", 2),
        ("ST02-14", 3),
        ("ST02-18", 3),
        ("ST02-29", 3),
        ("ST02-32", 2),
        ("ST02-40", 3),
        ("ST02-43", 2),
        ("ST02-46", 2),
        ("ST02-49", 3),
    ])
}

pub(super) fn personal_info(birth_year: i32) -> PersonalInfo {
    PersonalInfo {
        birth_year,
        gender: None,
        occupation: None,
        marital_status: None,
    }
}

pub(super) fn submission(answers: SurveyAnswers, birth_year: i32) -> SurveySubmission {
    SurveySubmission {
        answers,
        personal_info: personal_info(birth_year),
    }
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Deterministic stamper: pinned clock, sequential ids.
pub(super) struct FixedStamper {
    now: DateTime<Utc>,
    sequence: AtomicU64,
}

impl FixedStamper {
    pub(super) fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            sequence: AtomicU64::new(1),
        }
    }
}

impl AnalysisStamper for FixedStamper {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn analysis_id(&self, _now: DateTime<Utc>) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("ARU-TEST-{id:04}")
    }
}

pub(super) fn deterministic_analyzer() -> ProfileAnalyzer {
    ProfileAnalyzer::with_stamper(
        AnalyzerConfig::default(),
        Arc::new(FixedStamper::new(fixed_now())),
    )
}

pub(super) fn client() -> CallerIdentity {
    CallerIdentity {
        user_id: UserId("employee-1".to_string()),
        role: UserRole::Employee,
    }
}

pub(super) fn advisor() -> CallerIdentity {
    CallerIdentity {
        user_id: UserId("advisor-1".to_string()),
        role: UserRole::FinancialAdvisor,
    }
}

pub(super) fn admin() -> CallerIdentity {
    CallerIdentity {
        user_id: UserId("admin-1".to_string()),
        role: UserRole::SuperAdmin,
    }
}

pub(super) fn stranger() -> CallerIdentity {
    CallerIdentity {
        user_id: UserId("employee-2".to_string()),
        role: UserRole::Employee,
    }
}

pub(super) fn session_record(suffix: &str) -> SessionRecord {
    SessionRecord {
        session_id: SessionId(format!("session-{suffix}")),
        client: client().user_id,
        advisor: Some(advisor().user_id),
        scheduled_date: fixed_now(),
        status: SessionStatus::Scheduled,
        survey: SurveyState::pending(),
        report: None,
    }
}

pub(super) fn build_service() -> (SurveyService<MemorySessionStore>, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::default());
    let service = SurveyService::with_analyzer(store.clone(), deterministic_analyzer());
    (service, store)
}

#[derive(Default)]
pub(super) struct MemorySessionStore {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn by_client(&self, user: &UserId) -> Result<Vec<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.client == user)
            .cloned()
            .collect())
    }

    fn by_advisor(&self, user: &UserId) -> Result<Vec<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.advisor.as_ref() == Some(user))
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn by_client(&self, _user: &UserId) -> Result<Vec<SessionRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn by_advisor(&self, _user: &UserId) -> Result<Vec<SessionRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}
