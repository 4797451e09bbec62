use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use arune::survey::{
    SessionId, SessionRecord, SessionStore, StoreError, SurveyAnswers, UserId,
};

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("session store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn by_client(&self, user: &UserId) -> Result<Vec<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.client == user)
            .cloned()
            .collect())
    }

    fn by_advisor(&self, user: &UserId) -> Result<Vec<SessionRecord>, StoreError> {
        let guard = self.records.lock().expect("session store mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.advisor.as_ref() == Some(user))
            .cloned()
            .collect())
    }
}

/// The moderate answer set shipped with the platform's smoke scripts.
pub(crate) fn sample_answers() -> SurveyAnswers {
    [
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
    ]
    .into_iter()
    .map(|(id, value)| (id.to_string(), value))
    .collect()
}
