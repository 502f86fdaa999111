// src/store/memory.rs

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use async_trait::async_trait;

use super::{QuizRepository, RecordRepository, StoreError};
use crate::models::{
    answer::{Answer, RecordKey, UserQuizRecord},
    quiz::Quiz,
};

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

/// Process-local quiz registry.
#[derive(Debug, Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Arc<Quiz>>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, quiz: Quiz) -> Result<(), StoreError> {
        let mut quizzes = self.quizzes.write().map_err(poisoned)?;
        match quizzes.entry(quiz.id.clone()) {
            Entry::Occupied(e) => Err(StoreError::Duplicate(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(Arc::new(quiz));
                Ok(())
            }
        }
    }

    async fn find(&self, id: &str) -> Result<Option<Arc<Quiz>>, StoreError> {
        let quizzes = self.quizzes.read().map_err(poisoned)?;
        Ok(quizzes.get(id).cloned())
    }
}

/// Process-local answer records.
///
/// Each record sits behind its own mutex, so the map lock is only held long
/// enough to find or create a slot.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<HashMap<RecordKey, Arc<Mutex<UserQuizRecord>>>>,
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn find(&self, key: &RecordKey) -> Result<Option<UserQuizRecord>, StoreError> {
        let slot = self.records.read().map_err(poisoned)?.get(key).cloned();

        match slot {
            Some(slot) => {
                let record = slot.lock().map_err(poisoned)?;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn append(&self, key: RecordKey, answer: Answer) -> Result<u32, StoreError> {
        let existing = self.records.read().map_err(poisoned)?.get(&key).cloned();

        let slot = match existing {
            Some(slot) => slot,
            None => {
                let mut records = self.records.write().map_err(poisoned)?;
                match records.entry(key) {
                    // Another submission created it between our two lookups.
                    Entry::Occupied(e) => Arc::clone(e.get()),
                    Entry::Vacant(e) => {
                        // The first answer goes in before the record is visible.
                        let mut record = UserQuizRecord::new(&e.key().quiz_id, &e.key().user_id);
                        let score = record.record(answer);
                        e.insert(Arc::new(Mutex::new(record)));
                        return Ok(score);
                    }
                }
            }
        };

        let mut record = slot.lock().map_err(poisoned)?;
        Ok(record.record(answer))
    }
}
