// src/store/mod.rs

//! Key-value storage the quiz store and scoring engine persist through.

pub mod memory;

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::models::{
    answer::{Answer, RecordKey, UserQuizRecord},
    quiz::Quiz,
};

pub use memory::{InMemoryQuizRepository, InMemoryRecordRepository};

/// Failures of the underlying storage. Never carries quiz content.
#[derive(Debug)]
pub enum StoreError {
    /// The backend could not serve the request (e.g., a poisoned lock).
    Unavailable(String),

    /// A key that must be fresh was already taken.
    Duplicate(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StoreError::Duplicate(key) => write!(f, "duplicate key: {}", key),
        }
    }
}

impl std::error::Error for StoreError {}

/// Registry of quiz definitions, keyed by quiz id.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Publishes a fully built quiz. Readers see all of it or none of it.
    async fn insert(&self, quiz: Quiz) -> Result<(), StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Arc<Quiz>>, StoreError>;
}

/// Registry of per-(quiz, user) answer records.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Returns a snapshot of the record, if any submission was ever made.
    async fn find(&self, key: &RecordKey) -> Result<Option<UserQuizRecord>, StoreError>;

    /// Appends a graded answer to the record for `key`, creating the record on
    /// first use, and returns the updated score.
    ///
    /// Appends for the same key are serialized; appends for different keys
    /// must not block each other.
    async fn append(&self, key: RecordKey, answer: Answer) -> Result<u32, StoreError>;
}
