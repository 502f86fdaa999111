// src/services/quiz_store.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::ServiceError,
    models::quiz::{CreateQuizRequest, PublicQuiz, Question, Quiz},
    store::{InMemoryQuizRepository, QuizRepository},
};

/// Owns quiz definitions and keeps answer keys off every public read.
#[derive(Clone)]
pub struct QuizStore {
    repo: Arc<dyn QuizRepository>,
}

impl QuizStore {
    pub fn new(repo: Arc<dyn QuizRepository>) -> Self {
        Self { repo }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryQuizRepository::default()))
    }

    /// Validates and stores a new quiz.
    ///
    /// * Assigns a fresh UUID and `q1..qN` question ids in input order.
    /// * Nothing is written when validation fails.
    /// * Returns the full quiz, answer keys included, for the creator.
    pub async fn create(&self, req: CreateQuizRequest) -> Result<Quiz, ServiceError> {
        req.validate()?;

        let questions = req
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, q)| Question {
                id: format!("q{}", index + 1),
                text: q.text,
                options: q.options,
                correct_option: q.correct_option,
            })
            .collect();

        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            title: req.title,
            questions,
            created_at: Utc::now(),
        };

        self.repo.insert(quiz.clone()).await?;
        tracing::info!(
            quiz_id = %quiz.id,
            questions = quiz.questions.len(),
            "Quiz created"
        );

        Ok(quiz)
    }

    /// Returns the public projection of a quiz, or `None` if the id is unknown.
    pub async fn get(&self, id: &str) -> Result<Option<PublicQuiz>, ServiceError> {
        let quiz = self.repo.find(id).await?;
        Ok(quiz.map(|q| q.to_public()))
    }

    /// Whether a quiz with this id has been published.
    pub async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.repo.find(id).await?.is_some())
    }

    /// Full record including answer keys. Scoring only.
    pub(crate) async fn get_internal(&self, id: &str) -> Result<Option<Arc<Quiz>>, ServiceError> {
        Ok(self.repo.find(id).await?)
    }
}
