// src/services/scoring.rs

use std::sync::Arc;

use crate::{
    error::ServiceError,
    models::{
        answer::{Answer, RecordKey, UserQuizRecord},
        quiz::Question,
    },
    services::quiz_store::QuizStore,
    store::{InMemoryRecordRepository, RecordRepository},
};

/// Grades a selected option. Anything other than the key is wrong,
/// including indices outside the option list.
fn is_correct(question: &Question, selected_option: i64) -> bool {
    selected_option == question.correct_option
}

/// Grades submissions and keeps each user's running score per quiz.
#[derive(Clone)]
pub struct ScoringEngine {
    quizzes: QuizStore,
    records: Arc<dyn RecordRepository>,
}

impl ScoringEngine {
    pub fn new(quizzes: QuizStore, records: Arc<dyn RecordRepository>) -> Self {
        Self { quizzes, records }
    }

    pub fn in_memory(quizzes: QuizStore) -> Self {
        Self::new(quizzes, Arc::new(InMemoryRecordRepository::default()))
    }

    /// Grades one answer and appends it to the user's record for the quiz.
    ///
    /// * Fails with `QuizNotFound` / `QuestionNotFound` before touching any record.
    /// * Re-answering a question is accepted and appended again.
    /// * The returned answer carries `is_correct`, never the key itself.
    pub async fn submit_answer(
        &self,
        quiz_id: &str,
        user_id: &str,
        question_id: &str,
        selected_option: i64,
    ) -> Result<Answer, ServiceError> {
        let quiz = self
            .quizzes
            .get_internal(quiz_id)
            .await?
            .ok_or(ServiceError::QuizNotFound)?;

        let question = quiz
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(ServiceError::QuestionNotFound)?;

        let answer = Answer {
            question_id: question.id.clone(),
            selected_option,
            is_correct: is_correct(question, selected_option),
        };

        let score = self
            .records
            .append(RecordKey::new(quiz_id, user_id), answer.clone())
            .await?;

        tracing::debug!(
            quiz_id,
            user_id,
            question_id,
            is_correct = answer.is_correct,
            score,
            "Answer recorded"
        );

        Ok(answer)
    }

    /// Returns the user's record for the quiz, or `None` if they never submitted.
    pub async fn get_results(
        &self,
        quiz_id: &str,
        user_id: &str,
    ) -> Result<Option<UserQuizRecord>, ServiceError> {
        Ok(self.records.find(&RecordKey::new(quiz_id, user_id)).await?)
    }
}
