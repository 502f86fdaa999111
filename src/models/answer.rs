// src/models/answer.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single graded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Answer {
    pub question_id: String,
    pub selected_option: i64,
    /// Computed by the scoring engine, never taken from the caller.
    pub is_correct: bool,
}

/// Every answer a user has submitted for one quiz, with the running score.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserQuizRecord {
    pub quiz_id: String,
    pub user_id: String,
    /// Append-only. Re-answering a question adds another entry.
    pub answers: Vec<Answer>,
    /// Number of entries in `answers` with `is_correct` set.
    pub score: u32,
}

impl UserQuizRecord {
    pub fn new(quiz_id: &str, user_id: &str) -> Self {
        Self {
            quiz_id: quiz_id.to_owned(),
            user_id: user_id.to_owned(),
            answers: Vec::new(),
            score: 0,
        }
    }

    /// Appends a graded answer and returns the updated score.
    pub fn record(&mut self, answer: Answer) -> u32 {
        if answer.is_correct {
            self.score += 1;
        }
        self.answers.push(answer);
        self.score
    }
}

/// Composite identity of a `UserQuizRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub quiz_id: String,
    pub user_id: String,
}

impl RecordKey {
    pub fn new(quiz_id: &str, user_id: &str) -> Self {
        Self {
            quiz_id: quiz_id.to_owned(),
            user_id: user_id.to_owned(),
        }
    }
}

/// DTO for submitting an answer.
/// Unknown fields (such as a forged `is_correct`) are dropped by serde.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitAnswerRequest {
    pub selected_option: i64,
}
