// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored question, answer key included.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Question {
    /// Sequential id within the quiz: `q1`, `q2`, ...
    pub id: String,

    pub text: String,

    pub options: Vec<String>,

    /// Index into `options`.
    /// Only ever leaves the store in the creation response.
    pub correct_option: i64,
}

/// A stored quiz. Immutable once published.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    /// Projects the quiz for takers, dropping every answer key.
    pub fn to_public(&self) -> PublicQuiz {
        PublicQuiz {
            id: self.id.clone(),
            title: self.title.clone(),
            questions: self.questions.iter().map(PublicQuestion::from).collect(),
            created_at: self.created_at,
        }
    }
}

/// DTO for sending a question to takers.
/// Has no `correct_option` field at all, so serialization cannot leak it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            options: question.options.clone(),
        }
    }
}

/// DTO for sending a quiz to takers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicQuiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<PublicQuestion>,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new quiz.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."))]
    pub title: String,

    #[validate(
        length(min = 1, message = "Quiz must contain at least one question."),
        nested
    )]
    pub questions: Vec<NewQuestion>,
}

/// A question as submitted by the author. Ids are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 1000, message = "Question text must be between 1 and 1000 characters."))]
    pub text: String,

    #[validate(
        length(equal = 4, message = "Question must have exactly 4 options."),
        custom(function = validate_options)
    )]
    pub options: Vec<String>,

    #[validate(range(min = 0, max = 3, message = "Correct option must be an index between 0 and 3."))]
    pub correct_option: i64,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    for opt in options {
        if opt.chars().count() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}

/// Response body for a freshly created quiz.
/// The creator is the only caller who ever sees the answer keys.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuizResponse {
    pub id: String,
    pub message: String,
    pub quiz: Quiz,
}
