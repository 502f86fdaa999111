// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    extract::AppJson,
    models::{
        answer::{Answer, SubmitAnswerRequest, UserQuizRecord},
        quiz::{CreateQuizRequest, CreateQuizResponse, PublicQuiz},
    },
    services::{QuizStore, ScoringEngine},
};

/// Creates a quiz.
///
/// * Validates the payload (title, at least one question, 4 options each).
/// * Responds with the full quiz, answer keys included. This is the only
///   response that ever carries them.
#[utoipa::path(
    post,
    path = "/api/quizzes",
    request_body = CreateQuizRequest,
    responses(
        (status = 201, description = "Quiz created", body = CreateQuizResponse),
        (status = 400, description = "Invalid quiz data")
    ),
    tag = "quizzes"
)]
pub async fn create_quiz(
    State(store): State<QuizStore>,
    AppJson(payload): AppJson<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store.create(payload).await?;

    let body = CreateQuizResponse {
        id: quiz.id.clone(),
        message: "Quiz created successfully.".to_string(),
        quiz,
    };

    Ok((StatusCode::CREATED, Json(body)))
}

/// Fetches a quiz for taking. Answer keys are stripped.
#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}",
    params(("quiz_id" = String, Path, description = "Quiz id")),
    responses(
        (status = 200, description = "Quiz without answer keys", body = PublicQuiz),
        (status = 404, description = "Quiz not found")
    ),
    tag = "quizzes"
)]
pub async fn get_quiz(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store
        .get(&quiz_id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found.".to_string()))?;

    Ok(Json(quiz))
}

/// Submits one answer and returns whether it was correct.
///
/// Answering the same question again is accepted and counted again.
#[utoipa::path(
    post,
    path = "/api/quizzes/{quiz_id}/users/{user_id}/questions/{question_id}/answer",
    params(
        ("quiz_id" = String, Path, description = "Quiz id"),
        ("user_id" = String, Path, description = "Caller-supplied user id"),
        ("question_id" = String, Path, description = "Question id, e.g. q1")
    ),
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Graded answer", body = Answer),
        (status = 400, description = "Invalid answer format"),
        (status = 404, description = "Quiz or question not found")
    ),
    tag = "quizzes"
)]
pub async fn submit_answer(
    State(engine): State<ScoringEngine>,
    Path((quiz_id, user_id, question_id)): Path<(String, String, String)>,
    AppJson(payload): AppJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let answer = engine
        .submit_answer(&quiz_id, &user_id, &question_id, payload.selected_option)
        .await?;

    Ok(Json(answer))
}

/// Returns a user's answers and score for a quiz.
///
/// Distinguishes an unknown quiz from a user who has not answered yet.
#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}/users/{user_id}/results",
    params(
        ("quiz_id" = String, Path, description = "Quiz id"),
        ("user_id" = String, Path, description = "Caller-supplied user id")
    ),
    responses(
        (status = 200, description = "User's record for the quiz", body = UserQuizRecord),
        (status = 404, description = "Quiz not found, or no answers submitted")
    ),
    tag = "quizzes"
)]
pub async fn get_results(
    State(store): State<QuizStore>,
    State(engine): State<ScoringEngine>,
    Path((quiz_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    if !store.exists(&quiz_id).await? {
        return Err(AppError::NotFound("Quiz not found.".to_string()));
    }

    let record = engine
        .get_results(&quiz_id, &user_id)
        .await?
        .ok_or(AppError::NotFound("No results found.".to_string()))?;

    Ok(Json(record))
}
