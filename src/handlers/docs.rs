// src/handlers/docs.rs

use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

use crate::{
    handlers::quiz,
    models::{
        answer::{Answer, SubmitAnswerRequest, UserQuizRecord},
        quiz::{CreateQuizRequest, CreateQuizResponse, NewQuestion, PublicQuestion, PublicQuiz, Question, Quiz},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        quiz::create_quiz,
        quiz::get_quiz,
        quiz::submit_answer,
        quiz::get_results
    ),
    components(schemas(
        CreateQuizRequest,
        NewQuestion,
        CreateQuizResponse,
        Quiz,
        Question,
        PublicQuiz,
        PublicQuestion,
        SubmitAnswerRequest,
        Answer,
        UserQuizRecord
    )),
    tags((name = "quizzes", description = "Quiz authoring, taking and scoring"))
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
