use crate::config::Config;
use crate::services::{QuizStore, ScoringEngine};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub quizzes: QuizStore,
    pub scoring: ScoringEngine,
    pub config: Config,
}

impl AppState {
    /// Wires both components onto process-local storage.
    pub fn in_memory(config: Config) -> Self {
        let quizzes = QuizStore::in_memory();
        let scoring = ScoringEngine::in_memory(quizzes.clone());
        Self {
            quizzes,
            scoring,
            config,
        }
    }
}

impl FromRef<AppState> for QuizStore {
    fn from_ref(state: &AppState) -> Self {
        state.quizzes.clone()
    }
}

impl FromRef<AppState> for ScoringEngine {
    fn from_ref(state: &AppState) -> Self {
        state.scoring.clone()
    }
}
