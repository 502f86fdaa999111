// src/services/mod.rs

pub mod quiz_store;
pub mod scoring;

pub use quiz_store::QuizStore;
pub use scoring::ScoringEngine;
