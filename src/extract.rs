// src/extract.rs

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections are reported as `AppError`,
/// so malformed bodies get the same `{"error": ...}` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
