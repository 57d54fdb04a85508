use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections surface as `AppError::Validation`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidatedJson<T>(pub T);
