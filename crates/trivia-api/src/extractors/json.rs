//! JSON body extractor with the uniform error body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use trivia_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::Json`], but rejections produce the standard error body
/// instead of axum's plain-text rejection.
///
/// Well-formed JSON of the wrong shape is unprocessable. Anything else
/// (bad syntax, missing body, wrong content type) is a bad request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                Err(AppError::unprocessable(e.body_text()).into())
            }
            Err(rejection) => Err(AppError::bad_request(rejection.body_text()).into()),
        }
    }
}
