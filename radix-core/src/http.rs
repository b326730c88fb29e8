use axum::response::{IntoResponse, Response};
use hyper::StatusCode;
use tracing::error;

pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("convert api went wrong: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "convert api went wrong because service inner error".to_string(),
        )
            .into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
