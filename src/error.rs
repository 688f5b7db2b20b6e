use axum::{
    Json,
    extract::{FromRequest, multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use moodmeet_shared::user::StatusResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<moodmeet_shared::Error> for ApiError {
    fn from(err: moodmeet_shared::Error) -> Self {
        use moodmeet_shared::Error;

        match err {
            Error::Validate(errors) => {
                let message = errors
                    .field_errors()
                    .into_iter()
                    .min_by(|a, b| a.0.cmp(&b.0))
                    .and_then(|(field, errors)| {
                        errors.first().map(|error| {
                            error
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid {field}"))
                        })
                    })
                    .unwrap_or_else(|| "Invalid input".to_owned());

                ApiError::BadRequest(message)
            }
            Error::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            Error::NotFound(_) => ApiError::NotFound(err.to_string()),
            Error::Server(message) => ApiError::BadRequest(message),
            Error::Unknown(err) => ApiError::Internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(err) => {
                tracing::error!("{err:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(StatusResponse::error(self.to_string()))).into_response()
    }
}

/// JSON body extractor whose rejections use the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let (status, json) = body(moodmeet_shared::Error::NotFound("User").into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "User not found");
    }

    #[tokio::test]
    async fn test_invalid_credentials_maps_to_401() {
        let (status, json) = body(moodmeet_shared::Error::InvalidCredentials.into()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = moodmeet_shared::Error::Unknown(anyhow::anyhow!("disk on fire"));
        let (status, json) = body(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }
}
