use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing required movie fields")]
    MissingFields,
    #[error("movie with this title already exists")]
    DuplicateTitle,
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST.into_response(),
            AppError::DuplicateTitle => {
                (StatusCode::CONFLICT, "Movie with this title already exists").into_response()
            }
            AppError::Db(err) => {
                tracing::error!(error = %err, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
