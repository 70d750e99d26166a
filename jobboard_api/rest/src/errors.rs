use aide::transform::TransformOperation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_models::auth::{AuthError, AuthenticateError, AuthorizeError};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{docs::TransformOperationExt, error_code};

pub trait ApiErrorCode: JsonSchema + IntoResponse {
    const DESCRIPTION: &str;
    const STATUS_CODE: StatusCode;
}

/// The body of every error response
#[derive(Serialize, JsonSchema)]
pub struct ApiError<M> {
    pub message: M,
}

pub fn error(code: StatusCode, message: impl Serialize) -> Response {
    (code, Json(ApiError { message })).into_response()
}

pub fn bad_request(message: impl std::fmt::Display) -> Response {
    error(StatusCode::BAD_REQUEST, message.to_string())
}

pub fn bad_request_docs(op: TransformOperation) -> TransformOperation {
    op.add_response::<ApiError<String>>(
        StatusCode::BAD_REQUEST,
        "The request contains an invalid parameter or body.",
    )
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    InternalServerError.into_response()
}

pub fn internal_server_error_docs(op: TransformOperation) -> TransformOperation {
    op.add_error::<InternalServerError>()
}

pub fn auth_error(err: impl Into<AuthError>) -> Response {
    match err.into() {
        AuthError::Authenticate(AuthenticateError::InvalidToken) => {
            InvalidTokenError.into_response()
        }
        AuthError::Authenticate(AuthenticateError::Other(err)) => internal_server_error(err),
        AuthError::Authorize(AuthorizeError::Employer) => EmployerRequiredError.into_response(),
        AuthError::Authorize(AuthorizeError::Jobseeker) => JobseekerRequiredError.into_response(),
    }
}

/// Errors of endpoints that accept any authenticated user.
pub fn auth_error_docs(op: TransformOperation) -> TransformOperation {
    op.add_error::<InvalidTokenError>()
}

pub fn employer_auth_error_docs(op: TransformOperation) -> TransformOperation {
    op.with(auth_error_docs)
        .add_error::<EmployerRequiredError>()
}

pub fn jobseeker_auth_error_docs(op: TransformOperation) -> TransformOperation {
    op.with(auth_error_docs)
        .add_error::<JobseekerRequiredError>()
}

error_code! {
    /// An unexpected error occurred.
    pub InternalServerError(INTERNAL_SERVER_ERROR, "Internal server error");

    /// The access token is missing, invalid or has expired.
    pub InvalidTokenError(UNAUTHORIZED, "Invalid token");
    /// The authenticated user is not an employer.
    pub EmployerRequiredError(FORBIDDEN, "Only employers can access this resource");
    /// The authenticated user is not a jobseeker.
    pub JobseekerRequiredError(FORBIDDEN, "Only jobseekers can access this resource");
}
