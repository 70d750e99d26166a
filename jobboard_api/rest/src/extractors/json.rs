use aide::{gen::GenContext, openapi::Operation, OperationInput};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::Response,
    Json,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::errors::bad_request;

/// Like [`Json`], but rejects invalid bodies with a `400 Bad Request` in the
/// usual error format.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject(rejection)),
        }
    }
}

fn reject(rejection: JsonRejection) -> Response {
    tracing::debug!(%rejection, "rejected request body");
    bad_request(rejection.body_text())
}

impl<T: JsonSchema> OperationInput for ApiJson<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}
