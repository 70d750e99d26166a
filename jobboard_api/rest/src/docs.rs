use std::sync::Arc;

use aide::{
    gen::in_context,
    openapi::{OpenApi, ReferenceOr, Response, Responses, SecurityScheme},
    transform::{TransformOpenApi, TransformOperation, TransformResponse},
    OperationOutput,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
    routing, Extension, Json, Router,
};
use schemars::{
    schema::{Metadata, Schema, SchemaObject, SubschemaValidation},
    JsonSchema,
};

use crate::errors::{ApiError, ApiErrorCode};

mod redoc;

pub const TOKEN_SCHEME: &str = "Token";

pub fn router() -> Router<()> {
    Router::new()
        .route("/openapi.json", routing::get(serve_openapi))
        .merge(redoc::router())
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> AxumResponse {
    Json(&*api).into_response()
}

pub fn transform_api(api: TransformOpenApi) -> TransformOpenApi {
    api.security_scheme(
            TOKEN_SCHEME,
            SecurityScheme::Http {
                scheme: "bearer".into(),
                bearer_format: Some("JWT".into()),
                description: Some("Access token issued by the authentication service".into()),
                extensions: Default::default(),
            },
        )
}

/// Extension trait for [`TransformOperation`]
pub trait TransformOperationExt {
    /// Add a [`Json`] response to the operation.
    ///
    /// Different responses with the same status code are automatically merged.
    fn add_response<R: JsonSchema>(
        self,
        code: StatusCode,
        description: impl Into<Option<&'static str>>,
    ) -> Self
    where
        Self: Sized,
    {
        self.add_response_with::<R>(code, description, |op| op)
    }

    /// Same as [`TransformOperationExt::add_response`], additionally accepting
    /// a transform function.
    fn add_response_with<R: JsonSchema>(
        self,
        code: StatusCode,
        description: impl Into<Option<&'static str>>,
        transform: impl FnOnce(TransformResponse<R>) -> TransformResponse<R>,
    ) -> Self;

    /// Add an [`ApiError`] response by its [`ApiErrorCode`].
    fn add_error<C: ApiErrorCode>(self) -> Self
    where
        Self: Sized,
    {
        self.add_response::<ApiError<C>>(
            C::STATUS_CODE,
            Some(C::DESCRIPTION.trim()).filter(|d| !d.is_empty()),
        )
    }
}

impl TransformOperationExt for TransformOperation<'_> {
    fn add_response_with<R: JsonSchema>(
        mut self,
        code: StatusCode,
        description: impl Into<Option<&'static str>>,
        transform: impl FnOnce(TransformResponse<R>) -> TransformResponse<R>,
    ) -> Self {
        let Some(mut response) =
            in_context(|ctx| Json::<R>::operation_response(ctx, &mut Default::default()))
        else {
            return self;
        };
        if let Some(description) = description.into() {
            response.description = description.into();
        }
        let _ = transform(TransformResponse::new(&mut response));

        let operation = self.inner_mut();
        let responses = operation.responses.get_or_insert_with(Default::default);

        merge_into_responses(code, response, responses);

        self
    }
}

/// Merge the `src` [`Response`] into the `dst` [`Responses`]
fn merge_into_responses(code: StatusCode, src: Response, dst: &mut Responses) {
    let code = aide::openapi::StatusCode::Code(code.as_u16());

    let Some(dst) = dst.responses.get_mut(&code) else {
        dst.responses.insert(code, ReferenceOr::Item(src));
        return;
    };

    let ReferenceOr::Item(dst) = dst else {
        return;
    };

    for (media_type_name, src_media_type) in src.content {
        let dst_media_type = dst.content.entry(media_type_name).or_default();
        let Some(schema) = dst_media_type.schema.take() else {
            dst_media_type.schema = src_media_type.schema;
            continue;
        };

        let schema = schema.json_schema.into_object();
        let mut schemas = match schema.subschemas.as_ref().and_then(|s| s.any_of.clone()) {
            Some(any_of) if !any_of.is_empty() => any_of,
            _ => vec![schema_with_description(schema, dst.description.clone())],
        };

        if let Some(src_schema) = src_media_type.schema {
            let src_schema =
                schema_with_description(src_schema.json_schema.into_object(), src.description.clone());
            if !schemas.contains(&src_schema) {
                schemas.push(src_schema);
            }
        }

        let descriptions = schemas
            .iter()
            .map(|s| {
                match s {
                    Schema::Bool(_) => None,
                    Schema::Object(obj) => obj.metadata.as_ref(),
                }
                .and_then(|m| m.title.as_deref())
                .unwrap_or_default()
            })
            .collect::<Vec<_>>();
        dst.description = match descriptions.as_slice() {
            [description] => (*description).into(),
            _ => descriptions.iter().fold(
                String::from("There are multiple possible responses with this status code:"),
                |acc, d| format!("{acc}\n- {d}"),
            ),
        };

        dst_media_type.schema = Some(aide::openapi::SchemaObject {
            json_schema: SchemaObject {
                subschemas: Some(
                    SubschemaValidation {
                        any_of: Some(schemas),
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            }
            .into(),
            external_docs: None,
            example: None,
        });
    }
}

/// Convert a [`SchemaObject`] into a [`Schema`] with the given `description`
fn schema_with_description(schema_object: SchemaObject, description: String) -> Schema {
    SchemaObject {
        metadata: Some(
            Metadata {
                title: Some(description),
                ..Default::default()
            }
            .into(),
        ),
        ..schema_object
    }
    .into()
}
