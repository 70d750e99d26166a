use std::sync::Arc;

use aide::{
    axum::{routing, ApiRouter},
    transform::TransformOperation,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_core_analytics_contracts::{AnalyticsFeatureService, AnalyticsOverviewError};

use crate::{
    docs::TransformOperationExt,
    errors::{auth_error, employer_auth_error_docs, internal_server_error, internal_server_error_docs},
    extractors::auth::ApiToken,
    models::analytics::ApiOverview,
};

pub const TAG: &str = "Analytics";

pub fn router(service: Arc<impl AnalyticsFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route("/api/analytics/overview", routing::get_with(overview, overview_docs))
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

async fn overview(
    analytics_service: State<Arc<impl AnalyticsFeatureService>>,
    token: ApiToken,
) -> Response {
    match analytics_service.get_overview(&token.0).await {
        Ok(overview) => Json(ApiOverview::from(overview)).into_response(),
        Err(AnalyticsOverviewError::Auth(err)) => auth_error(err),
        Err(AnalyticsOverviewError::Other(err)) => internal_server_error(err),
    }
}

fn overview_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the dashboard figures of the authenticated employer.")
        .description(
            "Trends compare the current period with the previous one of the same length, in \
             percent.",
        )
        .add_response::<ApiOverview>(StatusCode::OK, None)
        .with(employer_auth_error_docs)
        .with(internal_server_error_docs)
}
