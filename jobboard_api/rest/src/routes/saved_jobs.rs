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
use jobboard_core_saved_jobs_contracts::{
    SavedJobFeatureService, SavedJobListError, SavedJobSaveError, SavedJobUnsaveError,
};

use super::jobs::JobNotFoundError;
use crate::{
    docs::TransformOperationExt,
    error_code,
    errors::{
        auth_error, auth_error_docs, bad_request_docs, internal_server_error,
        internal_server_error_docs, jobseeker_auth_error_docs,
    },
    extractors::{auth::ApiToken, path::ApiPath},
    models::{
        saved_job::{ApiSavedJob, ApiSavedJobComposite, PathSavedJobId},
        MessageResponse,
    },
};

pub const TAG: &str = "Saved Jobs";

pub fn router(service: Arc<impl SavedJobFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route("/api/saved-jobs/my", routing::get_with(list, list_docs))
        .api_route(
            "/api/saved-jobs/:job_id",
            routing::post_with(save, save_docs).delete_with(unsave, unsave_docs),
        )
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

async fn list(
    saved_job_service: State<Arc<impl SavedJobFeatureService>>,
    token: ApiToken,
) -> Response {
    match saved_job_service.list_saved_jobs(&token.0).await {
        Ok(saved_jobs) => Json(
            saved_jobs
                .into_iter()
                .map(Into::into)
                .collect::<Vec<ApiSavedJobComposite>>(),
        )
        .into_response(),
        Err(SavedJobListError::Auth(err)) => auth_error(err),
        Err(SavedJobListError::Other(err)) => internal_server_error(err),
    }
}

fn list_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the saved jobs of the authenticated user, newest first.")
        .description("Saved jobs whose job has been deleted are returned with `job: null`.")
        .add_response::<Vec<ApiSavedJobComposite>>(StatusCode::OK, None)
        .with(auth_error_docs)
        .with(internal_server_error_docs)
}

async fn save(
    saved_job_service: State<Arc<impl SavedJobFeatureService>>,
    token: ApiToken,
    ApiPath(PathSavedJobId { job_id }): ApiPath<PathSavedJobId>,
) -> Response {
    match saved_job_service.save_job(&token.0, job_id).await {
        Ok(saved_job) => (StatusCode::CREATED, Json(ApiSavedJob::from(saved_job))).into_response(),
        Err(SavedJobSaveError::Auth(err)) => auth_error(err),
        Err(SavedJobSaveError::NotFound) => JobNotFoundError.into_response(),
        Err(SavedJobSaveError::Conflict) => JobAlreadySavedError.into_response(),
        Err(SavedJobSaveError::Other(err)) => internal_server_error(err),
    }
}

fn save_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Add a job to the saved list of the authenticated jobseeker.")
        .add_response::<ApiSavedJob>(StatusCode::CREATED, None)
        .add_error::<JobNotFoundError>()
        .add_error::<JobAlreadySavedError>()
        .with(bad_request_docs)
        .with(jobseeker_auth_error_docs)
        .with(internal_server_error_docs)
}

async fn unsave(
    saved_job_service: State<Arc<impl SavedJobFeatureService>>,
    token: ApiToken,
    ApiPath(PathSavedJobId { job_id }): ApiPath<PathSavedJobId>,
) -> Response {
    match saved_job_service.unsave_job(&token.0, job_id).await {
        Ok(()) => Json(MessageResponse {
            message: "Job removed from saved list",
        })
        .into_response(),
        Err(SavedJobUnsaveError::Auth(err)) => auth_error(err),
        Err(SavedJobUnsaveError::Other(err)) => internal_server_error(err),
    }
}

fn unsave_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Remove a job from the saved list of the authenticated jobseeker.")
        .description("Succeeds even if the job has never been saved.")
        .add_response::<MessageResponse>(StatusCode::OK, None)
        .with(bad_request_docs)
        .with(jobseeker_auth_error_docs)
        .with(internal_server_error_docs)
}

error_code! {
    /// The job is already on the saved list.
    pub JobAlreadySavedError(CONFLICT, "Job already saved");
}
