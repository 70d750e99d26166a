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
use jobboard_core_jobs_contracts::{
    JobCreateError, JobDeleteError, JobFeatureService, JobGetError, JobListEmployerError,
    JobListError, JobToggleCloseError, JobUpdateError,
};

use crate::{
    docs::TransformOperationExt,
    error_code,
    errors::{
        auth_error, auth_error_docs, bad_request, bad_request_docs, employer_auth_error_docs,
        internal_server_error, internal_server_error_docs,
    },
    extractors::{auth::ApiToken, json::ApiJson, path::ApiPath, query::ApiQuery},
    models::{
        job::{
            ApiEmployerJob, ApiJob, ApiJobCreateRequest, ApiJobDetails, ApiJobListQuery,
            ApiJobUpdateRequest, ApiListedJob, ApiViewerQuery, PathJobId,
        },
        MessageResponse,
    },
};

pub const TAG: &str = "Jobs";

pub fn router(service: Arc<impl JobFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route(
            "/api/jobs",
            routing::get_with(list, list_docs).post_with(create, create_docs),
        )
        .api_route(
            "/api/jobs/get-jobs-employer",
            routing::get_with(list_employer, list_employer_docs),
        )
        .api_route(
            "/api/jobs/:id",
            routing::get_with(get, get_docs)
                .put_with(update, update_docs)
                .delete_with(delete, delete_docs),
        )
        .api_route(
            "/api/jobs/:id/toggle-close",
            routing::put_with(toggle_close, toggle_close_docs),
        )
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

async fn list(
    job_service: State<Arc<impl JobFeatureService>>,
    ApiQuery(query): ApiQuery<ApiJobListQuery>,
) -> Response {
    let (filter, viewer) = match query.parse() {
        Ok(x) => x,
        Err(err) => return bad_request(err),
    };

    match job_service.list_jobs(filter, viewer).await {
        Ok(jobs) => Json(jobs.into_iter().map(Into::into).collect::<Vec<ApiListedJob>>())
            .into_response(),
        Err(JobListError::Other(err)) => internal_server_error(err),
    }
}

fn list_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return all open jobs matching the given filter, newest first.")
        .description(
            "If `userId` is set, every job is annotated with whether this user saved it and the \
             status of their application.",
        )
        .add_response::<Vec<ApiListedJob>>(StatusCode::OK, None)
        .with(bad_request_docs)
        .with(internal_server_error_docs)
}

async fn get(
    job_service: State<Arc<impl JobFeatureService>>,
    ApiPath(PathJobId { id }): ApiPath<PathJobId>,
    ApiQuery(query): ApiQuery<ApiViewerQuery>,
) -> Response {
    let viewer = match query.parse() {
        Ok(x) => x,
        Err(err) => return bad_request(err),
    };

    match job_service.get_job(id, viewer).await {
        Ok(job) => Json(ApiJobDetails::from(job)).into_response(),
        Err(JobGetError::NotFound) => JobNotFoundError.into_response(),
        Err(JobGetError::Other(err)) => internal_server_error(err),
    }
}

fn get_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the job with the given id.")
        .description("Closed jobs are returned as well.")
        .add_response::<ApiJobDetails>(StatusCode::OK, None)
        .add_error::<JobNotFoundError>()
        .with(bad_request_docs)
        .with(internal_server_error_docs)
}

async fn create(
    job_service: State<Arc<impl JobFeatureService>>,
    token: ApiToken,
    ApiJson(request): ApiJson<ApiJobCreateRequest>,
) -> Response {
    match job_service.create_job(&token.0, request.into()).await {
        Ok(job) => (StatusCode::CREATED, Json(ApiJob::from(job))).into_response(),
        Err(JobCreateError::Auth(err)) => auth_error(err),
        Err(JobCreateError::Other(err)) => internal_server_error(err),
    }
}

fn create_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Post a new job.")
        .add_response::<ApiJob>(StatusCode::CREATED, None)
        .with(bad_request_docs)
        .with(employer_auth_error_docs)
        .with(internal_server_error_docs)
}

async fn update(
    job_service: State<Arc<impl JobFeatureService>>,
    token: ApiToken,
    ApiPath(PathJobId { id }): ApiPath<PathJobId>,
    ApiJson(request): ApiJson<ApiJobUpdateRequest>,
) -> Response {
    match job_service.update_job(&token.0, id, request.into()).await {
        Ok(job) => Json(ApiJob::from(job)).into_response(),
        Err(JobUpdateError::Auth(err)) => auth_error(err),
        Err(JobUpdateError::NotFound) => JobNotFoundError.into_response(),
        Err(JobUpdateError::Forbidden) => JobForbiddenError.into_response(),
        Err(JobUpdateError::Other(err)) => internal_server_error(err),
    }
}

fn update_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update the given fields of a job.")
        .description("Fields that are omitted remain unchanged.")
        .add_response::<ApiJob>(StatusCode::OK, None)
        .with(ownership_error_docs)
        .with(bad_request_docs)
        .with(auth_error_docs)
        .with(internal_server_error_docs)
}

async fn delete(
    job_service: State<Arc<impl JobFeatureService>>,
    token: ApiToken,
    ApiPath(PathJobId { id }): ApiPath<PathJobId>,
) -> Response {
    match job_service.delete_job(&token.0, id).await {
        Ok(()) => Json(MessageResponse {
            message: "Job deleted successfully",
        })
        .into_response(),
        Err(JobDeleteError::Auth(err)) => auth_error(err),
        Err(JobDeleteError::NotFound) => JobNotFoundError.into_response(),
        Err(JobDeleteError::Forbidden) => JobForbiddenError.into_response(),
        Err(JobDeleteError::Other(err)) => internal_server_error(err),
    }
}

fn delete_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete a job.")
        .description("Applications and saved jobs referencing the job are kept.")
        .add_response::<MessageResponse>(StatusCode::OK, None)
        .with(ownership_error_docs)
        .with(bad_request_docs)
        .with(auth_error_docs)
        .with(internal_server_error_docs)
}

async fn toggle_close(
    job_service: State<Arc<impl JobFeatureService>>,
    token: ApiToken,
    ApiPath(PathJobId { id }): ApiPath<PathJobId>,
) -> Response {
    match job_service.toggle_close(&token.0, id).await {
        Ok(job) => Json(ApiJob::from(job)).into_response(),
        Err(JobToggleCloseError::Auth(err)) => auth_error(err),
        Err(JobToggleCloseError::NotFound) => JobNotFoundError.into_response(),
        Err(JobToggleCloseError::Forbidden) => JobForbiddenError.into_response(),
        Err(JobToggleCloseError::Other(err)) => internal_server_error(err),
    }
}

fn toggle_close_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Close an open job or reopen a closed one.")
        .add_response::<ApiJob>(StatusCode::OK, None)
        .with(ownership_error_docs)
        .with(bad_request_docs)
        .with(auth_error_docs)
        .with(internal_server_error_docs)
}

async fn list_employer(
    job_service: State<Arc<impl JobFeatureService>>,
    token: ApiToken,
) -> Response {
    match job_service.list_employer_jobs(&token.0).await {
        Ok(jobs) => Json(
            jobs.into_iter()
                .map(Into::into)
                .collect::<Vec<ApiEmployerJob>>(),
        )
        .into_response(),
        Err(JobListEmployerError::Auth(err)) => auth_error(err),
        Err(JobListEmployerError::Other(err)) => internal_server_error(err),
    }
}

fn list_employer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return all jobs of the authenticated employer.")
        .description("Every job includes the number of applications it received.")
        .add_response::<Vec<ApiEmployerJob>>(StatusCode::OK, None)
        .with(employer_auth_error_docs)
        .with(internal_server_error_docs)
}

fn ownership_error_docs(op: TransformOperation) -> TransformOperation {
    op.add_error::<JobNotFoundError>()
        .add_error::<JobForbiddenError>()
}

error_code! {
    /// The job does not exist.
    pub JobNotFoundError(NOT_FOUND, "Job not found");
    /// The job is owned by another company.
    pub JobForbiddenError(FORBIDDEN, "Not authorized to modify this job");
}
