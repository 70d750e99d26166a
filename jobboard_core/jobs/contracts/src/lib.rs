use std::future::Future;

use jobboard_models::{
    application::ApplicationStatus,
    auth::AuthError,
    job::{
        Job, JobCategory, JobComposite, JobDescription, JobFilter, JobId, JobLocation,
        JobRequirements, JobTitle, JobType, Salary,
    },
    user::UserId,
};
use jobboard_utils::patch::PatchValue;
use thiserror::Error;

pub mod ownership;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobFeatureService: Send + Sync + 'static {
    /// Return all open jobs matching the given filter, newest first.
    ///
    /// If a viewer is given, every job is annotated with whether the viewer
    /// saved it and the status of the viewer's application.
    fn list_jobs(
        &self,
        filter: JobFilter,
        viewer: Option<UserId>,
    ) -> impl Future<Output = Result<Vec<ListedJob>, JobListError>> + Send;

    /// Return the job with the given id, even if it has been closed.
    fn get_job(
        &self,
        job_id: JobId,
        viewer: Option<UserId>,
    ) -> impl Future<Output = Result<JobDetails, JobGetError>> + Send;

    /// Post a new job on behalf of the authenticated employer.
    fn create_job(
        &self,
        token: &str,
        request: JobCreateRequest,
    ) -> impl Future<Output = Result<Job, JobCreateError>> + Send;

    /// Update the given fields of a job.
    ///
    /// Requires the authenticated user to own the job.
    fn update_job(
        &self,
        token: &str,
        job_id: JobId,
        request: JobUpdateRequest,
    ) -> impl Future<Output = Result<Job, JobUpdateError>> + Send;

    /// Delete a job. Applications and saved jobs referencing it are kept.
    ///
    /// Requires the authenticated user to own the job.
    fn delete_job(
        &self,
        token: &str,
        job_id: JobId,
    ) -> impl Future<Output = Result<(), JobDeleteError>> + Send;

    /// Close an open job or reopen a closed one.
    ///
    /// Requires the authenticated user to own the job.
    fn toggle_close(
        &self,
        token: &str,
        job_id: JobId,
    ) -> impl Future<Output = Result<Job, JobToggleCloseError>> + Send;

    /// Return all jobs of the authenticated employer together with the number
    /// of applications they received.
    fn list_employer_jobs(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<EmployerJob>, JobListEmployerError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedJob {
    pub job: JobComposite,
    /// `None` if no viewer has been given
    pub is_saved: Option<bool>,
    pub application_status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetails {
    pub job: JobComposite,
    pub application_status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployerJob {
    pub job: Job,
    pub application_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCreateRequest {
    pub title: JobTitle,
    pub description: JobDescription,
    pub requirements: JobRequirements,
    pub location: JobLocation,
    pub category: JobCategory,
    pub job_type: JobType,
    pub salary_min: Salary,
    pub salary_max: Salary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobUpdateRequest {
    pub title: PatchValue<JobTitle>,
    pub description: PatchValue<JobDescription>,
    pub requirements: PatchValue<JobRequirements>,
    pub location: PatchValue<JobLocation>,
    pub category: PatchValue<JobCategory>,
    pub job_type: PatchValue<JobType>,
    pub salary_min: PatchValue<Salary>,
    pub salary_max: PatchValue<Salary>,
    pub is_closed: PatchValue<bool>,
}

#[derive(Debug, Error)]
pub enum JobListError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobGetError {
    #[error("The job does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobCreateError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobUpdateError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The job does not exist.")]
    NotFound,
    #[error("The job is owned by another company.")]
    Forbidden,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobDeleteError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The job does not exist.")]
    NotFound,
    #[error("The job is owned by another company.")]
    Forbidden,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobToggleCloseError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The job does not exist.")]
    NotFound,
    #[error("The job is owned by another company.")]
    Forbidden,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobListEmployerError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

macro_rules! from_ownership_error {
    ($($ident:ident),* $(,)?) => {$(
        impl From<ownership::JobOwnershipError> for $ident {
            fn from(err: ownership::JobOwnershipError) -> Self {
                match err {
                    ownership::JobOwnershipError::NotFound => Self::NotFound,
                    ownership::JobOwnershipError::Forbidden => Self::Forbidden,
                    ownership::JobOwnershipError::Other(err) => Self::Other(err),
                }
            }
        }
    )*};
}

from_ownership_error!(JobUpdateError, JobDeleteError, JobToggleCloseError);
