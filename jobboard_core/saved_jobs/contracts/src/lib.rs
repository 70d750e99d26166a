use std::future::Future;

use jobboard_models::{
    auth::AuthError,
    job::JobId,
    saved_job::{SavedJob, SavedJobComposite},
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SavedJobFeatureService: Send + Sync + 'static {
    /// Add a job to the saved list of the authenticated jobseeker.
    fn save_job(
        &self,
        token: &str,
        job_id: JobId,
    ) -> impl Future<Output = Result<SavedJob, SavedJobSaveError>> + Send;

    /// Remove a job from the saved list of the authenticated jobseeker.
    ///
    /// Succeeds even if the job has never been saved.
    fn unsave_job(
        &self,
        token: &str,
        job_id: JobId,
    ) -> impl Future<Output = Result<(), SavedJobUnsaveError>> + Send;

    /// Return the saved jobs of the authenticated user, newest first.
    fn list_saved_jobs(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<SavedJobComposite>, SavedJobListError>> + Send;
}

#[derive(Debug, Error)]
pub enum SavedJobSaveError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The job does not exist.")]
    NotFound,
    #[error("The job has already been saved.")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum SavedJobUnsaveError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum SavedJobListError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
