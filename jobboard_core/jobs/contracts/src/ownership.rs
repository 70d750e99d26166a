use std::future::Future;

use jobboard_models::{
    job::{Job, JobId},
    user::UserId,
};
use thiserror::Error;

/// Guards every mutation of a job.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobOwnershipService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the job if it exists and is owned by the given user.
    fn get_owned(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        user_id: UserId,
    ) -> impl Future<Output = Result<Job, JobOwnershipError>> + Send;
}

#[derive(Debug, Error)]
pub enum JobOwnershipError {
    #[error("The job does not exist.")]
    NotFound,
    #[error("The job is owned by another company.")]
    Forbidden,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockJobOwnershipService<Txn> {
    pub fn with_get_owned(
        mut self,
        job_id: JobId,
        user_id: UserId,
        result: Result<Job, JobOwnershipError>,
    ) -> Self {
        self.expect_get_owned()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(user_id),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
