use std::{collections::HashSet, future::Future};

use jobboard_models::{
    job::JobId,
    saved_job::{SavedJob, SavedJobComposite},
    user::UserId,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SavedJobRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    fn exists(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        jobseeker_id: UserId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn create(
        &self,
        txn: &mut Txn,
        saved_job: &SavedJob,
    ) -> impl Future<Output = Result<(), SavedJobRepoError>> + Send;

    /// Delete the bookmark. Returns `false` if it did not exist.
    fn delete(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        jobseeker_id: UserId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Return the subset of the given jobs the jobseeker has saved.
    fn list_job_ids(
        &self,
        txn: &mut Txn,
        jobseeker_id: UserId,
        job_ids: &[JobId],
    ) -> impl Future<Output = anyhow::Result<HashSet<JobId>>> + Send;

    /// Return all bookmarks of the jobseeker with their jobs, newest first.
    fn list_by_jobseeker(
        &self,
        txn: &mut Txn,
        jobseeker_id: UserId,
    ) -> impl Future<Output = anyhow::Result<Vec<SavedJobComposite>>> + Send;
}

#[derive(Debug, Error)]
pub enum SavedJobRepoError {
    #[error("The job has already been saved by this jobseeker.")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockSavedJobRepository<Txn> {
    pub fn with_exists(mut self, job_id: JobId, jobseeker_id: UserId, result: bool) -> Self {
        self.expect_exists()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(jobseeker_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, saved_job: SavedJob, conflict: bool) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(saved_job),
            )
            .return_once(move |_, _| {
                Box::pin(std::future::ready(if conflict {
                    Err(SavedJobRepoError::Conflict)
                } else {
                    Ok(())
                }))
            });
        self
    }

    pub fn with_delete(mut self, job_id: JobId, jobseeker_id: UserId, result: bool) -> Self {
        self.expect_delete()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(jobseeker_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_job_ids(
        mut self,
        jobseeker_id: UserId,
        job_ids: Vec<JobId>,
        result: HashSet<JobId>,
    ) -> Self {
        self.expect_list_job_ids()
            .once()
            .withf(move |_, jobseeker, ids| {
                *jobseeker == jobseeker_id && ids.iter().eq(job_ids.iter())
            })
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_by_jobseeker(
        mut self,
        jobseeker_id: UserId,
        result: Vec<SavedJobComposite>,
    ) -> Self {
        self.expect_list_by_jobseeker()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(jobseeker_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
