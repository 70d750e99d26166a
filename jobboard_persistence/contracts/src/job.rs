use std::future::Future;

use chrono::{DateTime, Utc};
use jobboard_models::{
    job::{Job, JobComposite, JobCountFilter, JobFilter, JobId, JobPatch},
    user::UserId,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return all open jobs matching the given filter together with their
    /// company, newest first.
    fn list(
        &self,
        txn: &mut Txn,
        filter: &JobFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<JobComposite>>> + Send;

    fn get(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<Job>>> + Send;

    /// Return the job with the given id together with its company.
    fn get_composite(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<JobComposite>>> + Send;

    /// Return all jobs (open and closed) posted by the given company, newest
    /// first.
    fn list_by_company(
        &self,
        txn: &mut Txn,
        company_id: UserId,
    ) -> impl Future<Output = anyhow::Result<Vec<Job>>> + Send;

    /// Return at most `limit` jobs posted by the given company, newest first.
    fn list_recent_by_company(
        &self,
        txn: &mut Txn,
        company_id: UserId,
        limit: u64,
    ) -> impl Future<Output = anyhow::Result<Vec<Job>>> + Send;

    fn count_by_company(
        &self,
        txn: &mut Txn,
        company_id: UserId,
        filter: &JobCountFilter,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;

    fn create(&self, txn: &mut Txn, job: &Job) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Apply the given patch. Returns `false` if the job does not exist.
    fn update(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        patch: &JobPatch,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Flip the closed flag in a single statement and return the updated job.
    fn toggle_closed(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<Option<Job>>> + Send;

    /// Delete the job. Returns `false` if the job does not exist.
    fn delete(&self, txn: &mut Txn, job_id: JobId)
        -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockJobRepository<Txn> {
    pub fn with_list(mut self, filter: JobFilter, result: Vec<JobComposite>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(filter))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(mut self, job_id: JobId, result: Option<Job>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job_id))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_composite(mut self, job_id: JobId, result: Option<JobComposite>) -> Self {
        self.expect_get_composite()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job_id))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_by_company(mut self, company_id: UserId, result: Vec<Job>) -> Self {
        self.expect_list_by_company()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(company_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_recent_by_company(
        mut self,
        company_id: UserId,
        limit: u64,
        result: Vec<Job>,
    ) -> Self {
        self.expect_list_recent_by_company()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(company_id),
                mockall::predicate::eq(limit),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count_by_company(
        mut self,
        company_id: UserId,
        filter: JobCountFilter,
        result: u64,
    ) -> Self {
        self.expect_count_by_company()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(company_id),
                mockall::predicate::eq(filter),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, job: Job) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_update(mut self, job_id: JobId, patch: JobPatch, result: bool) -> Self {
        self.expect_update()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(patch),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_toggle_closed(
        mut self,
        job_id: JobId,
        updated_at: DateTime<Utc>,
        result: Option<Job>,
    ) -> Self {
        self.expect_toggle_closed()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(updated_at),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_delete(mut self, job_id: JobId, result: bool) -> Self {
        self.expect_delete()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job_id))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
