use std::{collections::HashMap, future::Future};

use jobboard_models::{
    application::{Application, ApplicationComposite, ApplicationCountFilter, ApplicationStatus},
    job::JobId,
    user::UserId,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ApplicationRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the status of the most recent application of the given
    /// applicant for each of the given jobs. Jobs without an application are
    /// absent from the map.
    fn list_statuses(
        &self,
        txn: &mut Txn,
        applicant_id: UserId,
        job_ids: &[JobId],
    ) -> impl Future<Output = anyhow::Result<HashMap<JobId, ApplicationStatus>>> + Send;

    /// Return the number of applications for each of the given jobs. Jobs
    /// without applications are absent from the map.
    fn count_by_jobs(
        &self,
        txn: &mut Txn,
        job_ids: &[JobId],
    ) -> impl Future<Output = anyhow::Result<HashMap<JobId, u64>>> + Send;

    /// Count the applications to any job of the given company.
    fn count_by_company(
        &self,
        txn: &mut Txn,
        company_id: UserId,
        filter: &ApplicationCountFilter,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Return at most `limit` applications to jobs of the given company,
    /// newest first.
    fn list_recent_by_company(
        &self,
        txn: &mut Txn,
        company_id: UserId,
        limit: u64,
    ) -> impl Future<Output = anyhow::Result<Vec<ApplicationComposite>>> + Send;

    fn create(
        &self,
        txn: &mut Txn,
        application: &Application,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockApplicationRepository<Txn> {
    pub fn with_list_statuses(
        mut self,
        applicant_id: UserId,
        job_ids: Vec<JobId>,
        result: HashMap<JobId, ApplicationStatus>,
    ) -> Self {
        self.expect_list_statuses()
            .once()
            .withf(move |_, applicant, ids| {
                *applicant == applicant_id && ids.iter().eq(job_ids.iter())
            })
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count_by_jobs(mut self, job_ids: Vec<JobId>, result: HashMap<JobId, u64>) -> Self {
        self.expect_count_by_jobs()
            .once()
            .withf(move |_, ids| ids.iter().eq(job_ids.iter()))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count_by_company(
        mut self,
        company_id: UserId,
        filter: ApplicationCountFilter,
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

    pub fn with_list_recent_by_company(
        mut self,
        company_id: UserId,
        limit: u64,
        result: Vec<ApplicationComposite>,
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
}
