use std::{collections::HashMap, future::Future};

use jobboard_models::{application::ApplicationStatus, job::JobId, user::UserId};

/// Read-only lookups of the applications submitted to jobs.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ApplicationStatusService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the status of the applicant's application for each of the given
    /// jobs. Jobs the applicant never applied to are missing from the map.
    ///
    /// If the applicant applied to the same job more than once, the most
    /// recent application wins.
    fn status_map(
        &self,
        txn: &mut Txn,
        applicant_id: UserId,
        job_ids: &[JobId],
    ) -> impl Future<Output = anyhow::Result<HashMap<JobId, ApplicationStatus>>> + Send;

    /// Return the status of the applicant's application for the given job.
    fn status_of(
        &self,
        txn: &mut Txn,
        applicant_id: UserId,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<ApplicationStatus>>> + Send;

    /// Return the number of applications for each of the given jobs. Every
    /// job id is present in the result.
    fn count_by_jobs(
        &self,
        txn: &mut Txn,
        job_ids: &[JobId],
    ) -> impl Future<Output = anyhow::Result<HashMap<JobId, u64>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockApplicationStatusService<Txn> {
    pub fn with_status_map(
        mut self,
        applicant_id: UserId,
        job_ids: Vec<JobId>,
        result: HashMap<JobId, ApplicationStatus>,
    ) -> Self {
        self.expect_status_map()
            .once()
            .withf(move |_, applicant, ids| {
                *applicant == applicant_id && ids.iter().eq(job_ids.iter())
            })
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_status_of(
        mut self,
        applicant_id: UserId,
        job_id: JobId,
        result: Option<ApplicationStatus>,
    ) -> Self {
        self.expect_status_of()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(applicant_id),
                mockall::predicate::eq(job_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count_by_jobs(mut self, job_ids: Vec<JobId>, result: HashMap<JobId, u64>) -> Self {
        self.expect_count_by_jobs()
            .once()
            .withf(move |_, ids| ids.iter().eq(job_ids.iter()))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
