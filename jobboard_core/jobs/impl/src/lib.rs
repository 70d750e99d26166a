use jobboard_auth_contracts::{AuthResultExt, AuthService};
use jobboard_core_applications_contracts::ApplicationStatusService;
use jobboard_core_jobs_contracts::{
    ownership::JobOwnershipService, EmployerJob, JobCreateError, JobCreateRequest, JobDeleteError,
    JobDetails, JobFeatureService, JobGetError, JobListEmployerError, JobListError,
    JobToggleCloseError, JobUpdateError, JobUpdateRequest, ListedJob,
};
use jobboard_di::Build;
use jobboard_models::{
    job::{Job, JobFilter, JobId, JobPatch},
    user::UserId,
};
use jobboard_persistence_contracts::{
    job::JobRepository, saved_job::SavedJobRepository, Database, Transaction,
};
use jobboard_shared_contracts::{id::IdService, time::TimeService};
use jobboard_utils::{
    patch::{Patch, PatchValue},
    trace_instrument,
};

pub mod ownership;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct JobFeatureServiceImpl<
    Db,
    Auth,
    Id,
    Time,
    JobRepo,
    SavedJobRepo,
    ApplicationStatus,
    JobOwnership,
> {
    db: Db,
    auth: Auth,
    id: Id,
    time: Time,
    job_repo: JobRepo,
    saved_job_repo: SavedJobRepo,
    application_status: ApplicationStatus,
    job_ownership: JobOwnership,
}

impl<Db, Auth, Id, Time, JobRepo, SavedJobRepo, ApplicationStatus, JobOwnership>
    JobFeatureService
    for JobFeatureServiceImpl<
        Db,
        Auth,
        Id,
        Time,
        JobRepo,
        SavedJobRepo,
        ApplicationStatus,
        JobOwnership,
    >
where
    Db: Database,
    Auth: AuthService,
    Id: IdService,
    Time: TimeService,
    JobRepo: JobRepository<Db::Transaction>,
    SavedJobRepo: SavedJobRepository<Db::Transaction>,
    ApplicationStatus: ApplicationStatusService<Db::Transaction>,
    JobOwnership: JobOwnershipService<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_jobs(
        &self,
        filter: JobFilter,
        viewer: Option<UserId>,
    ) -> Result<Vec<ListedJob>, JobListError> {
        let mut txn = self.db.begin_transaction().await?;

        let jobs = self.job_repo.list(&mut txn, &filter).await?;

        let Some(viewer) = viewer else {
            return Ok(jobs
                .into_iter()
                .map(|job| ListedJob {
                    job,
                    is_saved: None,
                    application_status: None,
                })
                .collect());
        };

        let job_ids = jobs.iter().map(|x| x.job.id).collect::<Vec<_>>();

        let saved = self
            .saved_job_repo
            .list_job_ids(&mut txn, viewer, &job_ids)
            .await?;

        let mut statuses = self
            .application_status
            .status_map(&mut txn, viewer, &job_ids)
            .await?;

        Ok(jobs
            .into_iter()
            .map(|job| ListedJob {
                is_saved: Some(saved.contains(&job.job.id)),
                application_status: statuses.remove(&job.job.id),
                job,
            })
            .collect())
    }

    #[trace_instrument(skip(self))]
    async fn get_job(
        &self,
        job_id: JobId,
        viewer: Option<UserId>,
    ) -> Result<JobDetails, JobGetError> {
        let mut txn = self.db.begin_transaction().await?;

        let job = self
            .job_repo
            .get_composite(&mut txn, job_id)
            .await?
            .ok_or(JobGetError::NotFound)?;

        let application_status = match viewer {
            Some(viewer) => {
                self.application_status
                    .status_of(&mut txn, viewer, job_id)
                    .await?
            }
            None => None,
        };

        Ok(JobDetails {
            job,
            application_status,
        })
    }

    #[trace_instrument(skip(self, token))]
    async fn create_job(
        &self,
        token: &str,
        request: JobCreateRequest,
    ) -> Result<Job, JobCreateError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;
        auth.ensure_employer().map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        let now = self.time.now();
        let job = Job {
            id: self.id.generate(),
            company_id: auth.user_id,
            title: request.title,
            description: request.description,
            requirements: request.requirements,
            location: request.location,
            category: request.category,
            job_type: request.job_type,
            salary_min: request.salary_min,
            salary_max: request.salary_max,
            is_closed: false,
            created_at: now,
            updated_at: now,
        };

        self.job_repo.create(&mut txn, &job).await?;

        txn.commit().await?;

        Ok(job)
    }

    #[trace_instrument(skip(self, token))]
    async fn update_job(
        &self,
        token: &str,
        job_id: JobId,
        request: JobUpdateRequest,
    ) -> Result<Job, JobUpdateError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        let job = self
            .job_ownership
            .get_owned(&mut txn, job_id, auth.user_id)
            .await?;

        let patch = JobPatch {
            title: request.title,
            description: request.description,
            requirements: request.requirements,
            location: request.location,
            category: request.category,
            job_type: request.job_type,
            salary_min: request.salary_min,
            salary_max: request.salary_max,
            is_closed: request.is_closed,
            updated_at: PatchValue::Update(self.time.now()),
        };

        if !self.job_repo.update(&mut txn, job_id, &patch).await? {
            return Err(JobUpdateError::NotFound);
        }

        txn.commit().await?;

        Ok(job.update(patch))
    }

    #[trace_instrument(skip(self, token))]
    async fn delete_job(&self, token: &str, job_id: JobId) -> Result<(), JobDeleteError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        self.job_ownership
            .get_owned(&mut txn, job_id, auth.user_id)
            .await?;

        if !self.job_repo.delete(&mut txn, job_id).await? {
            return Err(JobDeleteError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }

    #[trace_instrument(skip(self, token))]
    async fn toggle_close(&self, token: &str, job_id: JobId) -> Result<Job, JobToggleCloseError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        self.job_ownership
            .get_owned(&mut txn, job_id, auth.user_id)
            .await?;

        let job = self
            .job_repo
            .toggle_closed(&mut txn, job_id, self.time.now())
            .await?
            .ok_or(JobToggleCloseError::NotFound)?;

        txn.commit().await?;

        Ok(job)
    }

    #[trace_instrument(skip(self, token))]
    async fn list_employer_jobs(
        &self,
        token: &str,
    ) -> Result<Vec<EmployerJob>, JobListEmployerError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;
        auth.ensure_employer().map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        let jobs = self
            .job_repo
            .list_by_company(&mut txn, auth.user_id)
            .await?;

        let job_ids = jobs.iter().map(|x| x.id).collect::<Vec<_>>();
        let counts = self
            .application_status
            .count_by_jobs(&mut txn, &job_ids)
            .await?;

        Ok(jobs
            .into_iter()
            .map(|job| EmployerJob {
                application_count: counts.get(&job.id).copied().unwrap_or(0),
                job,
            })
            .collect())
    }
}
