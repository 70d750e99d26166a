use jobboard_auth_contracts::{AuthResultExt, AuthService};
use jobboard_core_saved_jobs_contracts::{
    SavedJobFeatureService, SavedJobListError, SavedJobSaveError, SavedJobUnsaveError,
};
use jobboard_di::Build;
use jobboard_models::{
    job::JobId,
    saved_job::{SavedJob, SavedJobComposite},
};
use jobboard_persistence_contracts::{
    job::JobRepository,
    saved_job::{SavedJobRepoError, SavedJobRepository},
    Database, Transaction,
};
use jobboard_shared_contracts::{id::IdService, time::TimeService};
use jobboard_utils::trace_instrument;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct SavedJobFeatureServiceImpl<Db, Auth, Id, Time, JobRepo, SavedJobRepo> {
    db: Db,
    auth: Auth,
    id: Id,
    time: Time,
    job_repo: JobRepo,
    saved_job_repo: SavedJobRepo,
}

impl<Db, Auth, Id, Time, JobRepo, SavedJobRepo> SavedJobFeatureService
    for SavedJobFeatureServiceImpl<Db, Auth, Id, Time, JobRepo, SavedJobRepo>
where
    Db: Database,
    Auth: AuthService,
    Id: IdService,
    Time: TimeService,
    JobRepo: JobRepository<Db::Transaction>,
    SavedJobRepo: SavedJobRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self, token))]
    async fn save_job(&self, token: &str, job_id: JobId) -> Result<SavedJob, SavedJobSaveError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;
        auth.ensure_jobseeker().map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        if self.job_repo.get(&mut txn, job_id).await?.is_none() {
            return Err(SavedJobSaveError::NotFound);
        }

        if self
            .saved_job_repo
            .exists(&mut txn, job_id, auth.user_id)
            .await?
        {
            return Err(SavedJobSaveError::Conflict);
        }

        let saved_job = SavedJob {
            id: self.id.generate(),
            job_id,
            jobseeker_id: auth.user_id,
            created_at: self.time.now(),
        };

        self.saved_job_repo
            .create(&mut txn, &saved_job)
            .await
            .map_err(|err| match err {
                SavedJobRepoError::Conflict => SavedJobSaveError::Conflict,
                SavedJobRepoError::Other(err) => err.into(),
            })?;

        txn.commit().await?;

        Ok(saved_job)
    }

    #[trace_instrument(skip(self, token))]
    async fn unsave_job(&self, token: &str, job_id: JobId) -> Result<(), SavedJobUnsaveError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;
        auth.ensure_jobseeker().map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        self.saved_job_repo
            .delete(&mut txn, job_id, auth.user_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    #[trace_instrument(skip(self, token))]
    async fn list_saved_jobs(
        &self,
        token: &str,
    ) -> Result<Vec<SavedJobComposite>, SavedJobListError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;

        self.saved_job_repo
            .list_by_jobseeker(&mut txn, auth.user_id)
            .await
            .map_err(Into::into)
    }
}
