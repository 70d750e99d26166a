use jobboard_core_jobs_contracts::ownership::{JobOwnershipError, JobOwnershipService};
use jobboard_di::Build;
use jobboard_models::{
    job::{Job, JobId},
    user::UserId,
};
use jobboard_persistence_contracts::job::JobRepository;
use jobboard_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct JobOwnershipServiceImpl<JobRepo> {
    job_repo: JobRepo,
}

impl<Txn, JobRepo> JobOwnershipService<Txn> for JobOwnershipServiceImpl<JobRepo>
where
    Txn: Send + Sync + 'static,
    JobRepo: JobRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn get_owned(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        user_id: UserId,
    ) -> Result<Job, JobOwnershipError> {
        let job = self
            .job_repo
            .get(txn, job_id)
            .await?
            .ok_or(JobOwnershipError::NotFound)?;

        if !job.is_owned_by(user_id) {
            return Err(JobOwnershipError::Forbidden);
        }

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use jobboard_demo::{
        job::{ACME_BACKEND, GLOBEX_SUPPORT},
        user::{ACME, GLOBEX},
    };
    use jobboard_persistence_contracts::job::MockJobRepository;
    use jobboard_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let job_repo =
            MockJobRepository::new().with_get(ACME_BACKEND.id, Some(ACME_BACKEND.clone()));

        let sut = JobOwnershipServiceImpl { job_repo };

        // Act
        let result = sut.get_owned(&mut (), ACME_BACKEND.id, ACME.id).await;

        // Assert
        assert_eq!(result.unwrap(), *ACME_BACKEND);
    }

    #[tokio::test]
    async fn not_found() {
        // Arrange
        let job_repo = MockJobRepository::new().with_get(ACME_BACKEND.id, None);

        let sut = JobOwnershipServiceImpl { job_repo };

        // Act
        let result = sut.get_owned(&mut (), ACME_BACKEND.id, GLOBEX.id).await;

        // Assert
        assert_matches!(result, Err(JobOwnershipError::NotFound));
    }

    #[tokio::test]
    async fn owned_by_other_company() {
        // Arrange
        let job_repo =
            MockJobRepository::new().with_get(GLOBEX_SUPPORT.id, Some(GLOBEX_SUPPORT.clone()));

        let sut = JobOwnershipServiceImpl { job_repo };

        // Act
        let result = sut.get_owned(&mut (), GLOBEX_SUPPORT.id, ACME.id).await;

        // Assert
        assert_matches!(result, Err(JobOwnershipError::Forbidden));
    }
}
