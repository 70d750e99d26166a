use std::collections::HashMap;

use jobboard_core_applications_contracts::ApplicationStatusService;
use jobboard_di::Build;
use jobboard_models::{application::ApplicationStatus, job::JobId, user::UserId};
use jobboard_persistence_contracts::application::ApplicationRepository;
use jobboard_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ApplicationStatusServiceImpl<ApplicationRepo> {
    application_repo: ApplicationRepo,
}

impl<Txn, ApplicationRepo> ApplicationStatusService<Txn>
    for ApplicationStatusServiceImpl<ApplicationRepo>
where
    Txn: Send + Sync + 'static,
    ApplicationRepo: ApplicationRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn status_map(
        &self,
        txn: &mut Txn,
        applicant_id: UserId,
        job_ids: &[JobId],
    ) -> anyhow::Result<HashMap<JobId, ApplicationStatus>> {
        if job_ids.is_empty() {
            return Ok(HashMap::new());
        }

        self.application_repo
            .list_statuses(txn, applicant_id, job_ids)
            .await
    }

    #[trace_instrument(skip(self, txn))]
    async fn status_of(
        &self,
        txn: &mut Txn,
        applicant_id: UserId,
        job_id: JobId,
    ) -> anyhow::Result<Option<ApplicationStatus>> {
        self.application_repo
            .list_statuses(txn, applicant_id, &[job_id])
            .await
            .map(|mut statuses| statuses.remove(&job_id))
    }

    #[trace_instrument(skip(self, txn))]
    async fn count_by_jobs(
        &self,
        txn: &mut Txn,
        job_ids: &[JobId],
    ) -> anyhow::Result<HashMap<JobId, u64>> {
        if job_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = self.application_repo.count_by_jobs(txn, job_ids).await?;

        Ok(job_ids
            .iter()
            .map(|&id| (id, counts.get(&id).copied().unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use jobboard_demo::{
        job::{ACME_BACKEND, ACME_DESIGNER, ACME_INTERN, GLOBEX_SUPPORT},
        user::{BAR, FOO},
    };
    use jobboard_persistence_contracts::application::MockApplicationRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut = ApplicationStatusServiceImpl<MockApplicationRepository<()>>;

    #[tokio::test]
    async fn status_map() {
        // Arrange
        let job_ids = vec![ACME_BACKEND.id, GLOBEX_SUPPORT.id, ACME_DESIGNER.id];
        let expected = HashMap::from([
            (ACME_BACKEND.id, ApplicationStatus::Hired),
            (GLOBEX_SUPPORT.id, ApplicationStatus::Reviewed),
        ]);

        let application_repo = MockApplicationRepository::new().with_list_statuses(
            FOO.id,
            job_ids.clone(),
            expected.clone(),
        );

        let sut = ApplicationStatusServiceImpl { application_repo };

        // Act
        let result = sut.status_map(&mut (), FOO.id, &job_ids).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn status_map_without_jobs() {
        // Arrange
        let sut = Sut::default();

        // Act
        let result = sut.status_map(&mut (), FOO.id, &[]).await;

        // Assert
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn status_of_applied() {
        // Arrange
        let application_repo = MockApplicationRepository::new().with_list_statuses(
            BAR.id,
            vec![ACME_BACKEND.id],
            HashMap::from([(ACME_BACKEND.id, ApplicationStatus::Applied)]),
        );

        let sut = ApplicationStatusServiceImpl { application_repo };

        // Act
        let result = sut.status_of(&mut (), BAR.id, ACME_BACKEND.id).await;

        // Assert
        assert_eq!(result.unwrap(), Some(ApplicationStatus::Applied));
    }

    #[tokio::test]
    async fn status_of_never_applied() {
        // Arrange
        let application_repo = MockApplicationRepository::new().with_list_statuses(
            BAR.id,
            vec![GLOBEX_SUPPORT.id],
            HashMap::new(),
        );

        let sut = ApplicationStatusServiceImpl { application_repo };

        // Act
        let result = sut.status_of(&mut (), BAR.id, GLOBEX_SUPPORT.id).await;

        // Assert
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn count_by_jobs_fills_missing_jobs() {
        // Arrange
        let job_ids = vec![ACME_BACKEND.id, ACME_DESIGNER.id, ACME_INTERN.id];

        let application_repo = MockApplicationRepository::new().with_count_by_jobs(
            job_ids.clone(),
            HashMap::from([(ACME_BACKEND.id, 2), (ACME_INTERN.id, 1)]),
        );

        let sut = ApplicationStatusServiceImpl { application_repo };

        // Act
        let result = sut.count_by_jobs(&mut (), &job_ids).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            HashMap::from([
                (ACME_BACKEND.id, 2),
                (ACME_DESIGNER.id, 0),
                (ACME_INTERN.id, 1),
            ])
        );
    }
}
