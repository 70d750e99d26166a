use jobboard_auth_contracts::MockAuthService;
use jobboard_core_saved_jobs_contracts::SavedJobFeatureService;
use jobboard_demo::{
    job::{composite, ACME_INTERN},
    saved_job::{FOO_SAVED_INTERN, FOO_SAVED_SUPPORT},
    user::{ACME, FOO},
};
use jobboard_models::saved_job::SavedJobComposite;
use jobboard_persistence_contracts::{saved_job::MockSavedJobRepository, MockDatabase};
use pretty_assertions::assert_eq;

use crate::{tests::Sut, SavedJobFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let expected = vec![
        SavedJobComposite {
            saved_job: FOO_SAVED_INTERN.clone(),
            job: Some(composite(&ACME_INTERN)),
        },
        SavedJobComposite {
            saved_job: FOO_SAVED_SUPPORT.clone(),
            job: None,
        },
    ];

    let auth = MockAuthService::new().with_authenticate(Some((FOO.id, FOO.role)));

    let db = MockDatabase::build(false);

    let saved_job_repo =
        MockSavedJobRepository::new().with_list_by_jobseeker(FOO.id, expected.clone());

    let sut = SavedJobFeatureServiceImpl {
        db,
        auth,
        saved_job_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_saved_jobs("token").await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn any_role() {
    // Arrange
    let auth = MockAuthService::new().with_authenticate(Some((ACME.id, ACME.role)));

    let db = MockDatabase::build(false);

    let saved_job_repo = MockSavedJobRepository::new().with_list_by_jobseeker(ACME.id, vec![]);

    let sut = SavedJobFeatureServiceImpl {
        db,
        auth,
        saved_job_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_saved_jobs("token").await;

    // Assert
    assert!(result.unwrap().is_empty());
}
