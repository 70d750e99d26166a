use jobboard_auth_contracts::MockAuthService;
use jobboard_core_jobs_contracts::{
    ownership::{JobOwnershipError, MockJobOwnershipService},
    JobFeatureService, JobToggleCloseError,
};
use jobboard_demo::{
    job::{ACME_DESIGNER, ACME_INTERN},
    user::{ACME, BAR},
};
use jobboard_models::job::Job;
use jobboard_persistence_contracts::{job::MockJobRepository, MockDatabase};
use jobboard_shared_contracts::time::MockTimeService;
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, JobFeatureServiceImpl};

#[tokio::test]
async fn close() {
    // Arrange
    let now = ACME_DESIGNER.updated_at;
    let expected = Job {
        is_closed: true,
        updated_at: now,
        ..ACME_INTERN.clone()
    };

    let auth = MockAuthService::new().with_authenticate(Some((ACME.id, ACME.role)));

    let db = MockDatabase::build(true);

    let time = MockTimeService::new().with_now(now);

    let job_ownership = MockJobOwnershipService::new().with_get_owned(
        ACME_INTERN.id,
        ACME.id,
        Ok(ACME_INTERN.clone()),
    );

    let job_repo =
        MockJobRepository::new().with_toggle_closed(ACME_INTERN.id, now, Some(expected.clone()));

    let sut = JobFeatureServiceImpl {
        auth,
        db,
        time,
        job_repo,
        job_ownership,
        ..Sut::default()
    };

    // Act
    let result = sut.toggle_close("token", ACME_INTERN.id).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn reopen() {
    // Arrange
    let now = ACME_INTERN.created_at;
    let expected = Job {
        is_closed: false,
        updated_at: now,
        ..ACME_DESIGNER.clone()
    };

    let auth = MockAuthService::new().with_authenticate(Some((ACME.id, ACME.role)));

    let db = MockDatabase::build(true);

    let time = MockTimeService::new().with_now(now);

    let job_ownership = MockJobOwnershipService::new().with_get_owned(
        ACME_DESIGNER.id,
        ACME.id,
        Ok(ACME_DESIGNER.clone()),
    );

    let job_repo = MockJobRepository::new().with_toggle_closed(
        ACME_DESIGNER.id,
        now,
        Some(expected.clone()),
    );

    let sut = JobFeatureServiceImpl {
        auth,
        db,
        time,
        job_repo,
        job_ownership,
        ..Sut::default()
    };

    // Act
    let result = sut.toggle_close("token", ACME_DESIGNER.id).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn forbidden() {
    // Arrange
    let auth = MockAuthService::new().with_authenticate(Some((BAR.id, BAR.role)));

    let db = MockDatabase::build(false);

    let job_ownership = MockJobOwnershipService::new().with_get_owned(
        ACME_INTERN.id,
        BAR.id,
        Err(JobOwnershipError::Forbidden),
    );

    let sut = JobFeatureServiceImpl {
        auth,
        db,
        job_ownership,
        ..Sut::default()
    };

    // Act
    let result = sut.toggle_close("token", ACME_INTERN.id).await;

    // Assert
    assert_matches!(result, Err(JobToggleCloseError::Forbidden));
}

#[tokio::test]
async fn not_found() {
    // Arrange
    let auth = MockAuthService::new().with_authenticate(Some((ACME.id, ACME.role)));

    let db = MockDatabase::build(false);

    let job_ownership = MockJobOwnershipService::new().with_get_owned(
        ACME_INTERN.id,
        ACME.id,
        Err(JobOwnershipError::NotFound),
    );

    let sut = JobFeatureServiceImpl {
        auth,
        db,
        job_ownership,
        ..Sut::default()
    };

    // Act
    let result = sut.toggle_close("token", ACME_INTERN.id).await;

    // Assert
    assert_matches!(result, Err(JobToggleCloseError::NotFound));
}
