use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use jobboard_demo::{
    job::{composite, ACME_BACKEND, ACME_INTERN, GLOBEX_SUPPORT},
    saved_job::{FOO_SAVED_INTERN, FOO_SAVED_SUPPORT},
    user::FOO,
    UUID1,
};
use jobboard_models::saved_job::{SavedJob, SavedJobComposite};
use jobboard_persistence_contracts::{
    job::JobRepository,
    saved_job::{SavedJobRepoError, SavedJobRepository},
    Database,
};
use jobboard_persistence_postgres::{
    job::PostgresJobRepository, saved_job::PostgresSavedJobRepository,
};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresSavedJobRepository = PostgresSavedJobRepository;

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn exists() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    assert!(REPO.exists(&mut txn, ACME_INTERN.id, FOO.id).await.unwrap());
    assert!(!REPO.exists(&mut txn, ACME_BACKEND.id, FOO.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn create_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let saved_job = SavedJob {
        id: UUID1.into(),
        created_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        ..FOO_SAVED_INTERN.clone()
    };

    let result = REPO.create(&mut txn, &saved_job).await;
    assert_matches!(result, Err(SavedJobRepoError::Conflict));
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn create_and_delete() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let saved_job = SavedJob {
        id: UUID1.into(),
        job_id: ACME_BACKEND.id,
        jobseeker_id: FOO.id,
        created_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
    };
    REPO.create(&mut txn, &saved_job).await.unwrap();
    assert!(REPO.exists(&mut txn, ACME_BACKEND.id, FOO.id).await.unwrap());

    assert!(REPO.delete(&mut txn, ACME_BACKEND.id, FOO.id).await.unwrap());
    assert!(!REPO.exists(&mut txn, ACME_BACKEND.id, FOO.id).await.unwrap());
    assert!(!REPO.delete(&mut txn, ACME_BACKEND.id, FOO.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_job_ids() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .list_job_ids(
            &mut txn,
            FOO.id,
            &[ACME_BACKEND.id, GLOBEX_SUPPORT.id, ACME_INTERN.id],
        )
        .await
        .unwrap();
    assert_eq!(result, HashSet::from([GLOBEX_SUPPORT.id, ACME_INTERN.id]));
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_by_jobseeker() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list_by_jobseeker(&mut txn, FOO.id).await.unwrap();
    assert_eq!(
        result,
        [
            SavedJobComposite {
                saved_job: FOO_SAVED_INTERN.clone(),
                job: Some(composite(&ACME_INTERN)),
            },
            SavedJobComposite {
                saved_job: FOO_SAVED_SUPPORT.clone(),
                job: Some(composite(&GLOBEX_SUPPORT)),
            },
        ]
    );
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_by_jobseeker_with_deleted_job() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    PostgresJobRepository
        .delete(&mut txn, ACME_INTERN.id)
        .await
        .unwrap();

    let result = REPO.list_by_jobseeker(&mut txn, FOO.id).await.unwrap();
    assert_eq!(
        result,
        [
            SavedJobComposite {
                saved_job: FOO_SAVED_INTERN.clone(),
                job: None,
            },
            SavedJobComposite {
                saved_job: FOO_SAVED_SUPPORT.clone(),
                job: Some(composite(&GLOBEX_SUPPORT)),
            },
        ]
    );
}
