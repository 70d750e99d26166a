use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use jobboard_demo::{
    application::{composite, BAR_BACKEND, BAR_INTERN, FOO_BACKEND},
    job::{ACME_BACKEND, ACME_DESIGNER, ACME_INTERN, GLOBEX_SUPPORT},
    user::{ACME, FOO, GLOBEX},
    UUID1,
};
use jobboard_models::{
    application::{Application, ApplicationCountFilter, ApplicationStatus},
    TimeRange,
};
use jobboard_persistence_contracts::{
    application::ApplicationRepository, job::JobRepository, Database,
};
use jobboard_persistence_postgres::{
    application::PostgresApplicationRepository, job::PostgresJobRepository,
};
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresApplicationRepository = PostgresApplicationRepository;

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_statuses() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let job_ids = [ACME_BACKEND.id, GLOBEX_SUPPORT.id, ACME_INTERN.id];

    let result = REPO
        .list_statuses(&mut txn, FOO.id, &job_ids)
        .await
        .unwrap();
    assert_eq!(
        result,
        HashMap::from([
            (ACME_BACKEND.id, ApplicationStatus::Hired),
            (GLOBEX_SUPPORT.id, ApplicationStatus::Reviewed),
        ])
    );

    let result = REPO.list_statuses(&mut txn, FOO.id, &[]).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_statuses_prefers_latest_application() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let reapplied = Application {
        id: UUID1.into(),
        status: ApplicationStatus::Applied,
        created_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        ..FOO_BACKEND.clone()
    };
    REPO.create(&mut txn, &reapplied).await.unwrap();

    let result = REPO
        .list_statuses(&mut txn, FOO.id, &[ACME_BACKEND.id])
        .await
        .unwrap();
    assert_eq!(
        result,
        HashMap::from([(ACME_BACKEND.id, ApplicationStatus::Applied)])
    );
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn count_by_jobs() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .count_by_jobs(
            &mut txn,
            &[ACME_BACKEND.id, ACME_INTERN.id, ACME_DESIGNER.id],
        )
        .await
        .unwrap();
    assert_eq!(
        result,
        HashMap::from([(ACME_BACKEND.id, 2), (ACME_INTERN.id, 1)])
    );
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn count_by_company() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let created = TimeRange {
        start: Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap(),
    };

    for (company_id, filter, expected) in [
        (ACME.id, ApplicationCountFilter::default(), 3),
        (GLOBEX.id, ApplicationCountFilter::default(), 1),
        (
            ACME.id,
            ApplicationCountFilter {
                status: Some(ApplicationStatus::Hired),
                created: None,
            },
            1,
        ),
        (
            ACME.id,
            ApplicationCountFilter {
                status: None,
                created: Some(created),
            },
            2,
        ),
        (
            ACME.id,
            ApplicationCountFilter {
                status: Some(ApplicationStatus::Hired),
                created: Some(created),
            },
            0,
        ),
    ] {
        let result = REPO
            .count_by_company(&mut txn, company_id, &filter)
            .await
            .unwrap();
        assert_eq!(result, expected, "{company_id:?} {filter:?}");
    }
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_recent_by_company() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .list_recent_by_company(&mut txn, ACME.id, 2)
        .await
        .unwrap();
    assert_eq!(result, [composite(&BAR_INTERN), composite(&BAR_BACKEND)]);
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn applications_outlive_deleted_job() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    PostgresJobRepository
        .delete(&mut txn, ACME_INTERN.id)
        .await
        .unwrap();

    let result = REPO
        .count_by_jobs(&mut txn, &[ACME_INTERN.id])
        .await
        .unwrap();
    assert_eq!(result, HashMap::from([(ACME_INTERN.id, 1)]));

    let result = REPO
        .list_recent_by_company(&mut txn, ACME.id, 10)
        .await
        .unwrap();
    assert_eq!(result, [composite(&BAR_BACKEND), composite(&FOO_BACKEND)]);
}
