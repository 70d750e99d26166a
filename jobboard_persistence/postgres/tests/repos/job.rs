use chrono::{TimeZone, Utc};
use jobboard_demo::{
    job::{composite, ACME_BACKEND, ACME_DESIGNER, ACME_INTERN, ALL_JOBS, GLOBEX_SUPPORT},
    user::ACME,
    UUID1,
};
use jobboard_models::{
    job::{Job, JobCategory, JobCountFilter, JobFilter, JobPatch, JobTitle, JobType, Salary},
    SearchTerm, TimeRange,
};
use jobboard_persistence_contracts::{job::JobRepository, Database, Transaction};
use jobboard_persistence_postgres::job::PostgresJobRepository;
use jobboard_utils::patch::Patch;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::setup;

const REPO: PostgresJobRepository = PostgresJobRepository;

fn term(s: &str) -> Option<SearchTerm> {
    Some(SearchTerm::try_new(s).unwrap())
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let tests: Vec<(JobFilter, Vec<&Job>)> = vec![
        (
            JobFilter::default(),
            vec![&ACME_INTERN, &GLOBEX_SUPPORT, &ACME_BACKEND],
        ),
        (
            JobFilter {
                keyword: term("ENGINEER"),
                ..Default::default()
            },
            vec![&ACME_BACKEND],
        ),
        (
            JobFilter {
                location: term("spring"),
                ..Default::default()
            },
            vec![&GLOBEX_SUPPORT],
        ),
        (
            JobFilter {
                category: Some(JobCategory::try_new("Engineering").unwrap()),
                ..Default::default()
            },
            vec![&ACME_INTERN, &ACME_BACKEND],
        ),
        (
            JobFilter {
                category: Some(JobCategory::try_new("Design").unwrap()),
                ..Default::default()
            },
            vec![],
        ),
        (
            JobFilter {
                job_type: Some(JobType::FullTime),
                ..Default::default()
            },
            vec![&ACME_BACKEND],
        ),
        (
            JobFilter {
                min_salary: Some(Salary::try_new(25_000).unwrap()),
                ..Default::default()
            },
            vec![&GLOBEX_SUPPORT, &ACME_BACKEND],
        ),
        (
            JobFilter {
                max_salary: Some(Salary::try_new(25_000).unwrap()),
                ..Default::default()
            },
            vec![&ACME_INTERN, &GLOBEX_SUPPORT],
        ),
        (
            JobFilter {
                keyword: term("intern"),
                job_type: Some(JobType::FullTime),
                ..Default::default()
            },
            vec![],
        ),
    ];

    for (filter, expected) in tests {
        let result = REPO.list(&mut txn, &filter).await.unwrap();
        let expected = expected.into_iter().map(composite).collect::<Vec<_>>();
        assert_eq!(result, expected, "{filter:?}");
    }
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &job in &*ALL_JOBS {
        let result = REPO.get(&mut txn, job.id).await.unwrap().unwrap();
        assert_eq!(&result, job);

        let result = REPO.get_composite(&mut txn, job.id).await.unwrap().unwrap();
        assert_eq!(result, composite(job));
    }

    assert_eq!(REPO.get(&mut txn, UUID1.into()).await.unwrap(), None);
    assert_eq!(
        REPO.get_composite(&mut txn, UUID1.into()).await.unwrap(),
        None
    );
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn list_by_company() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list_by_company(&mut txn, ACME.id).await.unwrap();
    assert_eq!(
        result,
        [&*ACME_INTERN, &*ACME_DESIGNER, &*ACME_BACKEND].map(Clone::clone)
    );

    let result = REPO
        .list_recent_by_company(&mut txn, ACME.id, 2)
        .await
        .unwrap();
    assert_eq!(result, [&*ACME_INTERN, &*ACME_DESIGNER].map(Clone::clone));

    let result = REPO.list_by_company(&mut txn, UUID1.into()).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn count_by_company() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let created = TimeRange {
        start: Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap(),
    };

    for (filter, expected) in [
        (JobCountFilter::default(), 3),
        (
            JobCountFilter {
                is_closed: Some(false),
                created: None,
            },
            2,
        ),
        (
            JobCountFilter {
                is_closed: None,
                created: Some(created),
            },
            2,
        ),
        (
            JobCountFilter {
                is_closed: Some(false),
                created: Some(created),
            },
            1,
        ),
    ] {
        let result = REPO
            .count_by_company(&mut txn, ACME.id, &filter)
            .await
            .unwrap();
        assert_eq!(result, expected, "{filter:?}");
    }
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn create_and_update() {
    let db = setup().await;

    let job = Job {
        id: UUID1.into(),
        title: JobTitle::try_new("Site Reliability Engineer").unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        ..ACME_BACKEND.clone()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &job).await.unwrap();
    txn.commit().await.unwrap();

    let patch = JobPatch::new()
        .update_title(JobTitle::try_new("SRE").unwrap())
        .update_job_type(JobType::Remote)
        .update_salary_max(Salary::try_new(120_000).unwrap())
        .update_updated_at(Utc.with_ymd_and_hms(2024, 4, 2, 0, 0, 0).unwrap());

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(REPO.update(&mut txn, job.id, &patch).await.unwrap());
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, job.id).await.unwrap().unwrap();
    assert_eq!(result, job.update(patch.clone()));

    assert!(!REPO
        .update(&mut txn, Uuid::nil().into(), &patch)
        .await
        .unwrap());
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn toggle_closed() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let now = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();

    let result = REPO
        .toggle_closed(&mut txn, ACME_DESIGNER.id, now)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        result,
        Job {
            is_closed: false,
            updated_at: now,
            ..ACME_DESIGNER.clone()
        }
    );

    let result = REPO
        .toggle_closed(&mut txn, ACME_DESIGNER.id, now)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_closed);

    let result = REPO.toggle_closed(&mut txn, UUID1.into(), now).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn delete() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    assert!(REPO.delete(&mut txn, ACME_BACKEND.id).await.unwrap());
    assert_eq!(REPO.get(&mut txn, ACME_BACKEND.id).await.unwrap(), None);
    assert!(!REPO.delete(&mut txn, ACME_BACKEND.id).await.unwrap());
}
