use chrono::{DateTime, TimeZone, Utc};
use jobboard_auth_contracts::MockAuthService;
use jobboard_core_analytics_contracts::{AnalyticsFeatureService, AnalyticsOverviewError};
use jobboard_demo::{
    application::{composite, BAR_BACKEND, BAR_INTERN, FOO_BACKEND},
    job::{ACME_BACKEND, ACME_DESIGNER, ACME_INTERN},
    user::{ACME, FOO},
};
use jobboard_models::{
    analytics::{EmployerOverview, OverviewCounts, OverviewTrends},
    application::{ApplicationCountFilter, ApplicationStatus},
    auth::{AuthError, AuthenticateError, AuthorizeError},
    job::JobCountFilter,
    TimeRange,
};
use jobboard_persistence_contracts::{
    application::MockApplicationRepository, job::MockJobRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::time::MockTimeService;
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{trend, AnalyticsFeatureServiceImpl};

type Sut = AnalyticsFeatureServiceImpl<
    MockDatabase,
    MockAuthService,
    MockTimeService,
    MockJobRepository<MockTransaction>,
    MockApplicationRepository<MockTransaction>,
>;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn ok() {
    // Arrange
    let now = at(12);
    let current = Some(TimeRange {
        start: at(5),
        end: now,
    });
    let previous = Some(TimeRange {
        start: Utc.with_ymd_and_hms(2024, 2, 27, 12, 0, 0).unwrap(),
        end: at(5),
    });
    let active = |created: Option<TimeRange>| JobCountFilter {
        is_closed: Some(false),
        created,
    };
    let hired = Some(ApplicationStatus::Hired);

    let auth = MockAuthService::new().with_authenticate(Some((ACME.id, ACME.role)));

    let db = MockDatabase::build(false);

    let time = MockTimeService::new().with_now(now);

    let recent_jobs = vec![
        ACME_INTERN.clone(),
        ACME_DESIGNER.clone(),
        ACME_BACKEND.clone(),
    ];
    let recent_applications = vec![
        composite(&BAR_INTERN),
        composite(&BAR_BACKEND),
        composite(&FOO_BACKEND),
    ];

    let job_repo = MockJobRepository::new()
        .with_count_by_company(ACME.id, active(None), 2)
        .with_count_by_company(ACME.id, active(current), 1)
        .with_count_by_company(ACME.id, active(previous), 1)
        .with_list_recent_by_company(ACME.id, 5, recent_jobs.clone());

    let application_repo = MockApplicationRepository::new()
        .with_count_by_company(ACME.id, ApplicationCountFilter::default(), 3)
        .with_count_by_company(
            ACME.id,
            ApplicationCountFilter {
                status: hired,
                created: None,
            },
            1,
        )
        .with_count_by_company(
            ACME.id,
            ApplicationCountFilter {
                status: None,
                created: current,
            },
            2,
        )
        .with_count_by_company(
            ACME.id,
            ApplicationCountFilter {
                status: None,
                created: previous,
            },
            1,
        )
        .with_count_by_company(
            ACME.id,
            ApplicationCountFilter {
                status: hired,
                created: current,
            },
            0,
        )
        .with_count_by_company(
            ACME.id,
            ApplicationCountFilter {
                status: hired,
                created: previous,
            },
            1,
        )
        .with_list_recent_by_company(ACME.id, 5, recent_applications.clone());

    let sut = AnalyticsFeatureServiceImpl {
        db,
        auth,
        time,
        job_repo,
        application_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_overview("token").await;

    // Assert
    assert_eq!(
        result.unwrap(),
        EmployerOverview {
            counts: OverviewCounts {
                total_active_jobs: 2,
                total_applications: 3,
                total_hired: 1,
                trends: OverviewTrends {
                    active_jobs: 0,
                    applicants: 100,
                    total_hired: -100,
                },
            },
            recent_jobs,
            recent_applications,
        }
    );
}

#[tokio::test]
async fn unauthenticated() {
    // Arrange
    let auth = MockAuthService::new().with_authenticate(None);

    let sut = AnalyticsFeatureServiceImpl {
        auth,
        ..Sut::default()
    };

    // Act
    let result = sut.get_overview("token").await;

    // Assert
    assert_matches!(
        result,
        Err(AnalyticsOverviewError::Auth(AuthError::Authenticate(
            AuthenticateError::InvalidToken
        )))
    );
}

#[tokio::test]
async fn jobseeker() {
    // Arrange
    let auth = MockAuthService::new().with_authenticate(Some((FOO.id, FOO.role)));

    let sut = AnalyticsFeatureServiceImpl {
        auth,
        ..Sut::default()
    };

    // Act
    let result = sut.get_overview("token").await;

    // Assert
    assert_matches!(
        result,
        Err(AnalyticsOverviewError::Auth(AuthError::Authorize(
            AuthorizeError::Employer
        )))
    );
}

#[test]
fn trend_from_zero() {
    assert_eq!(trend(0, 0), 0);
    assert_eq!(trend(3, 0), 100);
}

#[test]
fn trend_rounds_to_nearest_percent() {
    assert_eq!(trend(4, 3), 33);
    assert_eq!(trend(2, 3), -33);
    assert_eq!(trend(5, 3), 67);
    assert_eq!(trend(6, 2), 200);
    assert_eq!(trend(0, 7), -100);
}
