use std::time::Duration;

use chrono::{DateTime, Utc};
use jobboard_auth_contracts::{AuthResultExt, AuthService};
use jobboard_core_analytics_contracts::{AnalyticsFeatureService, AnalyticsOverviewError};
use jobboard_di::Build;
use jobboard_models::{
    analytics::{EmployerOverview, OverviewCounts, OverviewTrends},
    application::{ApplicationCountFilter, ApplicationStatus},
    job::JobCountFilter,
    TimeRange,
};
use jobboard_persistence_contracts::{
    application::ApplicationRepository, job::JobRepository, Database,
};
use jobboard_shared_contracts::time::TimeService;
use jobboard_utils::trace_instrument;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct AnalyticsFeatureServiceImpl<Db, Auth, Time, JobRepo, ApplicationRepo> {
    db: Db,
    auth: Auth,
    time: Time,
    job_repo: JobRepo,
    application_repo: ApplicationRepo,
    config: AnalyticsFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct AnalyticsFeatureConfig {
    /// Length of the periods compared by the trends
    pub trend_window: Duration,
    pub recent_jobs: u64,
    pub recent_applications: u64,
}

#[cfg(test)]
impl Default for AnalyticsFeatureConfig {
    fn default() -> Self {
        Self {
            trend_window: Duration::from_secs(7 * 24 * 3600),
            recent_jobs: 5,
            recent_applications: 5,
        }
    }
}

impl<Db, Auth, Time, JobRepo, ApplicationRepo> AnalyticsFeatureService
    for AnalyticsFeatureServiceImpl<Db, Auth, Time, JobRepo, ApplicationRepo>
where
    Db: Database,
    Auth: AuthService,
    Time: TimeService,
    JobRepo: JobRepository<Db::Transaction>,
    ApplicationRepo: ApplicationRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self, token))]
    async fn get_overview(&self, token: &str) -> Result<EmployerOverview, AnalyticsOverviewError> {
        let auth = self.auth.authenticate(token).map_auth_err()?;
        auth.ensure_employer().map_auth_err()?;

        let mut txn = self.db.begin_transaction().await?;
        let company_id = auth.user_id;

        let (current, previous) = self.periods(self.time.now());

        let jobs = |created: Option<TimeRange>| JobCountFilter {
            is_closed: Some(false),
            created,
        };
        let applications = |status: Option<ApplicationStatus>, created: Option<TimeRange>| {
            ApplicationCountFilter { status, created }
        };
        let hired = Some(ApplicationStatus::Hired);

        let job_repo = &self.job_repo;
        let application_repo = &self.application_repo;

        let total_active_jobs = job_repo
            .count_by_company(&mut txn, company_id, &jobs(None))
            .await?;
        let total_applications = application_repo
            .count_by_company(&mut txn, company_id, &applications(None, None))
            .await?;
        let total_hired = application_repo
            .count_by_company(&mut txn, company_id, &applications(hired, None))
            .await?;

        let active_jobs = trend(
            job_repo
                .count_by_company(&mut txn, company_id, &jobs(Some(current)))
                .await?,
            job_repo
                .count_by_company(&mut txn, company_id, &jobs(Some(previous)))
                .await?,
        );
        let applicants = trend(
            application_repo
                .count_by_company(&mut txn, company_id, &applications(None, Some(current)))
                .await?,
            application_repo
                .count_by_company(&mut txn, company_id, &applications(None, Some(previous)))
                .await?,
        );
        let hired_trend = trend(
            application_repo
                .count_by_company(&mut txn, company_id, &applications(hired, Some(current)))
                .await?,
            application_repo
                .count_by_company(&mut txn, company_id, &applications(hired, Some(previous)))
                .await?,
        );

        let recent_jobs = job_repo
            .list_recent_by_company(&mut txn, company_id, self.config.recent_jobs)
            .await?;
        let recent_applications = application_repo
            .list_recent_by_company(&mut txn, company_id, self.config.recent_applications)
            .await?;

        Ok(EmployerOverview {
            counts: OverviewCounts {
                total_active_jobs,
                total_applications,
                total_hired,
                trends: OverviewTrends {
                    active_jobs,
                    applicants,
                    total_hired: hired_trend,
                },
            },
            recent_jobs,
            recent_applications,
        })
    }
}

impl<Db, Auth, Time, JobRepo, ApplicationRepo>
    AnalyticsFeatureServiceImpl<Db, Auth, Time, JobRepo, ApplicationRepo>
{
    /// Return the current and the previous trend window ending at `now`.
    fn periods(&self, now: DateTime<Utc>) -> (TimeRange, TimeRange) {
        let split = now - self.config.trend_window;
        let current = TimeRange {
            start: split,
            end: now,
        };
        let previous = TimeRange {
            start: split - self.config.trend_window,
            end: split,
        };
        (current, previous)
    }
}

/// Change from `previous` to `current` in percent, rounded to the nearest
/// integer. Growth from zero counts as 100%.
fn trend(current: u64, previous: u64) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }

    ((current as f64 - previous as f64) * 100.0 / previous as f64).round() as i64
}
