use std::future::Future;

use jobboard_models::{analytics::EmployerOverview, auth::AuthError};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AnalyticsFeatureService: Send + Sync + 'static {
    /// Return the dashboard figures of the authenticated employer.
    fn get_overview(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<EmployerOverview, AnalyticsOverviewError>> + Send;
}

#[derive(Debug, Error)]
pub enum AnalyticsOverviewError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
