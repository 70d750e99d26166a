use std::future::Future;

pub trait HealthFeatureService: Send + Sync + 'static {
    /// Return the status of the external services this backend depends on.
    fn get_status(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub database: bool,
}

impl HealthStatus {
    pub fn is_healthy(self) -> bool {
        self.database
    }
}
