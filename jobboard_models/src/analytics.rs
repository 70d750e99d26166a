use crate::{application::ApplicationComposite, job::Job};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployerOverview {
    pub counts: OverviewCounts,
    pub recent_jobs: Vec<Job>,
    pub recent_applications: Vec<ApplicationComposite>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub total_active_jobs: u64,
    pub total_applications: u64,
    pub total_hired: u64,
    pub trends: OverviewTrends,
}

/// Period-over-period changes in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewTrends {
    pub active_jobs: i64,
    pub applicants: i64,
    pub total_hired: i64,
}
