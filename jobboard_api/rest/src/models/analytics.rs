use chrono::{DateTime, Utc};
use jobboard_models::{
    analytics::{EmployerOverview, OverviewCounts, OverviewTrends},
    application::{ApplicationComposite, ApplicationId, ApplicationStatus, JobSummary},
    job::{JobId, JobTitle},
    url::Url,
    user::{ApplicantProfile, EmailAddress, UserId, UserName},
};
use schemars::JsonSchema;
use serde::Serialize;

use super::job::ApiJob;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiOverview {
    pub counts: ApiOverviewCounts,
    pub data: ApiOverviewData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiOverviewCounts {
    /// The number of open jobs
    pub total_active_jobs: u64,
    /// The number of applications across all jobs
    pub total_applications: u64,
    /// The number of hired applicants across all jobs
    pub total_hired: u64,
    pub trends: ApiOverviewTrends,
}

/// Change in percent compared to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiOverviewTrends {
    pub active_jobs: i64,
    pub applicants: i64,
    pub total_hired: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiOverviewData {
    pub recent_jobs: Vec<ApiJob>,
    pub recent_applications: Vec<ApiRecentApplication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecentApplication {
    pub id: ApplicationId,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub applicant: ApiApplicant,
    pub job: ApiJobSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiApplicant {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub avatar: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiJobSummary {
    pub id: JobId,
    pub title: JobTitle,
}

impl From<EmployerOverview> for ApiOverview {
    fn from(overview: EmployerOverview) -> Self {
        let EmployerOverview {
            counts,
            recent_jobs,
            recent_applications,
        } = overview;
        Self {
            counts: counts.into(),
            data: ApiOverviewData {
                recent_jobs: recent_jobs.into_iter().map(Into::into).collect(),
                recent_applications: recent_applications.into_iter().map(Into::into).collect(),
            },
        }
    }
}

impl From<OverviewCounts> for ApiOverviewCounts {
    fn from(counts: OverviewCounts) -> Self {
        let OverviewTrends {
            active_jobs,
            applicants,
            total_hired,
        } = counts.trends;
        Self {
            total_active_jobs: counts.total_active_jobs,
            total_applications: counts.total_applications,
            total_hired: counts.total_hired,
            trends: ApiOverviewTrends {
                active_jobs,
                applicants,
                total_hired,
            },
        }
    }
}

impl From<ApplicationComposite> for ApiRecentApplication {
    fn from(composite: ApplicationComposite) -> Self {
        let ApplicationComposite {
            application,
            applicant: ApplicantProfile {
                id: applicant_id,
                name,
                email,
                avatar,
            },
            job: JobSummary { id: job_id, title },
        } = composite;
        Self {
            id: application.id,
            status: application.status,
            created_at: application.created_at,
            applicant: ApiApplicant {
                id: applicant_id,
                name,
                email,
                avatar,
            },
            job: ApiJobSummary { id: job_id, title },
        }
    }
}

#[cfg(test)]
mod tests {
    use jobboard_demo::{
        application::{self, FOO_BACKEND},
        job::ACME_BACKEND,
        user::FOO,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn overview_json() {
        // Arrange
        let overview = EmployerOverview {
            counts: OverviewCounts {
                total_active_jobs: 2,
                total_applications: 3,
                total_hired: 1,
                trends: OverviewTrends {
                    active_jobs: 100,
                    applicants: -50,
                    total_hired: 0,
                },
            },
            recent_jobs: vec![],
            recent_applications: vec![application::composite(&FOO_BACKEND)],
        };

        // Act
        let result = serde_json::to_value(ApiOverview::from(overview)).unwrap();

        // Assert
        assert_eq!(
            result,
            json!({
                "counts": {
                    "totalActiveJobs": 2,
                    "totalApplications": 3,
                    "totalHired": 1,
                    "trends": {"activeJobs": 100, "applicants": -50, "totalHired": 0},
                },
                "data": {
                    "recentJobs": [],
                    "recentApplications": [{
                        "id": FOO_BACKEND.id,
                        "status": FOO_BACKEND.status,
                        "createdAt": FOO_BACKEND.created_at,
                        "applicant": {
                            "id": FOO.id,
                            "name": "Foo",
                            "email": "foo@example.com",
                            "avatar": "https://example.com/avatars/foo.png",
                        },
                        "job": {"id": ACME_BACKEND.id, "title": "Backend Engineer"},
                    }],
                },
            })
        );
    }
}
