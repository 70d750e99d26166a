use chrono::{DateTime, Utc};
use jobboard_core_jobs_contracts::{
    EmployerJob, JobCreateRequest, JobDetails, JobUpdateRequest, ListedJob,
};
use jobboard_models::{
    application::ApplicationStatus,
    job::{
        Job, JobCategory, JobComposite, JobDescription, JobFilter, JobId, JobLocation,
        JobRequirements, JobTitle, JobType, Salary,
    },
    url::Url,
    user::{CompanyName, CompanyProfile, UserId, UserName},
    SearchTerm,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{non_empty, InvalidQueryParam};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiJobFields {
    pub id: JobId,
    pub title: JobTitle,
    pub description: JobDescription,
    pub requirements: JobRequirements,
    pub location: JobLocation,
    pub category: JobCategory,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary_min: Salary,
    pub salary_max: Salary,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A job with its company referenced by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiJob {
    #[serde(flatten)]
    pub fields: ApiJobFields,
    /// The id of the employer who posted the job
    pub company: UserId,
}

/// A job with the public profile of its company attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ApiJobComposite {
    #[serde(flatten)]
    pub fields: ApiJobFields,
    pub company: ApiCompany,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompany {
    pub id: UserId,
    pub name: UserName,
    pub company_name: Option<CompanyName>,
    pub company_logo: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiListedJob {
    #[serde(flatten)]
    pub job: ApiJobComposite,
    /// Whether the viewer saved this job. `null` if no viewer was given.
    pub is_saved: Option<bool>,
    /// The status of the viewer's application for this job
    pub application_status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiJobDetails {
    #[serde(flatten)]
    pub job: ApiJobComposite,
    /// The status of the viewer's application for this job
    pub application_status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiEmployerJob {
    #[serde(flatten)]
    pub job: ApiJob,
    /// The number of applications received for this job
    pub application_count: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiJobCreateRequest {
    pub title: JobTitle,
    pub description: JobDescription,
    pub requirements: JobRequirements,
    pub location: JobLocation,
    pub category: JobCategory,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary_min: Salary,
    pub salary_max: Salary,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiJobUpdateRequest {
    pub title: Option<JobTitle>,
    pub description: Option<JobDescription>,
    pub requirements: Option<JobRequirements>,
    pub location: Option<JobLocation>,
    pub category: Option<JobCategory>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub salary_min: Option<Salary>,
    pub salary_max: Option<Salary>,
    pub is_closed: Option<bool>,
}

/// Filter and viewer parameters of the public job list
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiJobListQuery {
    /// Case-insensitive substring of the title
    pub keyword: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    /// Only return jobs whose maximum salary is at least this value
    pub min_salary: Option<String>,
    /// Only return jobs whose minimum salary is at most this value
    pub max_salary: Option<String>,
    /// Annotate jobs with the saved and application state of this user
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiViewerQuery {
    /// Include the application status of this user
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct PathJobId {
    pub id: JobId,
}

impl ApiJobListQuery {
    pub fn parse(self) -> Result<(JobFilter, Option<UserId>), InvalidQueryParam> {
        let filter = JobFilter {
            keyword: parse_with(self.keyword, "keyword", |x| SearchTerm::try_new(x).ok())?,
            location: parse_with(self.location, "location", |x| SearchTerm::try_new(x).ok())?,
            category: parse_with(self.category, "category", |x| JobCategory::try_new(x).ok())?,
            job_type: parse_with(self.job_type, "type", |x| x.parse().ok())?,
            min_salary: parse_with(self.min_salary, "minSalary", parse_salary)?,
            max_salary: parse_with(self.max_salary, "maxSalary", parse_salary)?,
        };
        let viewer = parse_viewer(self.user_id)?;
        Ok((filter, viewer))
    }
}

impl ApiViewerQuery {
    pub fn parse(self) -> Result<Option<UserId>, InvalidQueryParam> {
        parse_viewer(self.user_id)
    }
}

fn parse_with<T>(
    value: Option<String>,
    name: &'static str,
    f: impl FnOnce(String) -> Option<T>,
) -> Result<Option<T>, InvalidQueryParam> {
    non_empty(value)
        .map(|x| f(x).ok_or(InvalidQueryParam(name)))
        .transpose()
}

fn parse_salary(value: String) -> Option<Salary> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|x| Salary::try_new(x).ok())
}

fn parse_viewer(value: Option<String>) -> Result<Option<UserId>, InvalidQueryParam> {
    parse_with(value, "userId", |x| {
        x.trim().parse::<Uuid>().ok().map(UserId::from)
    })
}

impl From<Job> for ApiJobFields {
    fn from(job: Job) -> Self {
        let Job {
            id,
            company_id: _,
            title,
            description,
            requirements,
            location,
            category,
            job_type,
            salary_min,
            salary_max,
            is_closed,
            created_at,
            updated_at,
        } = job;
        Self {
            id,
            title,
            description,
            requirements,
            location,
            category,
            job_type,
            salary_min,
            salary_max,
            is_closed,
            created_at,
            updated_at,
        }
    }
}

impl From<Job> for ApiJob {
    fn from(job: Job) -> Self {
        let company = job.company_id;
        Self {
            fields: job.into(),
            company,
        }
    }
}

impl From<CompanyProfile> for ApiCompany {
    fn from(company: CompanyProfile) -> Self {
        let CompanyProfile {
            id,
            name,
            company_name,
            company_logo,
        } = company;
        Self {
            id,
            name,
            company_name,
            company_logo,
        }
    }
}

impl From<JobComposite> for ApiJobComposite {
    fn from(JobComposite { job, company }: JobComposite) -> Self {
        Self {
            fields: job.into(),
            company: company.into(),
        }
    }
}

impl From<ListedJob> for ApiListedJob {
    fn from(listed: ListedJob) -> Self {
        Self {
            job: listed.job.into(),
            is_saved: listed.is_saved,
            application_status: listed.application_status,
        }
    }
}

impl From<JobDetails> for ApiJobDetails {
    fn from(details: JobDetails) -> Self {
        Self {
            job: details.job.into(),
            application_status: details.application_status,
        }
    }
}

impl From<EmployerJob> for ApiEmployerJob {
    fn from(employer_job: EmployerJob) -> Self {
        Self {
            job: employer_job.job.into(),
            application_count: employer_job.application_count,
        }
    }
}

impl From<ApiJobCreateRequest> for JobCreateRequest {
    fn from(request: ApiJobCreateRequest) -> Self {
        let ApiJobCreateRequest {
            title,
            description,
            requirements,
            location,
            category,
            job_type,
            salary_min,
            salary_max,
        } = request;
        Self {
            title,
            description,
            requirements,
            location,
            category,
            job_type,
            salary_min,
            salary_max,
        }
    }
}

impl From<ApiJobUpdateRequest> for JobUpdateRequest {
    fn from(request: ApiJobUpdateRequest) -> Self {
        Self {
            title: request.title.into(),
            description: request.description.into(),
            requirements: request.requirements.into(),
            location: request.location.into(),
            category: request.category.into(),
            job_type: request.job_type.into(),
            salary_min: request.salary_min.into(),
            salary_max: request.salary_max.into(),
            is_closed: request.is_closed.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jobboard_demo::{
        job::{composite, ACME_BACKEND},
        user::{ACME, FOO},
    };
    use jobboard_utils::patch::PatchValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn listed_job_json() {
        // Arrange
        let listed = ListedJob {
            job: composite(&ACME_BACKEND),
            is_saved: Some(true),
            application_status: Some(ApplicationStatus::Reviewed),
        };

        // Act
        let result = serde_json::to_value(ApiListedJob::from(listed)).unwrap();

        // Assert
        assert_eq!(
            result,
            json!({
                "id": ACME_BACKEND.id,
                "title": "Backend Engineer",
                "description": "Build and operate our order processing services.",
                "requirements": "3+ years of backend development",
                "location": "Berlin",
                "category": "Engineering",
                "type": "Full-Time",
                "salaryMin": 60000,
                "salaryMax": 90000,
                "isClosed": false,
                "createdAt": "2024-03-01T10:00:00Z",
                "updatedAt": "2024-03-01T10:00:00Z",
                "company": {
                    "id": ACME.id,
                    "name": "Alice Acme",
                    "companyName": "ACME Corp",
                    "companyLogo": "https://acme.example/logo.png",
                },
                "isSaved": true,
                "applicationStatus": "Reviewed",
            })
        );
    }

    #[test]
    fn employer_job_json_references_company_by_id() {
        // Arrange
        let employer_job = EmployerJob {
            job: ACME_BACKEND.clone(),
            application_count: 2,
        };

        // Act
        let result = serde_json::to_value(ApiEmployerJob::from(employer_job)).unwrap();

        // Assert
        assert_eq!(result["company"], json!(ACME.id));
        assert_eq!(result["applicationCount"], json!(2));
    }

    #[test]
    fn list_query_empty() {
        // Act
        let result = ApiJobListQuery {
            keyword: Some(String::new()),
            user_id: Some(String::new()),
            ..Default::default()
        }
        .parse();

        // Assert
        assert_eq!(result, Ok((JobFilter::default(), None)));
    }

    #[test]
    fn list_query_all_params() {
        // Arrange
        let query = ApiJobListQuery {
            keyword: Some("engineer".into()),
            location: Some("berlin".into()),
            category: Some("Engineering".into()),
            job_type: Some("Full-Time".into()),
            min_salary: Some("50000".into()),
            max_salary: Some("70000".into()),
            user_id: Some(FOO.id.to_string()),
        };

        // Act
        let result = query.parse();

        // Assert
        assert_eq!(
            result,
            Ok((
                JobFilter {
                    keyword: Some(SearchTerm::try_new("engineer").unwrap()),
                    location: Some(SearchTerm::try_new("berlin").unwrap()),
                    category: Some(JobCategory::try_new("Engineering").unwrap()),
                    job_type: Some(JobType::FullTime),
                    min_salary: Some(Salary::try_new(50_000).unwrap()),
                    max_salary: Some(Salary::try_new(70_000).unwrap()),
                },
                Some(FOO.id)
            ))
        );
    }

    #[test]
    fn list_query_invalid_params() {
        for (query, name) in [
            (
                ApiJobListQuery {
                    job_type: Some("Freelance".into()),
                    ..Default::default()
                },
                "type",
            ),
            (
                ApiJobListQuery {
                    min_salary: Some("lots".into()),
                    ..Default::default()
                },
                "minSalary",
            ),
            (
                ApiJobListQuery {
                    max_salary: Some("-1".into()),
                    ..Default::default()
                },
                "maxSalary",
            ),
            (
                ApiJobListQuery {
                    user_id: Some("42".into()),
                    ..Default::default()
                },
                "userId",
            ),
        ] {
            assert_eq!(query.parse(), Err(InvalidQueryParam(name)));
        }
    }

    #[test]
    fn update_request_keeps_absent_fields_unchanged() {
        // Arrange
        let request: ApiJobUpdateRequest =
            serde_json::from_value(json!({"title": "Staff Engineer", "isClosed": true})).unwrap();

        // Act
        let result = JobUpdateRequest::from(request);

        // Assert
        assert_eq!(
            result,
            JobUpdateRequest {
                title: PatchValue::Update(JobTitle::try_new("Staff Engineer").unwrap()),
                is_closed: PatchValue::Update(true),
                ..Default::default()
            }
        );
    }
}
