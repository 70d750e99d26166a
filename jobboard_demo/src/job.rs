use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::{
    job::{
        Job, JobCategory, JobComposite, JobDescription, JobLocation, JobRequirements, JobTitle,
        JobType, Salary,
    },
    user::{CompanyProfile, User},
};
use jobboard_persistence_contracts::job::JobRepository;
use uuid::uuid;

use crate::user::{ACME, GLOBEX};

pub static ALL_JOBS: LazyLock<Vec<&Job>> =
    LazyLock::new(|| vec![&ACME_BACKEND, &ACME_DESIGNER, &GLOBEX_SUPPORT, &ACME_INTERN]);

pub static ACME_BACKEND: LazyLock<Job> = LazyLock::new(|| Job {
    id: uuid!("3f6d2a1c-5b7e-4c8d-9e0f-1a2b3c4d5e01").into(),
    company_id: ACME.id,
    title: JobTitle::try_new("Backend Engineer").unwrap(),
    description: JobDescription::try_new("Build and operate our order processing services.")
        .unwrap(),
    requirements: JobRequirements::try_new("3+ years of backend development").unwrap(),
    location: JobLocation::try_new("Berlin").unwrap(),
    category: JobCategory::try_new("Engineering").unwrap(),
    job_type: JobType::FullTime,
    salary_min: Salary::try_new(60_000).unwrap(),
    salary_max: Salary::try_new(90_000).unwrap(),
    is_closed: false,
    created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
});

pub static ACME_DESIGNER: LazyLock<Job> = LazyLock::new(|| Job {
    id: uuid!("3f6d2a1c-5b7e-4c8d-9e0f-1a2b3c4d5e02").into(),
    company_id: ACME.id,
    title: JobTitle::try_new("Product Designer").unwrap(),
    description: JobDescription::try_new("Design the next generation of our storefront.")
        .unwrap(),
    requirements: JobRequirements::try_new("").unwrap(),
    location: JobLocation::try_new("Remote").unwrap(),
    category: JobCategory::try_new("Design").unwrap(),
    job_type: JobType::Contract,
    salary_min: Salary::try_new(40_000).unwrap(),
    salary_max: Salary::try_new(60_000).unwrap(),
    is_closed: true,
    created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap(),
});

pub static GLOBEX_SUPPORT: LazyLock<Job> = LazyLock::new(|| Job {
    id: uuid!("3f6d2a1c-5b7e-4c8d-9e0f-1a2b3c4d5e03").into(),
    company_id: GLOBEX.id,
    title: JobTitle::try_new("Support Specialist").unwrap(),
    description: JobDescription::try_new("Help our customers get the most out of Globex.")
        .unwrap(),
    requirements: JobRequirements::try_new("Fluent English").unwrap(),
    location: JobLocation::try_new("Springfield").unwrap(),
    category: JobCategory::try_new("Customer Service").unwrap(),
    job_type: JobType::PartTime,
    salary_min: Salary::try_new(20_000).unwrap(),
    salary_max: Salary::try_new(30_000).unwrap(),
    is_closed: false,
    created_at: Utc.with_ymd_and_hms(2024, 3, 8, 8, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 8, 8, 0, 0).unwrap(),
});

pub static ACME_INTERN: LazyLock<Job> = LazyLock::new(|| Job {
    id: uuid!("3f6d2a1c-5b7e-4c8d-9e0f-1a2b3c4d5e04").into(),
    company_id: ACME.id,
    title: JobTitle::try_new("Data Science Intern").unwrap(),
    description: JobDescription::try_new("Analyze our sales data with the analytics team.")
        .unwrap(),
    requirements: JobRequirements::try_new("Enrolled student").unwrap(),
    location: JobLocation::try_new("Munich").unwrap(),
    category: JobCategory::try_new("Engineering").unwrap(),
    job_type: JobType::Internship,
    salary_min: Salary::try_new(1_000).unwrap(),
    salary_max: Salary::try_new(2_000).unwrap(),
    is_closed: false,
    created_at: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
});

/// Attach the profile of the posting company.
pub fn composite(job: &Job) -> JobComposite {
    let company: &User = [&*ACME, &*GLOBEX]
        .into_iter()
        .find(|x| x.id == job.company_id)
        .unwrap();
    JobComposite {
        job: job.clone(),
        company: CompanyProfile::from(company),
    }
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl JobRepository<Txn>,
) -> anyhow::Result<()> {
    for &job in &*ALL_JOBS {
        repo.create(txn, job).await?;
    }
    Ok(())
}
