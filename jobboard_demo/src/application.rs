use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::{
    application::{Application, ApplicationComposite, ApplicationStatus, JobSummary},
    user::{ApplicantProfile, User},
};
use jobboard_persistence_contracts::application::ApplicationRepository;
use uuid::uuid;

use crate::{
    job::{ACME_BACKEND, ACME_INTERN, ALL_JOBS, GLOBEX_SUPPORT},
    user::{BAR, FOO},
};

pub static ALL_APPLICATIONS: LazyLock<Vec<&Application>> =
    LazyLock::new(|| vec![&FOO_BACKEND, &BAR_BACKEND, &FOO_SUPPORT, &BAR_INTERN]);

pub static FOO_BACKEND: LazyLock<Application> = LazyLock::new(|| Application {
    id: uuid!("7c1e0d9b-2a3f-4b5c-8d6e-0f1a2b3c4d01").into(),
    job_id: ACME_BACKEND.id,
    applicant_id: FOO.id,
    status: ApplicationStatus::Hired,
    created_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap(),
});

pub static BAR_BACKEND: LazyLock<Application> = LazyLock::new(|| Application {
    id: uuid!("7c1e0d9b-2a3f-4b5c-8d6e-0f1a2b3c4d02").into(),
    job_id: ACME_BACKEND.id,
    applicant_id: BAR.id,
    status: ApplicationStatus::Applied,
    created_at: Utc.with_ymd_and_hms(2024, 3, 3, 11, 30, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 3, 11, 30, 0).unwrap(),
});

pub static FOO_SUPPORT: LazyLock<Application> = LazyLock::new(|| Application {
    id: uuid!("7c1e0d9b-2a3f-4b5c-8d6e-0f1a2b3c4d03").into(),
    job_id: GLOBEX_SUPPORT.id,
    applicant_id: FOO.id,
    status: ApplicationStatus::Reviewed,
    created_at: Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 12, 10, 0, 0).unwrap(),
});

pub static BAR_INTERN: LazyLock<Application> = LazyLock::new(|| Application {
    id: uuid!("7c1e0d9b-2a3f-4b5c-8d6e-0f1a2b3c4d04").into(),
    job_id: ACME_INTERN.id,
    applicant_id: BAR.id,
    status: ApplicationStatus::Rejected,
    created_at: Utc.with_ymd_and_hms(2024, 3, 11, 15, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 13, 9, 0, 0).unwrap(),
});

/// Attach the applicant profile and the job identity.
pub fn composite(application: &Application) -> ApplicationComposite {
    let applicant: &User = [&*FOO, &*BAR]
        .into_iter()
        .find(|x| x.id == application.applicant_id)
        .unwrap();
    let job = ALL_JOBS
        .iter()
        .find(|x| x.id == application.job_id)
        .unwrap();
    ApplicationComposite {
        application: application.clone(),
        applicant: ApplicantProfile::from(applicant),
        job: JobSummary {
            id: job.id,
            title: job.title.clone(),
        },
    }
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ApplicationRepository<Txn>,
) -> anyhow::Result<()> {
    for &application in &*ALL_APPLICATIONS {
        repo.create(txn, application).await?;
    }
    Ok(())
}
