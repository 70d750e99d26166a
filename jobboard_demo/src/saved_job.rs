use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::saved_job::SavedJob;
use jobboard_persistence_contracts::saved_job::SavedJobRepository;
use uuid::uuid;

use crate::{
    job::{ACME_BACKEND, ACME_INTERN, GLOBEX_SUPPORT},
    user::{BAR, FOO},
};

pub static ALL_SAVED_JOBS: LazyLock<Vec<&SavedJob>> =
    LazyLock::new(|| vec![&BAR_SAVED_BACKEND, &FOO_SAVED_SUPPORT, &FOO_SAVED_INTERN]);

pub static BAR_SAVED_BACKEND: LazyLock<SavedJob> = LazyLock::new(|| SavedJob {
    id: uuid!("9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c01").into(),
    job_id: ACME_BACKEND.id,
    jobseeker_id: BAR.id,
    created_at: Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap(),
});

pub static FOO_SAVED_SUPPORT: LazyLock<SavedJob> = LazyLock::new(|| SavedJob {
    id: uuid!("9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c02").into(),
    job_id: GLOBEX_SUPPORT.id,
    jobseeker_id: FOO.id,
    created_at: Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap(),
});

pub static FOO_SAVED_INTERN: LazyLock<SavedJob> = LazyLock::new(|| SavedJob {
    id: uuid!("9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c03").into(),
    job_id: ACME_INTERN.id,
    jobseeker_id: FOO.id,
    created_at: Utc.with_ymd_and_hms(2024, 3, 12, 7, 45, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl SavedJobRepository<Txn>,
) -> anyhow::Result<()> {
    for &saved_job in &*ALL_SAVED_JOBS {
        repo.create(txn, saved_job).await?;
    }
    Ok(())
}
