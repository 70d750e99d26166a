use jobboard_persistence_contracts::{
    application::ApplicationRepository, job::JobRepository, saved_job::SavedJobRepository,
    user::UserRepository,
};
use tracing::info;
use uuid::{uuid, Uuid};

pub mod application;
pub mod job;
pub mod saved_job;
pub mod user;

/// An id which is not used by any demo record.
pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");

/// Insert all demo records.
pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    user: impl UserRepository<Txn>,
    job: impl JobRepository<Txn>,
    application: impl ApplicationRepository<Txn>,
    saved_job: impl SavedJobRepository<Txn>,
) -> anyhow::Result<()> {
    user::create(txn, user).await?;
    job::create(txn, job).await?;
    application::create(txn, application).await?;
    saved_job::create(txn, saved_job).await?;
    info!("created demo data");
    Ok(())
}
