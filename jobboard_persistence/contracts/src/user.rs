use std::future::Future;

use jobboard_models::user::{User, UserId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait UserRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the user with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        user_id: UserId,
    ) -> impl Future<Output = anyhow::Result<Option<User>>> + Send;

    /// Create a new user.
    fn create(&self, txn: &mut Txn, user: &User) -> impl Future<Output = anyhow::Result<()>> + Send;
}
