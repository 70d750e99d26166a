use jobboard_models::user::{UserId, UserRole};

use crate::Authentication;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AuthAccessTokenService: Send + Sync + 'static {
    /// Generate a new access token for the given user.
    fn issue(&self, user_id: UserId, role: UserRole) -> anyhow::Result<String>;

    /// Verify the given access token and return its content if it is valid.
    fn verify(&self, access_token: &str) -> Option<Authentication>;
}

#[cfg(feature = "mock")]
impl MockAuthAccessTokenService {
    pub fn with_issue(mut self, user_id: UserId, role: UserRole, result: String) -> Self {
        self.expect_issue()
            .once()
            .with(mockall::predicate::eq(user_id), mockall::predicate::eq(role))
            .return_once(|_, _| Ok(result));
        self
    }

    pub fn with_verify(
        mut self,
        access_token: &'static str,
        result: Option<Authentication>,
    ) -> Self {
        self.expect_verify()
            .once()
            .with(mockall::predicate::eq(access_token))
            .return_once(move |_| result);
        self
    }
}
