use std::time::Duration;

use jobboard_auth_contracts::{access_token::AuthAccessTokenService, AuthService, Authentication};
use jobboard_di::Build;
use jobboard_models::{
    auth::AuthenticateError,
    user::{UserId, UserRole},
};
use jobboard_utils::trace_instrument;

pub mod access_token;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct AuthServiceImpl<AuthAccessToken> {
    auth_access_token: AuthAccessToken,
}

#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub access_token_ttl: Duration,
}

#[cfg(test)]
impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::from_secs(24 * 3600),
        }
    }
}

impl<AuthAccessToken> AuthService for AuthServiceImpl<AuthAccessToken>
where
    AuthAccessToken: AuthAccessTokenService,
{
    #[trace_instrument(skip(self, token))]
    fn authenticate(&self, token: &str) -> Result<Authentication, AuthenticateError> {
        self.auth_access_token
            .verify(token)
            .ok_or(AuthenticateError::InvalidToken)
    }

    #[trace_instrument(skip(self))]
    fn issue_token(&self, user_id: UserId, role: UserRole) -> anyhow::Result<String> {
        self.auth_access_token.issue(user_id, role)
    }
}
