use jobboard_auth_contracts::{access_token::AuthAccessTokenService, Authentication};
use jobboard_di::Build;
use jobboard_models::user::{UserId, UserRole};
use jobboard_shared_contracts::jwt::JwtService;
use serde::{Deserialize, Serialize};

use crate::AuthServiceConfig;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct AuthAccessTokenServiceImpl<Jwt> {
    jwt: Jwt,
    config: AuthServiceConfig,
}

impl<Jwt> AuthAccessTokenService for AuthAccessTokenServiceImpl<Jwt>
where
    Jwt: JwtService,
{
    fn issue(&self, user_id: UserId, role: UserRole) -> anyhow::Result<String> {
        self.jwt.sign(
            Token::from(Authentication { user_id, role }),
            self.config.access_token_ttl,
        )
    }

    fn verify(&self, access_token: &str) -> Option<Authentication> {
        self.jwt
            .verify::<Token>(access_token)
            .map(Authentication::from)
            .ok()
    }
}

/// Claims of an access token, next to the `exp` claim added on signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Token {
    uid: UserId,
    role: UserRole,
}

impl From<Token> for Authentication {
    fn from(value: Token) -> Self {
        Self {
            user_id: value.uid,
            role: value.role,
        }
    }
}

impl From<Authentication> for Token {
    fn from(value: Authentication) -> Self {
        Self {
            uid: value.user_id,
            role: value.role,
        }
    }
}
