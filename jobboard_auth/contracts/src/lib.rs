use jobboard_models::{
    auth::{AuthError, AuthenticateError, AuthorizeError},
    user::{UserId, UserRole},
};

pub mod access_token;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AuthService: Send + Sync + 'static {
    /// Authenticates a user using an access token.
    fn authenticate(&self, token: &str) -> Result<Authentication, AuthenticateError>;

    /// Issues an access token for the given user.
    fn issue_token(&self, user_id: UserId, role: UserRole) -> anyhow::Result<String>;
}

/// The identity carried by a valid access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authentication {
    pub user_id: UserId,
    pub role: UserRole,
}

impl Authentication {
    /// Return an error if the authenticated user is not an employer.
    pub fn ensure_employer(&self) -> Result<(), AuthorizeError> {
        (self.role == UserRole::Employer)
            .then_some(())
            .ok_or(AuthorizeError::Employer)
    }

    /// Return an error if the authenticated user is not a jobseeker.
    pub fn ensure_jobseeker(&self) -> Result<(), AuthorizeError> {
        (self.role == UserRole::Jobseeker)
            .then_some(())
            .ok_or(AuthorizeError::Jobseeker)
    }
}

pub trait AuthResultExt<T> {
    fn map_auth_err(self) -> Result<T, AuthError>;
}

impl<T, E> AuthResultExt<T> for Result<T, E>
where
    E: Into<AuthError>,
{
    fn map_auth_err(self) -> Result<T, AuthError> {
        self.map_err(Into::into)
    }
}

#[cfg(feature = "mock")]
impl MockAuthService {
    /// Expect the token `"token"` to be authenticated as the given user, or
    /// rejected if `auth` is `None`.
    pub fn with_authenticate(mut self, auth: Option<(UserId, UserRole)>) -> Self {
        self.expect_authenticate()
            .once()
            .with(mockall::predicate::eq("token"))
            .return_once(move |_| {
                auth.map(|(user_id, role)| Authentication { user_id, role })
                    .ok_or(AuthenticateError::InvalidToken)
            });
        self
    }
}
