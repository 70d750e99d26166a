use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Authenticate(#[from] AuthenticateError),
    #[error(transparent)]
    Authorize(#[from] AuthorizeError),
}

#[derive(Debug, Error)]
pub enum AuthenticateError {
    #[error("The access token is invalid or has expired.")]
    InvalidToken,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum AuthorizeError {
    #[error("The user is not an employer.")]
    Employer,
    #[error("The user is not a jobseeker.")]
    Jobseeker,
}
