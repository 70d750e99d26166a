use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    macros::{id, nutype_string},
    url::Url,
};

id!(UserId);

nutype_string!(UserName(validate(len_char_min = 1, len_char_max = 128)));
nutype_string!(EmailAddress(validate(len_char_min = 3, len_char_max = 256)));
nutype_string!(CompanyName(validate(len_char_min = 1, len_char_max = 256)));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub role: UserRole,
    pub company_name: Option<CompanyName>,
    pub company_logo: Option<Url>,
    pub avatar: Option<Url>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employer,
    Jobseeker,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Jobseeker => "jobseeker",
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown user role: {0}")]
pub struct UnknownUserRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownUserRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employer" => Ok(Self::Employer),
            "jobseeker" => Ok(Self::Jobseeker),
            _ => Err(UnknownUserRole(s.into())),
        }
    }
}

/// The public fields of an employer attached to their job postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    pub id: UserId,
    pub name: UserName,
    pub company_name: Option<CompanyName>,
    pub company_logo: Option<Url>,
}

impl From<&User> for CompanyProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            company_name: user.company_name.clone(),
            company_logo: user.company_logo.clone(),
        }
    }
}

/// The fields of an applicant shown on an employer's dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantProfile {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub avatar: Option<Url>,
}

impl From<&User> for ApplicantProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}
