use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    job::{JobId, JobTitle},
    macros::id,
    user::{ApplicantProfile, UserId},
    TimeRange,
};

id!(ApplicationId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Reviewed => "Reviewed",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown application status: {0}")]
pub struct UnknownApplicationStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownApplicationStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(Self::Applied),
            "Reviewed" => Ok(Self::Reviewed),
            "Hired" => Ok(Self::Hired),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(UnknownApplicationStatus(s.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application with its applicant and job identity attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationComposite {
    pub application: Application,
    pub applicant: ApplicantProfile,
    pub job: JobSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: JobId,
    pub title: JobTitle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationCountFilter {
    pub status: Option<ApplicationStatus>,
    pub created: Option<TimeRange>,
}
