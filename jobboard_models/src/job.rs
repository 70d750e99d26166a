use std::str::FromStr;

use chrono::{DateTime, Utc};
use jobboard_utils::patch::Patch;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    macros::{id, nutype_string},
    user::{CompanyProfile, UserId},
    SearchTerm, TimeRange,
};

id!(JobId);

nutype_string!(JobTitle(validate(len_char_min = 1, len_char_max = 256)));
nutype_string!(JobDescription(validate(len_char_min = 1, len_char_max = 8192)));
nutype_string!(JobRequirements(validate(len_char_max = 8192)));
nutype_string!(JobLocation(validate(len_char_min = 1, len_char_max = 256)));
nutype_string!(JobCategory(validate(len_char_min = 1, len_char_max = 128)));

#[::nutype::nutype(
    validate(greater_or_equal = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Deref,
        TryFrom,
        Serialize,
        Deserialize,
        JsonSchema,
    )
)]
pub struct Salary(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum JobType {
    Remote,
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::FullTime => "Full-Time",
            Self::PartTime => "Part-Time",
            Self::Internship => "Internship",
            Self::Contract => "Contract",
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown job type: {0}")]
pub struct UnknownJobType(pub String);

impl FromStr for JobType {
    type Err = UnknownJobType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Remote,
            Self::FullTime,
            Self::PartTime,
            Self::Internship,
            Self::Contract,
        ]
        .into_iter()
        .find(|x| x.as_str() == s)
        .ok_or_else(|| UnknownJobType(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Patch)]
pub struct Job {
    #[no_patch]
    pub id: JobId,
    #[no_patch]
    pub company_id: UserId,
    pub title: JobTitle,
    pub description: JobDescription,
    pub requirements: JobRequirements,
    pub location: JobLocation,
    pub category: JobCategory,
    pub job_type: JobType,
    pub salary_min: Salary,
    pub salary_max: Salary,
    pub is_closed: bool,
    #[no_patch]
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.company_id == user_id
    }
}

/// A job together with the public profile of its company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobComposite {
    pub job: Job,
    pub company: CompanyProfile,
}

/// Criteria for the public job search. Closed jobs never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Case-insensitive substring of the title
    pub keyword: Option<SearchTerm>,
    /// Case-insensitive substring of the location
    pub location: Option<SearchTerm>,
    pub category: Option<JobCategory>,
    pub job_type: Option<JobType>,
    /// Matches jobs whose maximum salary is at least this value
    pub min_salary: Option<Salary>,
    /// Matches jobs whose minimum salary is at most this value
    pub max_salary: Option<Salary>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobCountFilter {
    pub is_closed: Option<bool>,
    pub created: Option<TimeRange>,
}
