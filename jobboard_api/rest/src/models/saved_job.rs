use chrono::{DateTime, Utc};
use jobboard_models::{
    job::JobId,
    saved_job::{SavedJob, SavedJobComposite, SavedJobId},
    user::UserId,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::job::ApiJobComposite;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiSavedJob {
    pub id: SavedJobId,
    pub jobseeker: UserId,
    pub job: JobId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiSavedJobComposite {
    pub id: SavedJobId,
    pub jobseeker: UserId,
    /// `null` if the job has been deleted
    pub job: Option<ApiJobComposite>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct PathSavedJobId {
    pub job_id: JobId,
}

impl From<SavedJob> for ApiSavedJob {
    fn from(saved_job: SavedJob) -> Self {
        let SavedJob {
            id,
            job_id,
            jobseeker_id,
            created_at,
        } = saved_job;
        Self {
            id,
            jobseeker: jobseeker_id,
            job: job_id,
            created_at,
        }
    }
}

impl From<SavedJobComposite> for ApiSavedJobComposite {
    fn from(SavedJobComposite { saved_job, job }: SavedJobComposite) -> Self {
        Self {
            id: saved_job.id,
            jobseeker: saved_job.jobseeker_id,
            job: job.map(Into::into),
            created_at: saved_job.created_at,
        }
    }
}
