use chrono::{DateTime, Utc};

use crate::{
    job::{JobComposite, JobId},
    macros::id,
    user::UserId,
};

id!(SavedJobId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedJob {
    pub id: SavedJobId,
    pub job_id: JobId,
    pub jobseeker_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A saved job with the referenced job populated.
///
/// `job` is `None` if the job has been deleted after it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedJobComposite {
    pub saved_job: SavedJob,
    pub job: Option<JobComposite>,
}
