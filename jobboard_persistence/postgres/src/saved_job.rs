use std::collections::HashSet;

use bb8_postgres::tokio_postgres::{self, Row};
use jobboard_di::Build;
use jobboard_models::{
    job::JobId,
    saved_job::{SavedJob, SavedJobComposite},
    user::UserId,
};
use jobboard_persistence_contracts::saved_job::{SavedJobRepoError, SavedJobRepository};
use jobboard_utils::trace_instrument;
use uuid::Uuid;

use crate::{
    arg_indices, columns,
    job::{decode_job_composite, JOB_CNT, JOB_COLS},
    user::{COMPANY_CNT, COMPANY_COLS},
    ColumnCounter, PostgresTransaction,
};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresSavedJobRepository;

columns!(saved_job as "s": "id", "job_id", "jobseeker_id", "created_at");

impl SavedJobRepository<PostgresTransaction> for PostgresSavedJobRepository {
    #[trace_instrument(skip(self, txn))]
    async fn exists(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
        jobseeker_id: UserId,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .query_opt(
                "select id from saved_jobs where job_id=$1 and jobseeker_id=$2",
                &[&*job_id, &*jobseeker_id],
            )
            .await
            .map(|row| row.is_some())
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        saved_job: &SavedJob,
    ) -> Result<(), SavedJobRepoError> {
        txn.txn()
            .execute(
                &format!(
                    "insert into saved_jobs ({SAVED_JOB_COL_NAMES}) values ({})",
                    arg_indices(1..=SAVED_JOB_CNT)
                ),
                &[
                    &*saved_job.id,
                    &*saved_job.job_id,
                    &*saved_job.jobseeker_id,
                    &saved_job.created_at,
                ],
            )
            .await
            .map_err(map_saved_job_repo_error)?;

        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn delete(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
        jobseeker_id: UserId,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute(
                "delete from saved_jobs where job_id=$1 and jobseeker_id=$2",
                &[&*job_id, &*jobseeker_id],
            )
            .await
            .map(|n| n != 0)
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_job_ids(
        &self,
        txn: &mut PostgresTransaction,
        jobseeker_id: UserId,
        job_ids: &[JobId],
    ) -> anyhow::Result<HashSet<JobId>> {
        let job_ids = job_ids.iter().map(|x| **x).collect::<Vec<Uuid>>();
        Ok(txn
            .txn()
            .query(
                "select job_id from saved_jobs where jobseeker_id=$1 and job_id=any($2)",
                &[&*jobseeker_id, &job_ids],
            )
            .await?
            .into_iter()
            .map(|row| row.get::<_, Uuid>(0).into())
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_by_jobseeker(
        &self,
        txn: &mut PostgresTransaction,
        jobseeker_id: UserId,
    ) -> anyhow::Result<Vec<SavedJobComposite>> {
        txn.txn()
            .query(
                &format!(
                    "select {SAVED_JOB_COLS}, {JOB_COLS}, {COMPANY_COLS} from saved_jobs s left \
                     join jobs j on s.job_id=j.id left join users u on j.company_id=u.id where \
                     s.jobseeker_id=$1 order by s.created_at desc, s.id"
                ),
                &[&*jobseeker_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_composite(&row, &mut Default::default()))
                    .collect()
            })
    }
}

fn decode_saved_job(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<SavedJob> {
    Ok(SavedJob {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        job_id: row.get::<_, Uuid>(cnt.idx()).into(),
        jobseeker_id: row.get::<_, Uuid>(cnt.idx()).into(),
        created_at: row.get(cnt.idx()),
    })
}

fn decode_composite(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<SavedJobComposite> {
    let saved_job = decode_saved_job(row, cnt)?;

    // the left joined columns are all null if the job has been deleted
    let job = if row.get::<_, Option<Uuid>>(cnt.peek()).is_some() {
        Some(decode_job_composite(row, cnt)?)
    } else {
        cnt.skip(JOB_CNT + COMPANY_CNT);
        None
    };

    Ok(SavedJobComposite { saved_job, job })
}

fn map_saved_job_repo_error(err: tokio_postgres::Error) -> SavedJobRepoError {
    match err.as_db_error() {
        Some(db_err) if db_err.constraint() == Some("saved_jobs_job_id_jobseeker_id_idx") => {
            SavedJobRepoError::Conflict
        }
        _ => SavedJobRepoError::Other(err.into()),
    }
}
