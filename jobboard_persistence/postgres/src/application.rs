use std::{collections::HashMap, fmt::Write};

use bb8_postgres::tokio_postgres::{types::ToSql, Row};
use jobboard_di::Build;
use jobboard_models::{
    application::{
        Application, ApplicationComposite, ApplicationCountFilter, ApplicationStatus, JobSummary,
    },
    job::JobId,
    user::UserId,
};
use jobboard_persistence_contracts::application::ApplicationRepository;
use jobboard_utils::trace_instrument;
use uuid::Uuid;

use crate::{
    arg_indices, columns, sql_limit,
    user::{decode_applicant, APPLICANT_COLS},
    ColumnCounter, PostgresTransaction,
};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresApplicationRepository;

columns!(application as "a": "id", "job_id", "applicant_id", "status", "created_at", "updated_at");

impl ApplicationRepository<PostgresTransaction> for PostgresApplicationRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list_statuses(
        &self,
        txn: &mut PostgresTransaction,
        applicant_id: UserId,
        job_ids: &[JobId],
    ) -> anyhow::Result<HashMap<JobId, ApplicationStatus>> {
        let job_ids = job_ids.iter().map(|x| **x).collect::<Vec<Uuid>>();
        txn.txn()
            .query(
                "select distinct on (job_id) job_id, status from applications where \
                 applicant_id=$1 and job_id=any($2) order by job_id, created_at desc, id desc",
                &[&*applicant_id, &job_ids],
            )
            .await?
            .into_iter()
            .map(|row| -> anyhow::Result<(JobId, ApplicationStatus)> {
                Ok((
                    JobId::from(row.get::<_, Uuid>(0)),
                    row.get::<_, String>(1).parse::<ApplicationStatus>()?,
                ))
            })
            .collect()
    }

    #[trace_instrument(skip(self, txn))]
    async fn count_by_jobs(
        &self,
        txn: &mut PostgresTransaction,
        job_ids: &[JobId],
    ) -> anyhow::Result<HashMap<JobId, u64>> {
        let job_ids = job_ids.iter().map(|x| **x).collect::<Vec<Uuid>>();
        Ok(txn
            .txn()
            .query(
                "select job_id, count(*) from applications where job_id=any($1) group by job_id",
                &[&job_ids],
            )
            .await?
            .into_iter()
            .map(|row| (JobId::from(row.get::<_, Uuid>(0)), row.get::<_, i64>(1) as u64))
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn count_by_company(
        &self,
        txn: &mut PostgresTransaction,
        company_id: UserId,
        filter: &ApplicationCountFilter,
    ) -> anyhow::Result<u64> {
        let mut query = "select count(*) from applications a inner join jobs j on \
                         a.job_id=j.id where j.company_id=$1"
            .to_owned();
        let status = filter.status.map(ApplicationStatus::as_str);
        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&*company_id];

        if let Some(status) = &status {
            params.push(status);
            write!(&mut query, " and a.status=${}", params.len()).unwrap();
        }
        if let Some(created) = &filter.created {
            params.push(&created.start);
            params.push(&created.end);
            write!(
                &mut query,
                " and a.created_at>=${} and a.created_at<${}",
                params.len() - 1,
                params.len()
            )
            .unwrap();
        }

        txn.txn()
            .query_one(&query, &params)
            .await
            .map(|row| row.get::<_, i64>(0) as _)
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_recent_by_company(
        &self,
        txn: &mut PostgresTransaction,
        company_id: UserId,
        limit: u64,
    ) -> anyhow::Result<Vec<ApplicationComposite>> {
        let limit = sql_limit(limit)?;
        txn.txn()
            .query(
                &format!(
                    "select {APPLICATION_COLS}, {APPLICANT_COLS}, j.title from applications a \
                     inner join jobs j on a.job_id=j.id inner join users u on \
                     a.applicant_id=u.id where j.company_id=$1 order by a.created_at desc, a.id \
                     limit $2"
                ),
                &[&*company_id, &limit],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_composite(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        application: &Application,
    ) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into applications ({APPLICATION_COL_NAMES}) values ({})",
                    arg_indices(1..=APPLICATION_CNT)
                ),
                &[
                    &*application.id,
                    &*application.job_id,
                    &*application.applicant_id,
                    &application.status.as_str(),
                    &application.created_at,
                    &application.updated_at,
                ],
            )
            .await?;

        Ok(())
    }
}

fn decode_application(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Application> {
    Ok(Application {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        job_id: row.get::<_, Uuid>(cnt.idx()).into(),
        applicant_id: row.get::<_, Uuid>(cnt.idx()).into(),
        status: row.get::<_, String>(cnt.idx()).parse()?,
        created_at: row.get(cnt.idx()),
        updated_at: row.get(cnt.idx()),
    })
}

fn decode_composite(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<ApplicationComposite> {
    let application = decode_application(row, cnt)?;
    let applicant = decode_applicant(row, cnt)?;
    let job = JobSummary {
        id: application.job_id,
        title: row.get::<_, String>(cnt.idx()).try_into()?,
    };
    Ok(ApplicationComposite {
        application,
        applicant,
        job,
    })
}
