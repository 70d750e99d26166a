use std::fmt::Write;

use bb8_postgres::tokio_postgres::{types::ToSql, Row};
use chrono::{DateTime, Utc};
use jobboard_di::Build;
use jobboard_models::{
    job::{
        Job, JobComposite, JobCountFilter, JobFilter, JobId, JobPatch, JobPatchRef, JobType,
        Salary,
    },
    user::UserId,
};
use jobboard_persistence_contracts::job::JobRepository;
use jobboard_utils::{patch::PatchValue, trace_instrument};
use uuid::Uuid;

use crate::{
    arg_indices, columns, sql_limit,
    user::{decode_company, COMPANY_COLS},
    ColumnCounter, PostgresTransaction,
};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresJobRepository;

columns!(pub(crate) job as "j": "id", "company_id", "title", "description", "requirements", "location", "category", "job_type", "salary_min", "salary_max", "is_closed", "created_at", "updated_at");

pub(crate) const JOIN_COMPANY: &str = "inner join users u on j.company_id=u.id";

impl JobRepository<PostgresTransaction> for PostgresJobRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        filter: &JobFilter,
    ) -> anyhow::Result<Vec<JobComposite>> {
        let mut query = format!(
            "select {JOB_COLS}, {COMPANY_COLS} from jobs j {JOIN_COMPANY} where j.is_closed=false"
        );
        let job_type = filter.job_type.map(JobType::as_str);
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        make_filter(filter, &job_type, &mut query, &mut params);
        query.push_str(" order by j.created_at desc, j.id");

        txn.txn()
            .query(&query, &params)
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_job_composite(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn get(&self, txn: &mut PostgresTransaction, job_id: JobId) -> anyhow::Result<Option<Job>> {
        txn.txn()
            .query_opt(
                &format!("select {JOB_COLS} from jobs j where j.id=$1"),
                &[&*job_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_job(&row, &mut Default::default())).transpose())
    }

    #[trace_instrument(skip(self, txn))]
    async fn get_composite(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
    ) -> anyhow::Result<Option<JobComposite>> {
        txn.txn()
            .query_opt(
                &format!(
                    "select {JOB_COLS}, {COMPANY_COLS} from jobs j {JOIN_COMPANY} where j.id=$1"
                ),
                &[&*job_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| {
                row.map(|row| decode_job_composite(&row, &mut Default::default()))
                    .transpose()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_by_company(
        &self,
        txn: &mut PostgresTransaction,
        company_id: UserId,
    ) -> anyhow::Result<Vec<Job>> {
        txn.txn()
            .query(
                &format!(
                    "select {JOB_COLS} from jobs j where j.company_id=$1 order by j.created_at \
                     desc, j.id"
                ),
                &[&*company_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_job(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_recent_by_company(
        &self,
        txn: &mut PostgresTransaction,
        company_id: UserId,
        limit: u64,
    ) -> anyhow::Result<Vec<Job>> {
        let limit = sql_limit(limit)?;
        txn.txn()
            .query(
                &format!(
                    "select {JOB_COLS} from jobs j where j.company_id=$1 order by j.created_at \
                     desc, j.id limit $2"
                ),
                &[&*company_id, &limit],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_job(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn count_by_company(
        &self,
        txn: &mut PostgresTransaction,
        company_id: UserId,
        filter: &JobCountFilter,
    ) -> anyhow::Result<u64> {
        let mut query = "select count(*) from jobs j where j.company_id=$1".to_owned();
        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&*company_id];

        if let Some(is_closed) = &filter.is_closed {
            params.push(is_closed);
            write!(&mut query, " and j.is_closed=${}", params.len()).unwrap();
        }
        if let Some(created) = &filter.created {
            params.push(&created.start);
            params.push(&created.end);
            write!(
                &mut query,
                " and j.created_at>=${} and j.created_at<${}",
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
    async fn create(&self, txn: &mut PostgresTransaction, job: &Job) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into jobs ({JOB_COL_NAMES}) values ({})",
                    arg_indices(1..=JOB_CNT)
                ),
                &[
                    &*job.id,
                    &*job.company_id,
                    &job.title.as_str(),
                    &job.description.as_str(),
                    &job.requirements.as_str(),
                    &job.location.as_str(),
                    &job.category.as_str(),
                    &job.job_type.as_str(),
                    &*job.salary_min,
                    &*job.salary_max,
                    &job.is_closed,
                    &job.created_at,
                    &job.updated_at,
                ],
            )
            .await?;

        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn update(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
        patch: &JobPatch,
    ) -> anyhow::Result<bool> {
        let JobPatchRef {
            title,
            description,
            requirements,
            location,
            category,
            job_type,
            salary_min,
            salary_max,
            is_closed,
            updated_at,
        } = patch.as_ref();

        let mut query = "update jobs set id=id".to_owned();
        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&*job_id];

        let job_type = job_type.map(|x| x.as_str());

        if let PatchValue::Update(title) = title {
            params.push(&**title);
            write!(&mut query, ", title=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(description) = description {
            params.push(&**description);
            write!(&mut query, ", description=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(requirements) = requirements {
            params.push(&**requirements);
            write!(&mut query, ", requirements=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(location) = location {
            params.push(&**location);
            write!(&mut query, ", location=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(category) = category {
            params.push(&**category);
            write!(&mut query, ", category=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(job_type) = &job_type {
            params.push(job_type);
            write!(&mut query, ", job_type=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(salary_min) = salary_min {
            params.push(&**salary_min);
            write!(&mut query, ", salary_min=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(salary_max) = salary_max {
            params.push(&**salary_max);
            write!(&mut query, ", salary_max=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(is_closed) = is_closed {
            params.push(is_closed);
            write!(&mut query, ", is_closed=${}", params.len()).unwrap();
        }
        if let PatchValue::Update(updated_at) = updated_at {
            params.push(updated_at);
            write!(&mut query, ", updated_at=${}", params.len()).unwrap();
        }

        query.push_str(" where id=$1");

        txn.txn()
            .execute(&query, &params)
            .await
            .map(|n| n != 0)
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self, txn))]
    async fn toggle_closed(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Job>> {
        txn.txn()
            .query_opt(
                &format!(
                    "update jobs j set is_closed=not is_closed, updated_at=$2 where j.id=$1 \
                     returning {JOB_COLS}"
                ),
                &[&*job_id, &updated_at],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_job(&row, &mut Default::default())).transpose())
    }

    #[trace_instrument(skip(self, txn))]
    async fn delete(&self, txn: &mut PostgresTransaction, job_id: JobId) -> anyhow::Result<bool> {
        txn.txn()
            .execute("delete from jobs where id=$1", &[&*job_id])
            .await
            .map(|n| n != 0)
            .map_err(Into::into)
    }
}

/// `job_type` is the name of `filter.job_type`, bound by the caller so that
/// it outlives `params`.
fn make_filter<'a>(
    filter: &'a JobFilter,
    job_type: &'a Option<&'static str>,
    query: &mut String,
    params: &mut Vec<&'a (dyn ToSql + Sync)>,
) {
    if let Some(keyword) = &filter.keyword {
        params.push(&**keyword);
        write!(query, " and strpos(lower(j.title), lower(${}))>0", params.len()).unwrap();
    }
    if let Some(location) = &filter.location {
        params.push(&**location);
        write!(query, " and strpos(lower(j.location), lower(${}))>0", params.len()).unwrap();
    }
    if let Some(category) = &filter.category {
        params.push(&**category);
        write!(query, " and j.category=${}", params.len()).unwrap();
    }
    if let Some(job_type) = job_type {
        params.push(job_type);
        write!(query, " and j.job_type=${}", params.len()).unwrap();
    }
    if let Some(min_salary) = &filter.min_salary {
        params.push(&**min_salary);
        write!(query, " and j.salary_max>=${}", params.len()).unwrap();
    }
    if let Some(max_salary) = &filter.max_salary {
        params.push(&**max_salary);
        write!(query, " and j.salary_min<=${}", params.len()).unwrap();
    }
}

pub(crate) fn decode_job(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Job> {
    Ok(Job {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        company_id: row.get::<_, Uuid>(cnt.idx()).into(),
        title: row.get::<_, String>(cnt.idx()).try_into()?,
        description: row.get::<_, String>(cnt.idx()).try_into()?,
        requirements: row.get::<_, String>(cnt.idx()).try_into()?,
        location: row.get::<_, String>(cnt.idx()).try_into()?,
        category: row.get::<_, String>(cnt.idx()).try_into()?,
        job_type: row.get::<_, String>(cnt.idx()).parse()?,
        salary_min: Salary::try_new(row.get::<_, i64>(cnt.idx()))?,
        salary_max: Salary::try_new(row.get::<_, i64>(cnt.idx()))?,
        is_closed: row.get(cnt.idx()),
        created_at: row.get(cnt.idx()),
        updated_at: row.get(cnt.idx()),
    })
}

pub(crate) fn decode_job_composite(
    row: &Row,
    cnt: &mut ColumnCounter,
) -> anyhow::Result<JobComposite> {
    Ok(JobComposite {
        job: decode_job(row, cnt)?,
        company: decode_company(row, cnt)?,
    })
}

#[cfg(test)]
mod tests {
    use jobboard_models::SearchTerm;

    use super::*;

    #[test]
    fn empty_filter_adds_no_conditions() {
        let filter = JobFilter::default();
        let mut query = String::new();
        let mut params = Vec::new();

        make_filter(&filter, &None, &mut query, &mut params);

        assert_eq!(query, "");
        assert!(params.is_empty());
    }

    #[test]
    fn filter_numbers_params_in_order() {
        // Arrange
        let filter = JobFilter {
            keyword: Some(SearchTerm::try_new("rust").unwrap()),
            job_type: Some(JobType::FullTime),
            min_salary: Some(Salary::try_new(50_000).unwrap()),
            ..Default::default()
        };
        let job_type = filter.job_type.map(JobType::as_str);
        let mut query = "where true".to_owned();
        let mut params = Vec::new();

        // Act
        make_filter(&filter, &job_type, &mut query, &mut params);

        // Assert
        assert_eq!(
            query,
            "where true and strpos(lower(j.title), lower($1))>0 and j.job_type=$2 and \
             j.salary_max>=$3"
        );
        assert_eq!(params.len(), 3);
        assert_eq!(format!("{:?}", params[1]), r#""Full-Time""#);
    }
}
