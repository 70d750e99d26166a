use bb8_postgres::tokio_postgres::Row;
use jobboard_di::Build;
use jobboard_models::user::{ApplicantProfile, CompanyProfile, User, UserId};
use jobboard_persistence_contracts::user::UserRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresUserRepository;

columns!(user as "u": "id", "name", "email", "role", "company_name", "company_logo", "avatar", "created_at");
columns!(pub(crate) company as "u": "id", "name", "company_name", "company_logo");
columns!(pub(crate) applicant as "u": "id", "name", "email", "avatar");

impl UserRepository<PostgresTransaction> for PostgresUserRepository {
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        user_id: UserId,
    ) -> anyhow::Result<Option<User>> {
        txn.txn()
            .query_opt(
                &format!("select {USER_COLS} from users u where u.id=$1"),
                &[&*user_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_user(&row, &mut Default::default())).transpose())
    }

    async fn create(&self, txn: &mut PostgresTransaction, user: &User) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into users ({USER_COL_NAMES}) values ({})",
                    arg_indices(1..=USER_CNT)
                ),
                &[
                    &*user.id,
                    &user.name.as_str(),
                    &user.email.as_str(),
                    &user.role.as_str(),
                    &user.company_name.as_ref().map(|x| x.as_str()),
                    &user.company_logo.as_ref().map(|x| x.as_str()),
                    &user.avatar.as_ref().map(|x| x.as_str()),
                    &user.created_at,
                ],
            )
            .await?;

        Ok(())
    }
}

fn decode_user(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<User> {
    Ok(User {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        email: row.get::<_, String>(cnt.idx()).try_into()?,
        role: row.get::<_, String>(cnt.idx()).parse()?,
        company_name: row
            .get::<_, Option<String>>(cnt.idx())
            .map(TryInto::try_into)
            .transpose()?,
        company_logo: row
            .get::<_, Option<String>>(cnt.idx())
            .as_deref()
            .map(str::parse)
            .transpose()?,
        avatar: row
            .get::<_, Option<String>>(cnt.idx())
            .as_deref()
            .map(str::parse)
            .transpose()?,
        created_at: row.get(cnt.idx()),
    })
}

pub(crate) fn decode_company(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<CompanyProfile> {
    Ok(CompanyProfile {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        company_name: row
            .get::<_, Option<String>>(cnt.idx())
            .map(TryInto::try_into)
            .transpose()?,
        company_logo: row
            .get::<_, Option<String>>(cnt.idx())
            .as_deref()
            .map(str::parse)
            .transpose()?,
    })
}

pub(crate) fn decode_applicant(
    row: &Row,
    cnt: &mut ColumnCounter,
) -> anyhow::Result<ApplicantProfile> {
    Ok(ApplicantProfile {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        email: row.get::<_, String>(cnt.idx()).try_into()?,
        avatar: row
            .get::<_, Option<String>>(cnt.idx())
            .as_deref()
            .map(str::parse)
            .transpose()?,
    })
}
