use jobboard_demo::{user::ALL_USERS, UUID1};
use jobboard_persistence_contracts::{user::UserRepository, Database};
use jobboard_persistence_postgres::user::PostgresUserRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresUserRepository = PostgresUserRepository;

#[tokio::test]
#[ignore = "requires a running postgres database"]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &user in &*ALL_USERS {
        let result = REPO.get(&mut txn, user.id).await.unwrap().unwrap();
        assert_eq!(&result, user);
    }

    let result = REPO.get(&mut txn, UUID1.into()).await.unwrap();
    assert_eq!(result, None);
}
