use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::user::{CompanyName, EmailAddress, User, UserName, UserRole};
use jobboard_persistence_contracts::user::UserRepository;
use uuid::uuid;

pub static ALL_USERS: LazyLock<Vec<&User>> = LazyLock::new(|| vec![&ACME, &GLOBEX, &FOO, &BAR]);

pub static ACME: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("0e3a7b54-1c1f-4e4c-9a47-2b6f1f0e5a01").into(),
    name: UserName::try_new("Alice Acme").unwrap(),
    email: EmailAddress::try_new("alice@acme.example").unwrap(),
    role: UserRole::Employer,
    company_name: Some(CompanyName::try_new("ACME Corp").unwrap()),
    company_logo: Some("https://acme.example/logo.png".parse().unwrap()),
    avatar: None,
    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
});

pub static GLOBEX: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("5b0c9f2e-8a3d-4f61-b7c2-9d8e4a1f6c02").into(),
    name: UserName::try_new("Grace Globex").unwrap(),
    email: EmailAddress::try_new("grace@globex.example").unwrap(),
    role: UserRole::Employer,
    company_name: Some(CompanyName::try_new("Globex Corporation").unwrap()),
    company_logo: None,
    avatar: None,
    created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
});

pub static FOO: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("a8d95e0f-71ae-4c49-995e-695b7c93848c").into(),
    name: UserName::try_new("Foo").unwrap(),
    email: EmailAddress::try_new("foo@example.com").unwrap(),
    role: UserRole::Jobseeker,
    company_name: None,
    company_logo: None,
    avatar: Some("https://example.com/avatars/foo.png".parse().unwrap()),
    created_at: Utc.with_ymd_and_hms(2024, 2, 14, 13, 37, 42).unwrap(),
});

pub static BAR: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("51a8d5b8-8b2b-4b37-9c0e-3a2d3e7f0e04").into(),
    name: UserName::try_new("Bar").unwrap(),
    email: EmailAddress::try_new("bar@example.com").unwrap(),
    role: UserRole::Jobseeker,
    company_name: None,
    company_logo: None,
    avatar: None,
    created_at: Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl UserRepository<Txn>,
) -> anyhow::Result<()> {
    for &user in &*ALL_USERS {
        repo.create(txn, user).await?;
    }
    Ok(())
}
