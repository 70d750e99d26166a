use std::time::Duration;

use clap::Subcommand;
use jobboard_auth_contracts::AuthService;
use jobboard_config::Config;
use jobboard_di::Provide;
use jobboard_models::user::{UserId, UserRole};
use uuid::Uuid;

use crate::environment::{types::Auth, ConfigProvider};

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue an access token for the given user
    #[command(aliases(["i"]))]
    Issue {
        /// The id of the user
        user_id: Uuid,
        /// The role the token grants
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        /// The time to live in seconds. Defaults to the configured access
        /// token ttl.
        #[arg(long)]
        ttl: Option<u64>,
    },
}

impl TokenCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Issue { user_id, role, ttl } => {
                issue(config, user_id.into(), role, ttl.map(Duration::from_secs))
            }
        }
    }
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    s.parse().map_err(|err| format!("{err}"))
}

fn issue(
    mut config: Config,
    user_id: UserId,
    role: UserRole,
    ttl: Option<Duration>,
) -> anyhow::Result<()> {
    if let Some(ttl) = ttl {
        config.session.access_token_ttl = jobboard_config::Duration(ttl);
    }

    let mut provider = ConfigProvider::new(&config)?;
    let auth: Auth = provider.provide();

    let token = auth.issue_token(user_id, role)?;
    println!("{token}");

    Ok(())
}
