use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use jobboard_core_health_contracts::{HealthFeatureService, HealthStatus};
use jobboard_di::Build;
use jobboard_persistence_contracts::Database;
use jobboard_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db> {
    time: Time,
    db: Db,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db> HealthFeatureService for HealthFeatureServiceImpl<Time, Db>
where
    Time: TimeService,
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let is_fresh = |cached: &&CachedStatus| now < cached.timestamp + self.config.cache_ttl;

        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        cache_guard
            .insert(CachedStatus {
                status: HealthStatus { database },
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use jobboard_persistence_contracts::MockDatabase;
    use jobboard_shared_contracts::time::MockTimeService;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn make_sut(
        time: MockTimeService,
        db: MockDatabase,
    ) -> HealthFeatureServiceImpl<MockTimeService, MockDatabase> {
        HealthFeatureServiceImpl {
            time,
            db,
            config: HealthFeatureConfig {
                cache_ttl: Duration::from_secs(2),
            },
            state: Default::default(),
        }
    }

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let time = MockTimeService::new().with_now(start());
        let db = MockDatabase::new().with_ping(true);
        let sut = make_sut(time, db);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { database: true });
        assert!(result.is_healthy());
    }

    #[tokio::test]
    async fn database_unreachable() {
        // Arrange
        let time = MockTimeService::new().with_now(start());
        let db = MockDatabase::new().with_ping(false);
        let sut = make_sut(time, db);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { database: false });
        assert!(!result.is_healthy());
    }

    #[tokio::test]
    async fn cached_within_ttl() {
        // Arrange
        let mut time = MockTimeService::new();
        let mut seq = mockall::Sequence::new();
        for offset in [0, 1, 3] {
            time.expect_now()
                .once()
                .in_sequence(&mut seq)
                .return_const(start() + TimeDelta::seconds(offset));
        }
        let db = MockDatabase::new().with_ping(true).with_ping(false);
        let sut = make_sut(time, db);

        // Act
        let first = sut.get_status().await;
        let cached = sut.get_status().await;
        let refreshed = sut.get_status().await;

        // Assert
        assert!(first.database);
        assert!(cached.database);
        assert!(!refreshed.database);
    }
}
