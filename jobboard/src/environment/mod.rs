use jobboard_api_rest::RestServerConfig;
use jobboard_auth_impl::AuthServiceConfig;
use jobboard_config::Config;
use jobboard_core_analytics_impl::AnalyticsFeatureConfig;
use jobboard_core_health_impl::HealthFeatureConfig;
use jobboard_di::provider;
use jobboard_shared_impl::jwt::JwtServiceConfig;
use types::Database;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Shared
            JwtServiceConfig,

            // Auth
            AuthServiceConfig,

            // Core
            AnalyticsFeatureConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database) -> Self {
        Self {
            _cache: Default::default(),
            database,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Shared
        jwt_service_config: JwtServiceConfig,

        // Auth
        auth_service_config: AuthServiceConfig,

        // Core
        analytics_feature_config: AnalyticsFeatureConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        // Shared
        let jwt_service_config = JwtServiceConfig::new(&config.jwt.secret)?;

        // Auth
        let auth_service_config = AuthServiceConfig {
            access_token_ttl: config.session.access_token_ttl.into(),
        };

        // Core
        let analytics_feature_config = AnalyticsFeatureConfig {
            trend_window: config.analytics.trend_window.into(),
            recent_jobs: config.analytics.recent_jobs,
            recent_applications: config.analytics.recent_applications,
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Shared
            jwt_service_config,

            // Auth
            auth_service_config,

            // Core
            analytics_feature_config,
            health_feature_config,
        })
    }
}
