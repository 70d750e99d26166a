use std::{net::IpAddr, sync::Arc};

use aide::{
    axum::ApiRouter,
    openapi::{Info, OpenApi},
};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    Extension, Router,
};
use jobboard_core_analytics_contracts::AnalyticsFeatureService;
use jobboard_core_health_contracts::HealthFeatureService;
use jobboard_core_jobs_contracts::JobFeatureService;
use jobboard_core_saved_jobs_contracts::SavedJobFeatureService;
use jobboard_di::Build;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

mod docs;
mod errors;
mod extractors;
mod macros;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Job, SavedJob, Analytics> {
    config: RestServerConfig,
    health: Health,
    job: Job,
    saved_job: SavedJob,
    analytics: Analytics,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl<Health, Job, SavedJob, Analytics> RestServer<Health, Job, SavedJob, Analytics>
where
    Health: HealthFeatureService,
    Job: JobFeatureService,
    SavedJob: SavedJobFeatureService,
    Analytics: AnalyticsFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port } = self.config.clone();

        let router = self.router();

        info!("Starting REST API server on {host}:{port}");
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let mut api = OpenApi {
            info: Info {
                title: "Job Board Backend".into(),
                description: Some("Job postings, saved jobs and employer analytics.".into()),
                version: jobboard_utils::jobboard_version().into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

        let router = ApiRouter::new()
            .merge(routes::root::router())
            .merge(routes::health::router(self.health.into()))
            .merge(routes::jobs::router(self.job.into()))
            .merge(routes::saved_jobs::router(self.saved_job.into()))
            .merge(routes::analytics::router(self.analytics.into()))
            .finish_api_with(&mut api, docs::transform_api);

        let router = router
            .merge(docs::router())
            .layer(Extension(Arc::new(api)));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);

        router.layer(cors)
    }
}
