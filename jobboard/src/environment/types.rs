use jobboard_auth_impl::{access_token::AuthAccessTokenServiceImpl, AuthServiceImpl};
use jobboard_core_analytics_impl::AnalyticsFeatureServiceImpl;
use jobboard_core_applications_impl::ApplicationStatusServiceImpl;
use jobboard_core_health_impl::HealthFeatureServiceImpl;
use jobboard_core_jobs_impl::{ownership::JobOwnershipServiceImpl, JobFeatureServiceImpl};
use jobboard_core_saved_jobs_impl::SavedJobFeatureServiceImpl;
use jobboard_persistence_postgres::{
    application::PostgresApplicationRepository, job::PostgresJobRepository,
    saved_job::PostgresSavedJobRepository, PostgresDatabase,
};
use jobboard_shared_impl::{id::IdServiceImpl, jwt::JwtServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer =
    jobboard_api_rest::RestServer<HealthFeature, JobFeature, SavedJobFeature, AnalyticsFeature>;

// Persistence
pub type Database = PostgresDatabase;

pub type JobRepo = PostgresJobRepository;
pub type ApplicationRepo = PostgresApplicationRepository;
pub type SavedJobRepo = PostgresSavedJobRepository;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;
pub type Jwt = JwtServiceImpl<Time>;

// Auth
pub type Auth = AuthServiceImpl<AuthAccessToken>;
pub type AuthAccessToken = AuthAccessTokenServiceImpl<Jwt>;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database>;

pub type JobFeature = JobFeatureServiceImpl<
    Database,
    Auth,
    Id,
    Time,
    JobRepo,
    SavedJobRepo,
    ApplicationStatus,
    JobOwnership,
>;
pub type JobOwnership = JobOwnershipServiceImpl<JobRepo>;
pub type ApplicationStatus = ApplicationStatusServiceImpl<ApplicationRepo>;

pub type SavedJobFeature =
    SavedJobFeatureServiceImpl<Database, Auth, Id, Time, JobRepo, SavedJobRepo>;

pub type AnalyticsFeature =
    AnalyticsFeatureServiceImpl<Database, Auth, Time, JobRepo, ApplicationRepo>;
