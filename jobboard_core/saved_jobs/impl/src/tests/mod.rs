use jobboard_auth_contracts::MockAuthService;
use jobboard_persistence_contracts::{
    job::MockJobRepository, saved_job::MockSavedJobRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::SavedJobFeatureServiceImpl;

mod list_saved_jobs;

type Sut = SavedJobFeatureServiceImpl<
    MockDatabase,
    MockAuthService,
    MockIdService,
    MockTimeService,
    MockJobRepository<MockTransaction>,
    MockSavedJobRepository<MockTransaction>,
>;
