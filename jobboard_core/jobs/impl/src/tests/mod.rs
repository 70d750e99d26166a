use jobboard_auth_contracts::MockAuthService;
use jobboard_core_applications_contracts::MockApplicationStatusService;
use jobboard_core_jobs_contracts::ownership::MockJobOwnershipService;
use jobboard_persistence_contracts::{
    job::MockJobRepository, saved_job::MockSavedJobRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::JobFeatureServiceImpl;

mod toggle_close;

type Sut = JobFeatureServiceImpl<
    MockDatabase,
    MockAuthService,
    MockIdService,
    MockTimeService,
    MockJobRepository<MockTransaction>,
    MockSavedJobRepository<MockTransaction>,
    MockApplicationStatusService<MockTransaction>,
    MockJobOwnershipService<MockTransaction>,
>;
