use std::fmt::Debug;

use jobboard_di::Build;
use jobboard_shared_contracts::id::IdService;
use jobboard_utils::trace_instrument;
use uuid::Uuid;

/// Generates time ordered (version 7) UUIDs.
#[derive(Debug, Clone, Copy, Build)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn generate<I: From<Uuid> + Debug + 'static>(&self) -> I {
        Uuid::now_v7().into()
    }
}
