mod service_tests;
mod storage_tests;

use crate::core::services::SiteService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> SiteService<InMemoryStorage> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    SiteService::new(InMemoryStorage::new())
}
