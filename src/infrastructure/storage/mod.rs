mod local_result_store;
mod mock_result_store;

pub use local_result_store::LocalResultStore;
pub use mock_result_store::{FailingResultStore, MockResultStore};
