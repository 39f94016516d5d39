mod model_client;
mod result_store;

pub use model_client::{ModelClient, ModelClientError, ModelClientFactory};
pub use result_store::{ResultStore, ResultStoreError};
