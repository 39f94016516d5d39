mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ServerSettings, Settings, StorageSettings, VertexSettings};
