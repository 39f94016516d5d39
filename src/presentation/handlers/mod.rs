mod health;
mod index;
mod transcribe;

pub use health::health_handler;
pub use index::index_handler;
pub use transcribe::transcribe_handler;
