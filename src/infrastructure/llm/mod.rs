mod mock_model_client;
mod vertex_client_factory;
mod vertex_gemini_client;

pub use mock_model_client::{MockModelClient, MockModelFactory};
pub use vertex_client_factory::VertexClientFactory;
pub use vertex_gemini_client::VertexGeminiClient;
