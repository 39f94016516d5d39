use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub vertex: VertexSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct VertexSettings {
    pub project_id: String,
    pub location: String,
    pub model: String,
    /// Bearer token for the Vertex AI endpoint. Absent token means the model
    /// client factory reports an absent handle.
    pub access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Fixed path overwritten with the latest transcription result.
    pub result_path: String,
}

impl Settings {
    /// Build settings from environment variables, with the original
    /// deployment's values as defaults.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            vertex: VertexSettings {
                project_id: env_or("VERTEX_PROJECT_ID", "convai-442105"),
                location: env_or("VERTEX_LOCATION", "us-central1"),
                model: env_or("VERTEX_MODEL", "gemini-1.5-flash-002"),
                access_token: std::env::var("VERTEX_ACCESS_TOKEN").ok(),
            },
            storage: StorageSettings {
                result_path: env_or("RESULT_PATH", "result.txt"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
