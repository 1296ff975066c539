use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }
}
