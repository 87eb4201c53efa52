use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 52523;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    /// Falls back to `DEFAULT_PORT` when `PORT` is unset or not a valid port
    pub port: u16,
}

impl ServerConfig {
    pub fn from_vars<F>(var: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = var("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = var("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
