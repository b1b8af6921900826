//! Server configuration

/// HTTP server configuration, populated from CLI flags.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1`.
    pub host: String,

    /// Listen port.
    pub port: u16,

    /// Allowed CORS origins.
    ///
    /// - Empty vector: no CORS headers (most restrictive)
    /// - `["*"]`: allow any origin
    /// - Explicit list: only the specified origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            // Matches the browser-based pipeline editor during development;
            // deployments should pass explicit origins.
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Warning to log at startup when the config is permissive.
    pub fn security_warning(&self) -> Option<&'static str> {
        if self.allowed_origins.iter().any(|o| o == "*") {
            Some(
                "CORS allows all origins. Restrict --allow-origin to specific \
                 origins for production deployments.",
            )
        } else {
            None
        }
    }
}
