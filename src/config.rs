use ingress::{IngressConfig, DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_MEMORY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub attachment_required: bool,
    pub ingress: IngressConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_format: LogFormat::Text,
            attachment_required: false,
            ingress: IngressConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or unparsable entries
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080u16);
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let attachment_required = lookup("ATTACHMENT_REQUIRED")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let max_memory = lookup("FORM_MAX_MEMORY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_MEMORY);
        let max_body_size = lookup("FORM_MAX_BODY_SIZE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BODY_SIZE);

        ServerConfig {
            host,
            port,
            log_format,
            attachment_required,
            ingress: IngressConfig {
                max_memory,
                max_body_size,
            },
        }
    }
}
