/// Bytes of file content kept in memory per request before spilling to
/// temporary files (1 MiB).
pub const DEFAULT_MAX_MEMORY: usize = 2 << 19;

/// Largest multipart body accepted (32 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 32 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngressConfig {
    pub max_memory: usize,
    pub max_body_size: usize,
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self {
            max_memory: DEFAULT_MAX_MEMORY,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
