use serde::Serialize;
use std::fmt;

/// A rule violation recorded against a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    key: String,
    message: String,
}

impl ValidationError {
    pub fn new(key: &str, message: &str) -> Self {
        Self {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.key, self.message)
    }
}

/// Misuse of the validation API by the calling code.
///
/// Never recorded as a [`ValidationError`]; it means the rule set itself is
/// wrong, not the submitted data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageFault {
    #[error("{rule} is not supported for file validation (key '{key}')")]
    ValueRuleOnFiles { rule: &'static str, key: String },
}
