pub mod config;
pub mod error;
pub mod parse;

#[cfg(test)]
pub mod test_helpers;

pub use config::{IngressConfig, DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_MEMORY};
pub use error::IngressError;
pub use parse::{parse, parse_with};
