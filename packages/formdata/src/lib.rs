pub mod error;
pub mod file;
pub mod form;
pub mod validator;
pub mod value;

#[cfg(test)]
pub mod test_helpers;

pub use error::{UsageFault, ValidationError};
pub use file::{FileContent, FileHandle, FormFile};
pub use form::FormData;
pub use validator::{Target, Validator, EMAIL_REGEX};
pub use value::FormValue;
