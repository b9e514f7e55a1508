//! Request-level rules applied before the store is touched.

mod validation;
pub use validation::{RequestValidator, NAME_MAX_LENGTH};
