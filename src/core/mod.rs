// Core types shared by the expression builders
pub mod error;
pub mod literal;
pub mod naming;

// Re-exports for convenience
pub use error::{Error, Result};
pub use literal::LitValue;
pub use naming::{unique_name, DEFAULT_NAME_LENGTH, MIN_NAME_LENGTH};
