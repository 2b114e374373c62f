//! Errors for canonical order construction.
//!
//! The reordering transform itself is total: it returns its input
//! unchanged for anything it cannot confidently parse. Only building a
//! [`crate::CanonicalOrder`] from caller-supplied names can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("duplicate element name '{name}' in canonical order")]
    DuplicateOrderKey { name: String },
}

pub type Result<T> = std::result::Result<T, OrderError>;
