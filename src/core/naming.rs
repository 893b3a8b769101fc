//! Helper column names
//!
//! Some builders need an intermediate row index. Its alias must never shadow a
//! caller column (a frame may already carry an `index` column), so it is
//! named with a random alphanumeric token.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::core::error::{Error, Result};

/// Shortest accepted helper name length.
pub const MIN_NAME_LENGTH: usize = 8;

/// Length used when the caller does not ask for a specific one.
pub const DEFAULT_NAME_LENGTH: usize = 8;

/// Generate a random alphanumeric name of exactly `len` characters.
///
/// Fails when `len` is below [`MIN_NAME_LENGTH`].
pub fn unique_name(len: usize) -> Result<String> {
    if len < MIN_NAME_LENGTH {
        return Err(Error::invalid(format!(
            "`len` must be at least {} to ensure uniqueness of the name, got {}",
            MIN_NAME_LENGTH, len
        )));
    }
    Ok(random_name(len))
}

/// Name for an internal helper column.
pub(crate) fn helper_name() -> String {
    let name = random_name(DEFAULT_NAME_LENGTH);
    log::trace!("generated helper name {}", name);
    name
}

fn random_name(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
