//! # Virtual Row Index
//!
//! A row index expressed as `int_range(0, len())` so it can be composed inline
//! without materializing a column.

use polars::prelude::*;

use crate::config::ExprKitConfig;
use crate::core::error::{Error, Result};

/// Default output name of [`make_index`].
pub const DEFAULT_INDEX_NAME: &str = "index";

/// Zero-based `UInt32` row index aliased to `name`.
pub(crate) fn row_index(name: &str) -> Expr {
    int_range(lit(0), len(), 1, DataType::UInt32).alias(name)
}

/// Returns an expression yielding a sequential `UInt32` row index.
///
/// The index starts at `offset` and has the same length as the frame it is
/// evaluated against, like `DataFrame::with_row_index` but usable anywhere an
/// expression is accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `offset` is negative or does not
/// fit in a `u32`.
pub fn make_index(name: &str, offset: i64) -> Result<Expr> {
    if offset < 0 {
        return Err(Error::invalid(format!(
            "`offset` cannot be negative, got {}",
            offset
        )));
    }
    let offset = u32::try_from(offset).map_err(|_| {
        Error::invalid(format!("`offset` must fit in a u32 index, got {}", offset))
    })?;

    let index = row_index(name);
    if offset == 0 {
        return Ok(index);
    }
    Ok((index + lit(offset)).alias(name))
}

/// [`make_index`] aliased to the configured `naming.index`.
pub fn make_index_from_config(config: &ExprKitConfig, offset: i64) -> Result<Expr> {
    make_index(&config.naming.index, offset)
}
