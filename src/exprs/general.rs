//! # Row-Position Builders
//!
//! Cyclic bucket assignment, every-nth-row masks, circular rotation and
//! column reordering. All of them are driven by a virtual row index or by
//! projection selectors; nothing is materialized until polars evaluates them.

use polars::prelude::*;

use super::common::{case_when, shift, Case};
use super::index::row_index;
use crate::config::ExprKitConfig;
use crate::core::error::{Error, Result};
use crate::core::literal::LitValue;
use crate::core::naming::helper_name;

/// Default output name of [`bucketize`] and [`bucketize_lit`].
pub const DEFAULT_BUCKETIZE_NAME: &str = "bucketized";

/// Default output name of [`is_every_nth_row`].
pub const DEFAULT_NTH_ROW_NAME: &str = "bool_nth_row";

/// Options for [`bucketize`] and [`bucketize_lit`]
#[derive(Debug, Clone, PartialEq)]
pub struct BucketizeOptions {
    /// Output column name
    pub name: String,
    /// Cast applied after bucket assignment
    pub return_dtype: Option<DataType>,
}

impl Default for BucketizeOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUCKETIZE_NAME.to_string(),
            return_dtype: None,
        }
    }
}

impl BucketizeOptions {
    /// Options using the output name configured in `config`
    pub fn from_config(config: &ExprKitConfig) -> Self {
        Self {
            name: config.naming.bucketized.clone(),
            return_dtype: None,
        }
    }

    /// Set the output column name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the cast applied to the result
    pub fn with_return_dtype(mut self, dtype: DataType) -> Self {
        self.return_dtype = Some(dtype);
        self
    }
}

/// Conditional chain assigning `exprs[i mod n]` to row `i`.
///
/// The last candidate is the `otherwise` branch, so only `n - 1` modulo
/// comparisons are emitted.
fn bucketize_chain(mut exprs: Vec<Expr>, name: &str) -> Result<Expr> {
    let n = exprs.len() as u32;
    let modulo = row_index(&helper_name()) % lit(n);
    let otherwise = exprs.pop();
    let cases: Vec<Case> = exprs
        .into_iter()
        .enumerate()
        .map(|(i, expr)| Case::new(modulo.clone().eq(lit(i as u32)), expr))
        .collect();
    log::debug!("bucketizing rows into {} buckets as '{}'", n, name);
    Ok(case_when(cases, otherwise)?.alias(name))
}

/// Cycle through `exprs` row by row: row `i` takes the value of
/// `exprs[i mod exprs.len()]` at that row.
///
/// # Errors
///
/// At least two expressions are required.
pub fn bucketize<I>(exprs: I, options: BucketizeOptions) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    let exprs: Vec<Expr> = exprs.into_iter().collect();
    if exprs.len() < 2 {
        return Err(Error::invalid(format!(
            "`exprs` must contain a minimum of two expressions, got {}",
            exprs.len()
        )));
    }
    let expr = bucketize_chain(exprs, &options.name)?;
    Ok(match options.return_dtype {
        Some(dtype) => expr.cast(dtype),
        None => expr,
    })
}

/// Like [`bucketize`], but cycling through literal values.
///
/// Unless `options.return_dtype` is set, the result is cast to the natural
/// polars type of the items (`Int64` for integers, `String` for strings, ...).
///
/// # Errors
///
/// At least two items are required and all items must share one type.
pub fn bucketize_lit<I, T>(items: I, options: BucketizeOptions) -> Result<Expr>
where
    I: IntoIterator<Item = T>,
    T: Into<LitValue>,
{
    let items: Vec<LitValue> = items.into_iter().map(Into::into).collect();
    if items.len() < 2 {
        return Err(Error::invalid(format!(
            "`items` must contain a minimum of two items, got {}",
            items.len()
        )));
    }
    let first = &items[0];
    if let Some(other) = items.iter().find(|item| !item.same_kind(first)) {
        return Err(Error::MixedTypes(format!(
            "`items` must contain only one unique type, found {} and {}",
            first.type_name(),
            other.type_name()
        )));
    }

    let dtype = options.return_dtype.unwrap_or_else(|| first.dtype());
    let exprs = items.iter().map(LitValue::to_expr).collect();
    Ok(bucketize_chain(exprs, &options.name)?.cast(dtype))
}

/// Boolean mask that is true at rows `offset, offset + n, offset + 2n, ...`.
///
/// Filtering with it keeps the same rows as taking every `n`th row starting
/// at `offset`, while the mask itself preserves the row count.
///
/// # Errors
///
/// `n` must be positive and `offset` non-negative.
pub fn is_every_nth_row(n: i64, offset: i64, name: &str) -> Result<Expr> {
    if n <= 0 {
        return Err(Error::invalid(format!("`n` should be positive, got {}", n)));
    }
    if offset < 0 {
        return Err(Error::invalid(format!(
            "`offset` cannot be negative, got {}",
            offset
        )));
    }
    let n = u32::try_from(n)
        .map_err(|_| Error::invalid(format!("`n` must fit in a u32 index, got {}", n)))?;

    let hits = (row_index(&helper_name()) % lit(n)).eq(lit(0u32));
    Ok(shift(hits, offset, lit(false)).alias(name))
}

/// [`is_every_nth_row`] aliased to the configured `naming.nth_row`.
pub fn is_every_nth_row_from_config(
    config: &ExprKitConfig,
    n: i64,
    offset: i64,
) -> Result<Expr> {
    is_every_nth_row(n, offset, &config.naming.nth_row)
}

/// Rotate the rows of `expr` circularly by `offset`.
///
/// Row `i` of the result holds row `(i - offset) mod len` of the input, so a
/// positive offset moves values down and wraps the tail to the front. A zero
/// offset returns `expr` unchanged and an empty frame stays empty.
pub fn cycle(expr: Expr, offset: i64) -> Expr {
    if offset == 0 {
        return expr;
    }
    // split point: where the rotated head starts
    let split = if offset > 0 {
        len() - lit(offset) % len()
    } else {
        lit(offset.unsigned_abs()) % len()
    };
    // `% len()` is undefined on an empty frame
    let split = when(len().eq(lit(0u32)))
        .then(lit(0i64))
        .otherwise(split.cast(DataType::Int64));
    expr.clone()
        .slice(split.clone(), len())
        .append(expr.slice(lit(0), split), true)
}

/// A column selector used by [`move_cols_to_start`] and [`move_cols_to_end`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSelector {
    /// Exact column name
    Name(String),
    /// Regular expression, anchored with `^` and `$`
    Pattern(String),
    /// Every column of the given data type
    Dtype(DataType),
}

impl ColumnSelector {
    fn is_dtype(&self) -> bool {
        matches!(self, Self::Dtype(_))
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        if name.starts_with('^') && name.ends_with('$') {
            Self::Pattern(name.to_string())
        } else {
            Self::Name(name.to_string())
        }
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<DataType> for ColumnSelector {
    fn from(dtype: DataType) -> Self {
        Self::Dtype(dtype)
    }
}

/// `(selected, remainder)` projections for a validated selector list.
fn split_projection<I>(selectors: I) -> Result<(Vec<Expr>, Expr)>
where
    I: IntoIterator,
    I::Item: Into<ColumnSelector>,
{
    let selectors: Vec<ColumnSelector> = selectors.into_iter().map(Into::into).collect();
    if selectors.is_empty() {
        return Err(Error::invalid("at least one column selector must be provided"));
    }

    let dtype_count = selectors.iter().filter(|s| s.is_dtype()).count();
    if dtype_count > 0 && dtype_count < selectors.len() {
        return Err(Error::invalid(
            "column selectors cannot mix names or patterns with data types",
        ));
    }

    if dtype_count > 0 {
        let dtypes: Vec<DataType> = selectors
            .into_iter()
            .filter_map(|s| match s {
                ColumnSelector::Dtype(dtype) => Some(dtype),
                _ => None,
            })
            .collect();
        return Ok((vec![dtype_cols(&dtypes)], all().exclude_dtype(&dtypes)));
    }

    let has_pattern = selectors
        .iter()
        .any(|s| matches!(s, ColumnSelector::Pattern(_)));
    let names: Vec<String> = selectors
        .into_iter()
        .filter_map(|s| match s {
            ColumnSelector::Name(name) | ColumnSelector::Pattern(name) => Some(name),
            ColumnSelector::Dtype(_) => None,
        })
        .collect();
    // patterns are only expanded by `col`, one expression each
    let selected = if has_pattern {
        names.iter().map(|name| col(name.as_str())).collect()
    } else {
        vec![cols(names.clone())]
    };
    Ok((selected, all().exclude(names)))
}

/// Projection placing the selected columns first, in the order given,
/// followed by every other column in schema order.
///
/// Dtype selectors select matching columns in schema order.
///
/// # Errors
///
/// Fails on an empty selector list or when dtype selectors are mixed with
/// name or pattern selectors.
pub fn move_cols_to_start<I>(selectors: I) -> Result<Vec<Expr>>
where
    I: IntoIterator,
    I::Item: Into<ColumnSelector>,
{
    let (mut selected, remainder) = split_projection(selectors)?;
    selected.push(remainder);
    Ok(selected)
}

/// Projection placing every unselected column first, in schema order,
/// followed by the selected columns.
///
/// # Errors
///
/// Same as [`move_cols_to_start`].
pub fn move_cols_to_end<I>(selectors: I) -> Result<Vec<Expr>>
where
    I: IntoIterator,
    I::Item: Into<ColumnSelector>,
{
    let (selected, remainder) = split_projection(selectors)?;
    let mut projection = vec![remainder];
    projection.extend(selected);
    Ok(projection)
}
