//! # String Templates
//!
//! Per-row string interpolation: a template is split on a placeholder token
//! and the literal fragments are interleaved with column values.

use polars::prelude::*;

use crate::config::ExprKitConfig;
use crate::core::error::{Error, Result};

/// Default placeholder token.
pub const DEFAULT_PLACEHOLDER: &str = "[$X]";

/// Default output name of [`make_concat_str`].
pub const DEFAULT_TEMPLATE_NAME: &str = "literal";

/// Options for [`make_concat_str`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Token marking where a column value is inserted
    pub placeholder: String,
    /// Output column name
    pub name: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }
}

impl TemplateOptions {
    /// Options using the placeholder and output name configured in `config`
    pub fn from_config(config: &ExprKitConfig) -> Self {
        Self {
            placeholder: config.template.placeholder.clone(),
            name: config.naming.literal.clone(),
        }
    }

    /// Set the output column name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the placeholder token
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Fill `template` row by row with the values of `col_names`.
///
/// The n-th placeholder is replaced by the n-th column. A null in any of the
/// columns yields a null string for that row.
///
/// # Errors
///
/// Fails when the placeholder is empty, a column name is empty, or the number
/// of placeholders differs from the number of column names.
///
/// # Example
///
/// ```
/// use exprkit::exprs::template::{make_concat_str, TemplateOptions};
///
/// let expr = make_concat_str("<p>[$X]</p>", ["x"], TemplateOptions::default()).unwrap();
/// ```
pub fn make_concat_str<I, S>(template: &str, col_names: I, options: TemplateOptions) -> Result<Expr>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if options.placeholder.is_empty() {
        return Err(Error::invalid("the placeholder token cannot be empty"));
    }
    let col_names: Vec<String> = col_names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    if col_names.iter().any(|name| name.is_empty()) {
        return Err(Error::invalid("all column names must be non-empty strings"));
    }

    let fragments: Vec<&str> = template.split(options.placeholder.as_str()).collect();
    let placeholders = fragments.len() - 1;
    if placeholders != col_names.len() {
        return Err(Error::PlaceholderMismatch {
            placeholders,
            columns: col_names.len(),
        });
    }

    let mut parts = Vec::with_capacity(fragments.len() + col_names.len());
    let mut columns = col_names.iter();
    for fragment in fragments {
        parts.push(lit(fragment));
        if let Some(name) = columns.next() {
            parts.push(col(name.as_str()));
        }
    }
    log::trace!(
        "template with {} placeholders aliased to '{}'",
        placeholders,
        options.name
    );
    Ok(concat_str(parts, "", false).alias(options.name.as_str()))
}
