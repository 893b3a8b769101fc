//! Method-call sugar for the row composition builders.

use polars::prelude::Expr;

use super::common::{bulk_append, prepend, shift};
use super::general::cycle;
use crate::core::error::Result;

/// Extension trait exposing the builders as methods on [`Expr`]
pub trait ExprKitExt: Sized {
    /// See [`shift`]
    fn shift_fill(self, offset: i64, fill: Expr) -> Expr;

    /// See [`cycle`]
    fn cycle(self, offset: i64) -> Expr;

    /// See [`prepend`]
    fn prepend_with(self, offset: i64, prepend_expr: Option<Expr>) -> Result<Expr>;

    /// Append `others` after `self`, see [`bulk_append`]
    fn append_all<I>(self, others: I) -> Result<Expr>
    where
        I: IntoIterator<Item = Expr>;
}

impl ExprKitExt for Expr {
    fn shift_fill(self, offset: i64, fill: Expr) -> Expr {
        shift(self, offset, fill)
    }

    fn cycle(self, offset: i64) -> Expr {
        cycle(self, offset)
    }

    fn prepend_with(self, offset: i64, prepend_expr: Option<Expr>) -> Result<Expr> {
        prepend(self, offset, prepend_expr)
    }

    fn append_all<I>(self, others: I) -> Result<Expr>
    where
        I: IntoIterator<Item = Expr>,
    {
        bulk_append(std::iter::once(self).chain(others))
    }
}
