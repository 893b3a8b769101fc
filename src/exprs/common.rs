//! # Conditional Chains and Row Composition
//!
//! Builders that combine expressions row-wise: chained `when/then/otherwise`,
//! end-to-end appends, and shifts or prepends whose exposed boundary rows are
//! filled from another expression.

use polars::prelude::*;

use super::index::row_index;
use crate::core::error::{Error, Result};
use crate::core::naming::helper_name;

/// The predicate part of a [`Case`].
///
/// All shapes reduce to one predicate: the contained expressions are combined
/// with a logical AND.
#[derive(Debug, Clone)]
pub enum Condition {
    /// One predicate
    Single(Expr),
    /// Several predicates that must all hold
    All(Vec<Expr>),
    /// A pre-grouped set of conditions, possibly nested
    Group(Vec<Condition>),
}

impl Condition {
    /// Collapse the condition into a single boolean expression.
    pub fn into_predicate(self) -> Result<Expr> {
        let mut predicates = Vec::new();
        self.flatten_into(&mut predicates);
        predicates
            .into_iter()
            .reduce(|acc, predicate| acc.and(predicate))
            .ok_or_else(|| Error::invalid("a condition must contain at least one predicate"))
    }

    fn flatten_into(self, out: &mut Vec<Expr>) {
        match self {
            Self::Single(expr) => out.push(expr),
            Self::All(exprs) => out.extend(exprs),
            Self::Group(conditions) => {
                for condition in conditions {
                    condition.flatten_into(out);
                }
            },
        }
    }
}

impl From<Expr> for Condition {
    fn from(expr: Expr) -> Self {
        Self::Single(expr)
    }
}

impl From<Vec<Expr>> for Condition {
    fn from(exprs: Vec<Expr>) -> Self {
        Self::All(exprs)
    }
}

impl<const N: usize> From<[Expr; N]> for Condition {
    fn from(exprs: [Expr; N]) -> Self {
        Self::All(exprs.into())
    }
}

impl From<Vec<Condition>> for Condition {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::Group(conditions)
    }
}

/// One `when -> then` branch of [`case_when`].
#[derive(Debug, Clone)]
pub struct Case {
    /// Predicate selecting the rows of this branch
    pub condition: Condition,
    /// Value for the selected rows
    pub then: Expr,
}

impl Case {
    /// Create a new branch
    pub fn new<C: Into<Condition>>(condition: C, then: Expr) -> Self {
        Self {
            condition: condition.into(),
            then,
        }
    }
}

impl<C: Into<Condition>> From<(C, Expr)> for Case {
    fn from((condition, then): (C, Expr)) -> Self {
        Self::new(condition, then)
    }
}

/// Chain several `when/then` branches into one conditional expression.
///
/// Branches are tested top to bottom per row; the first branch whose
/// condition holds provides the value. Rows matching no branch take
/// `otherwise`, or null when it is `None`.
///
/// # Errors
///
/// Fails when `cases` is empty or when a branch has an empty condition.
pub fn case_when<I>(cases: I, otherwise: Option<Expr>) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Case>,
{
    let mut cases = cases.into_iter().map(Into::into);
    let first = cases
        .next()
        .ok_or_else(|| Error::invalid("`cases` must contain at least one branch"))?;
    let otherwise = otherwise.unwrap_or_else(|| lit(NULL));

    let then = when(first.condition.into_predicate()?).then(first.then);
    let mut branches = 1;

    let expr = match cases.next() {
        None => then.otherwise(otherwise),
        Some(second) => {
            let mut chained = then
                .when(second.condition.into_predicate()?)
                .then(second.then);
            branches += 1;
            for case in cases {
                chained = chained
                    .when(case.condition.into_predicate()?)
                    .then(case.then);
                branches += 1;
            }
            chained.otherwise(otherwise)
        },
    };

    log::trace!("built case_when with {} branches", branches);
    Ok(expr)
}

/// Append expressions end to end, left to right.
///
/// # Errors
///
/// At least two expressions are required.
pub fn bulk_append<I>(exprs: I) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    let exprs: Vec<Expr> = exprs.into_iter().collect();
    let count = exprs.len();
    if count < 2 {
        return Err(Error::invalid(format!(
            "at least two expressions must be provided, got {}",
            count
        )));
    }
    let expr = exprs
        .into_iter()
        .reduce(|acc, next| acc.append(next, true))
        .ok_or_else(|| Error::invalid("at least two expressions must be provided"))?;
    log::trace!("appended {} expressions", count);
    Ok(expr)
}

/// `(keep predicate, shifted expr)` for a non-zero offset.
fn shifted_branch(expr: Expr, offset: i64) -> (Expr, Expr) {
    let shifted = expr.shift(lit(offset));
    let index = row_index(&helper_name());
    let keep = if offset > 0 {
        // leading rows are exposed
        index.gt_eq(lit(offset))
    } else {
        // trailing rows are exposed
        index.lt(len() + lit(offset))
    };
    (keep, shifted)
}

/// Shift `expr` by `offset` rows and fill the exposed rows from `fill`.
///
/// Positive offsets shift down and fill the first `offset` rows; negative
/// offsets shift up and fill the last `|offset|` rows. Each filled row takes
/// the value `fill` has at that same row. A zero offset returns `expr`
/// unchanged.
pub fn shift(expr: Expr, offset: i64, fill: Expr) -> Expr {
    if offset == 0 {
        return expr;
    }
    let (keep, shifted) = shifted_branch(expr, offset);
    when(keep).then(shifted).otherwise(fill)
}

/// Prepend `offset` rows in front of `expr`.
///
/// The prepended rows come from `prepend_expr` (its first `offset` values),
/// defaulting to `expr` itself. When `offset` exceeds the frame length the
/// prepended block is cut to the frame length, so every row appears twice.
///
/// # Errors
///
/// Negative offsets are rejected.
pub fn prepend(expr: Expr, offset: i64, prepend_expr: Option<Expr>) -> Result<Expr> {
    if offset < 0 {
        return Err(Error::invalid(format!(
            "`offset` cannot be negative, got {}",
            offset
        )));
    }
    if offset == 0 {
        return Ok(expr);
    }
    let fill = prepend_expr.unwrap_or_else(|| expr.clone());
    let head = shift(expr.clone(), offset, fill).head(Some(offset as usize));
    Ok(head.append(expr, true))
}
