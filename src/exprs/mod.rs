//! # Expression Builders
//!
//! Composite polars expressions assembled from the engine's own primitives.
//! Every builder returns an [`Expr`](polars::prelude::Expr) (or a projection
//! list) that polars evaluates later inside `select`, `with_columns` or
//! `filter`.

pub mod common;
pub mod ext;
pub mod general;
pub mod html;
pub mod index;
pub mod template;

pub use self::common::{bulk_append, case_when, prepend, shift, Case, Condition};
pub use self::ext::ExprKitExt;
pub use self::general::{
    bucketize, bucketize_lit, cycle, is_every_nth_row, is_every_nth_row_from_config,
    move_cols_to_end, move_cols_to_start, BucketizeOptions, ColumnSelector,
};
pub use self::html::{
    make_hyperlink, make_hyperlink_from_config, make_tooltip, TextDecoration, TooltipColor,
    TooltipOptions,
};
pub use self::index::{make_index, make_index_from_config};
pub use self::template::{make_concat_str, TemplateOptions};
