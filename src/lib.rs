//! # exprkit
//!
//! Composite [polars](https://pola.rs) expressions built from the engine's own
//! primitives: multi-branch conditionals, row indices, round-robin bucketing,
//! row shifting/cycling, column reordering, string templates and HTML snippets.
//!
//! Builders only construct expressions. Nothing runs until polars evaluates the
//! result inside `select`, `with_columns` or `filter`.

// Core module with error handling, naming and literal helpers
pub mod core;

// Expression builders
pub mod exprs;

// Configuration management
pub mod config;

// Re-export core types
pub use core::error::{Error, Result};
pub use core::literal::LitValue;
pub use core::naming::unique_name;

// Re-export the builders
pub use exprs::{
    bucketize, bucketize_lit, bulk_append, case_when, cycle, is_every_nth_row,
    is_every_nth_row_from_config, make_concat_str, make_hyperlink, make_hyperlink_from_config,
    make_index, make_index_from_config, make_tooltip, move_cols_to_end, move_cols_to_start,
    prepend, shift, BucketizeOptions, Case, ColumnSelector, Condition, ExprKitExt,
    TemplateOptions, TextDecoration, TooltipColor, TooltipOptions,
};

pub use config::ExprKitConfig;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
