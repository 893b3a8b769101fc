use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use polars::prelude::{lit, DataType, Expr, TimeUnit};

/// A literal candidate value for [`bucketize_lit`](crate::exprs::general::bucketize_lit).
///
/// Every variant belongs to exactly one polars type family, which is what the
/// single-type check compares.
#[derive(Debug, Clone, PartialEq)]
pub enum LitValue {
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// String value
    String(String),
    /// Calendar date
    Date(NaiveDate),
    /// Date and time without timezone
    Datetime(NaiveDateTime),
    /// Time of day
    Time(NaiveTime),
    /// Elapsed time
    Duration(Duration),
}

impl LitValue {
    /// Returns the type family name of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "str",
            Self::Date(_) => "date",
            Self::Datetime(_) => "datetime",
            Self::Time(_) => "time",
            Self::Duration(_) => "duration",
        }
    }

    /// The polars type a column of these values is cast to.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::Boolean(_) => DataType::Boolean,
            Self::Int(_) => DataType::Int64,
            Self::Float(_) => DataType::Float64,
            Self::String(_) => DataType::String,
            Self::Date(_) => DataType::Date,
            Self::Datetime(_) => DataType::Datetime(TimeUnit::Microseconds, None),
            Self::Time(_) => DataType::Time,
            Self::Duration(_) => DataType::Duration(TimeUnit::Microseconds),
        }
    }

    /// Whether two values belong to the same type family.
    pub fn same_kind(&self, other: &LitValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Turn the value into a literal expression.
    pub fn to_expr(&self) -> Expr {
        match self {
            Self::Boolean(v) => lit(*v),
            Self::Int(v) => lit(*v),
            Self::Float(v) => lit(*v),
            Self::String(v) => lit(v.clone()),
            Self::Date(v) => lit(*v),
            Self::Datetime(v) => lit(*v),
            // physical time is nanoseconds since midnight
            Self::Time(v) => lit(time_nanos(v)).cast(DataType::Time),
            Self::Duration(v) => lit(*v),
        }
    }
}

fn time_nanos(time: &NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * 1_000_000_000 + i64::from(time.nanosecond())
}

impl fmt::Display for LitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "'{}'", v),
            Self::Date(v) => write!(f, "{}", v),
            Self::Datetime(v) => write!(f, "{}", v),
            Self::Time(v) => write!(f, "{}", v),
            Self::Duration(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for LitValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LitValue {
                fn from(value: $t) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for LitValue {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for LitValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for LitValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LitValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for LitValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for LitValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Datetime(value)
    }
}

impl From<NaiveTime> for LitValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<Duration> for LitValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}
