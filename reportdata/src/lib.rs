//! Value types shared across the analytics workspace.
//!
//! Everything here is pure and synchronous: date ranges, ordering rules,
//! filter trees, the report request builder, and the casting layer that turns
//! the remote service's all-string field values back into typed ones. The
//! async client that actually runs reports lives in the `analytics` crate.

pub mod cast;
pub mod filter;
pub mod order_by;
pub mod period;
pub mod request;
pub mod row;

pub use cast::{cast_value, rule_for, CastError, CastRule};
pub use filter::{FieldFilter, FilterExpression, MatchType};
pub use order_by::OrderBy;
pub use period::{Period, PeriodError};
pub use request::{ReportRequest, ReportRequestBuilder, DEFAULT_MAX_RESULTS};
pub use row::{RawRow, Row, Value};
