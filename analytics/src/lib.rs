//! Reporting client for a remote analytics service.
//!
//! The remote service is reached only through the [`ReportService`] trait
//! (`run_report(request) -> raw rows`); transport, credentials, caching and
//! rate limiting all live behind that boundary. This crate assembles
//! requests, hands them to the collaborator, and casts the all-string rows
//! coming back into typed ones.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use analytics::{Analytics, FakeReportService, Period};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), analytics::ReportError> {
//! let service = FakeReportService::new();
//! let client = Analytics::new(Arc::new(service), "properties/123456");
//!
//! let rows = client
//!     .fetch_top_referrers(Period::days(30), Some(5), 0)
//!     .await?;
//! for row in &rows {
//!     println!("{:?} {:?}", row.get_text("pageReferrer"), row.get_int("screenPageViews"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod presets;
pub mod service;

pub use client::{Analytics, ReportError};
pub use presets::Preset;
pub use service::{FakeReportService, ReportService};

// Re-export the value-type layer so callers need only this crate.
pub use reportdata::{
    cast_value, rule_for, CastError, CastRule, FieldFilter, FilterExpression, MatchType, OrderBy,
    Period, PeriodError, RawRow, ReportRequest, ReportRequestBuilder, Row, Value,
    DEFAULT_MAX_RESULTS,
};
