//! ReportService trait and implementations.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use reportdata::{RawRow, ReportRequest};

// ------------------------------------------------------------------ //
//  Trait                                                              //
// ------------------------------------------------------------------ //

/// Boundary to the remote reporting service.
///
/// Implementations execute one request and return its rows with every field
/// value still a string, already sorted and paginated per the request.
/// Transport, authentication, and quota errors surface unchanged through the
/// `anyhow::Error`; this layer never retries or translates them.
#[async_trait]
pub trait ReportService: Send + Sync {
    async fn run_report(&self, request: &ReportRequest) -> Result<Vec<RawRow>>;
}

// ------------------------------------------------------------------ //
//  FakeReportService (for tests)                                      //
// ------------------------------------------------------------------ //

/// In-memory service that records requests and replays canned responses.
#[derive(Debug, Default, Clone)]
pub struct FakeReportService {
    requests: Arc<Mutex<Vec<ReportRequest>>>,
    responses: Arc<Mutex<VecDeque<Vec<RawRow>>>>,
}

impl FakeReportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response; each `run_report` call consumes one in FIFO order.
    /// With the queue empty, calls return no rows.
    pub fn enqueue(&self, rows: Vec<RawRow>) {
        self.responses.lock().unwrap().push_back(rows);
    }

    /// Snapshot of every request executed so far.
    pub fn requests(&self) -> Vec<ReportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ReportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ReportService for FakeReportService {
    async fn run_report(&self, request: &ReportRequest) -> Result<Vec<RawRow>> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reportdata::Period;

    fn request() -> ReportRequest {
        let period = Period::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap();
        ReportRequest::builder("properties/123", period)
            .metrics(["activeUsers"])
            .build()
    }

    fn raw_row(fields: &[(&str, &str)]) -> RawRow {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn fake_records_requests_and_replays_fifo() {
        let fake = FakeReportService::new();
        fake.enqueue(vec![raw_row(&[("activeUsers", "1")])]);
        fake.enqueue(vec![raw_row(&[("activeUsers", "2")])]);

        let first = fake.run_report(&request()).await.unwrap();
        let second = fake.run_report(&request()).await.unwrap();

        assert_eq!(first[0]["activeUsers"], "1");
        assert_eq!(second[0]["activeUsers"], "2");
        assert_eq!(fake.requests().len(), 2);
    }

    #[tokio::test]
    async fn empty_queue_returns_no_rows() {
        let fake = FakeReportService::new();
        let rows = fake.run_report(&request()).await.unwrap();
        assert!(rows.is_empty());
    }
}
