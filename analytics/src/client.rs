//! Analytics reporting client.

use std::sync::Arc;

use reportdata::{
    cast_value, CastError, FilterExpression, OrderBy, Period, RawRow, ReportRequest, Row,
};
use thiserror::Error;
use tracing::debug;

use crate::service::ReportService;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The remote call itself failed (transport, auth, quota, unknown
    /// field names, bad property id). Passed through untranslated.
    #[error("report service call failed")]
    Service(#[source] anyhow::Error),
    /// A requested field was absent from a returned row.
    #[error("field {field:?} missing from report row {row}")]
    MissingField { field: String, row: usize },
    /// A field value violated the remote service's typing contract.
    #[error(transparent)]
    Cast(#[from] CastError),
}

/// Client over one analytics property.
///
/// Holds the property id and the [`ReportService`] collaborator; every query
/// builds a fresh [`ReportRequest`], runs it, and casts the returned rows.
/// No state is shared between requests, so one client can be used from many
/// tasks concurrently.
pub struct Analytics {
    service: Arc<dyn ReportService>,
    property_id: String,
}

impl Analytics {
    pub fn new(service: Arc<dyn ReportService>, property_id: impl Into<String>) -> Self {
        Self {
            service,
            property_id: property_id.into(),
        }
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn set_property_id(&mut self, property_id: impl Into<String>) {
        self.property_id = property_id.into();
    }

    /// Run one assembled request and return its typed rows.
    ///
    /// Row order follows the remote service (already sorted per the request's
    /// `order_by`); field order within each row is dimensions first, then
    /// metrics, in the order they were requested.
    pub async fn run(&self, request: ReportRequest) -> Result<Vec<Row>, ReportError> {
        debug!(
            property_id = %request.property_id,
            metrics = ?request.metrics,
            dimensions = ?request.dimensions,
            max_results = request.max_results,
            offset = request.offset,
            "running report"
        );

        let raw_rows = self
            .service
            .run_report(&request)
            .await
            .map_err(ReportError::Service)?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (index, raw) in raw_rows.iter().enumerate() {
            rows.push(type_row(&request, raw, index)?);
        }
        Ok(rows)
    }

    /// Query the property with explicit parameters.
    ///
    /// Thin composition of the request builder and [`Analytics::run`];
    /// the preset `fetch_*` methods all bottom out here.
    #[allow(clippy::too_many_arguments)]
    pub async fn get(
        &self,
        period: Period,
        metrics: Vec<String>,
        dimensions: Vec<String>,
        max_results: u32,
        order_by: Vec<OrderBy>,
        offset: u32,
        dimension_filter: Option<FilterExpression>,
        keep_empty_rows: bool,
    ) -> Result<Vec<Row>, ReportError> {
        let mut builder = ReportRequest::builder(&self.property_id, period)
            .metrics(metrics)
            .dimensions(dimensions)
            .max_results(max_results)
            .order_by(order_by)
            .offset(offset)
            .keep_empty_rows(keep_empty_rows);
        if let Some(filter) = dimension_filter {
            builder = builder.dimension_filter(filter);
        }
        self.run(builder.build()).await
    }
}

/// Cast one raw row, walking requested dimensions then metrics in order.
fn type_row(request: &ReportRequest, raw: &RawRow, index: usize) -> Result<Row, ReportError> {
    let mut row = Row::new();
    for field in request.dimensions.iter().chain(request.metrics.iter()) {
        let value = raw.get(field).ok_or_else(|| ReportError::MissingField {
            field: field.clone(),
            row: index,
        })?;
        row.push(field.clone(), cast_value(field, value)?);
    }
    Ok(row)
}
