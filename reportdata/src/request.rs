//! Report request assembly.

use serde::Serialize;

use crate::filter::FilterExpression;
use crate::order_by::OrderBy;
use crate::period::Period;

/// Default page size when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// One fully-assembled report request, ready to hand to the remote service.
///
/// No field is validated locally beyond the [`Period`] invariant: unknown
/// metric or dimension names and bad property ids are rejected by the remote
/// service, not here. Dimension order is significant — it drives the field
/// order of the typed rows coming back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub property_id: String,
    pub period: Period,
    pub metrics: Vec<String>,
    pub dimensions: Vec<String>,
    pub max_results: u32,
    pub offset: u32,
    /// Multi-key sort, first entry is the primary key.
    pub order_by: Vec<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,
    pub keep_empty_rows: bool,
}

impl ReportRequest {
    /// Start building a request for one property and period.
    pub fn builder(property_id: impl Into<String>, period: Period) -> ReportRequestBuilder {
        ReportRequestBuilder {
            request: ReportRequest {
                property_id: property_id.into(),
                period,
                metrics: Vec::new(),
                dimensions: Vec::new(),
                max_results: DEFAULT_MAX_RESULTS,
                offset: 0,
                order_by: Vec::new(),
                dimension_filter: None,
                keep_empty_rows: false,
            },
        }
    }
}

/// Chained builder for [`ReportRequest`].
#[derive(Debug, Clone)]
pub struct ReportRequestBuilder {
    request: ReportRequest,
}

impl ReportRequestBuilder {
    pub fn metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    pub fn dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.request.max_results = max_results;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.request.offset = offset;
        self
    }

    pub fn order_by(mut self, order_by: impl IntoIterator<Item = OrderBy>) -> Self {
        self.request.order_by = order_by.into_iter().collect();
        self
    }

    pub fn dimension_filter(mut self, filter: FilterExpression) -> Self {
        self.request.dimension_filter = Some(filter);
        self
    }

    pub fn keep_empty_rows(mut self, keep: bool) -> Self {
        self.request.keep_empty_rows = keep;
        self
    }

    pub fn build(self) -> ReportRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FieldFilter;
    use chrono::NaiveDate;

    fn period() -> Period {
        Period::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn minimal_request_gets_documented_defaults() {
        let request = ReportRequest::builder("properties/123", period())
            .metrics(["activeUsers"])
            .dimensions(["pageTitle"])
            .build();

        assert_eq!(request.max_results, 10);
        assert_eq!(request.offset, 0);
        assert!(request.order_by.is_empty());
        assert!(request.dimension_filter.is_none());
        assert!(!request.keep_empty_rows);
    }

    #[test]
    fn multi_key_order_preserves_input_sequence() {
        let request = ReportRequest::builder("properties/123", period())
            .metrics(["screenPageViews"])
            .dimensions(["date"])
            .order_by([
                OrderBy::metric("screenPageViews", true),
                OrderBy::dimension("date", true),
            ])
            .build();

        assert_eq!(
            request.order_by,
            vec![
                OrderBy::metric("screenPageViews", true),
                OrderBy::dimension("date", true),
            ]
        );
    }

    #[test]
    fn builder_threads_every_parameter() {
        let request = ReportRequest::builder("properties/999", period())
            .metrics(["activeUsers", "screenPageViews"])
            .dimensions(["pageTitle", "fullPageUrl"])
            .max_results(50)
            .offset(100)
            .dimension_filter(FieldFilter::exact("country", "Belgium").into())
            .keep_empty_rows(true)
            .build();

        assert_eq!(request.property_id, "properties/999");
        assert_eq!(request.metrics, ["activeUsers", "screenPageViews"]);
        assert_eq!(request.dimensions, ["pageTitle", "fullPageUrl"]);
        assert_eq!(request.max_results, 50);
        assert_eq!(request.offset, 100);
        assert!(request.dimension_filter.is_some());
        assert!(request.keep_empty_rows);
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_filter() {
        let request = ReportRequest::builder("properties/123", period())
            .metrics(["activeUsers"])
            .build();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["propertyId"], "properties/123");
        assert_eq!(json["maxResults"], 10);
        assert_eq!(json["keepEmptyRows"], false);
        assert!(json.get("dimensionFilter").is_none());
    }
}
