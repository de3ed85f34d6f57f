//! Canned report configurations.
//!
//! Each preset is a plain record of metric/dimension/order choices; the
//! `fetch_*` methods on [`Analytics`] are one-liners over these records, so
//! all parameter threading stays in the request builder.

use reportdata::{OrderBy, Period, ReportRequest, Row, DEFAULT_MAX_RESULTS};

use crate::client::{Analytics, ReportError};

// ------------------------------------------------------------------ //
//  Preset records                                                     //
// ------------------------------------------------------------------ //

/// Fixed parameterization of the report request builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub metrics: Vec<String>,
    pub dimensions: Vec<String>,
    pub order_by: Vec<OrderBy>,
    /// Page size used when the caller passes no override.
    pub default_max_results: u32,
}

impl Preset {
    fn new(
        metrics: &[&str],
        dimensions: &[&str],
        order_by: Vec<OrderBy>,
        default_max_results: u32,
    ) -> Self {
        Self {
            metrics: metrics.iter().map(ToString::to_string).collect(),
            dimensions: dimensions.iter().map(ToString::to_string).collect(),
            order_by,
            default_max_results,
        }
    }

    /// Active users and page views per page title.
    pub fn visitors_and_page_views() -> Self {
        Self::new(
            &["activeUsers", "screenPageViews"],
            &["pageTitle"],
            vec![],
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Active users and page views per page title and day.
    pub fn visitors_and_page_views_by_date() -> Self {
        Self::new(
            &["activeUsers", "screenPageViews"],
            &["pageTitle", "date"],
            vec![OrderBy::dimension("date", true)],
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Property-wide active users and page views per day.
    pub fn total_visitors_and_page_views() -> Self {
        Self::new(
            &["activeUsers", "screenPageViews"],
            &["date"],
            vec![OrderBy::dimension("date", true)],
            20,
        )
    }

    /// Pages ranked by views.
    pub fn most_visited_pages() -> Self {
        Self::new(
            &["screenPageViews"],
            &["pageTitle", "fullPageUrl"],
            vec![OrderBy::metric("screenPageViews", true)],
            20,
        )
    }

    /// Referrers ranked by the views they drove.
    pub fn top_referrers() -> Self {
        Self::new(
            &["screenPageViews"],
            &["pageReferrer"],
            vec![OrderBy::metric("screenPageViews", true)],
            20,
        )
    }

    /// New versus returning users.
    pub fn user_types() -> Self {
        Self::new(
            &["activeUsers"],
            &["newVsReturning"],
            vec![],
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Browsers ranked by views.
    pub fn top_browsers() -> Self {
        Self::new(
            &["screenPageViews"],
            &["browser"],
            vec![OrderBy::metric("screenPageViews", true)],
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Countries ranked by views.
    pub fn top_countries() -> Self {
        Self::new(
            &["screenPageViews"],
            &["country"],
            vec![OrderBy::metric("screenPageViews", true)],
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Operating systems ranked by views.
    pub fn top_operating_systems() -> Self {
        Self::new(
            &["screenPageViews"],
            &["operatingSystem"],
            vec![OrderBy::metric("screenPageViews", true)],
            DEFAULT_MAX_RESULTS,
        )
    }

    /// Materialize the preset into a request for one property and period.
    /// `max_results = None` uses the preset's default page size.
    pub fn into_request(
        self,
        property_id: impl Into<String>,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> ReportRequest {
        ReportRequest::builder(property_id, period)
            .metrics(self.metrics)
            .dimensions(self.dimensions)
            .order_by(self.order_by)
            .max_results(max_results.unwrap_or(self.default_max_results))
            .offset(offset)
            .build()
    }
}

// ------------------------------------------------------------------ //
//  Client sugar                                                       //
// ------------------------------------------------------------------ //

impl Analytics {
    /// Run any preset against this client's property.
    pub async fn fetch_preset(
        &self,
        preset: Preset,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.run(preset.into_request(self.property_id(), period, max_results, offset))
            .await
    }

    /// Rows of `{pageTitle, activeUsers, screenPageViews}`.
    pub async fn fetch_visitors_and_page_views(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::visitors_and_page_views(), period, max_results, offset)
            .await
    }

    /// Rows of `{pageTitle, date, activeUsers, screenPageViews}`, newest day first.
    pub async fn fetch_visitors_and_page_views_by_date(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(
            Preset::visitors_and_page_views_by_date(),
            period,
            max_results,
            offset,
        )
        .await
    }

    /// Rows of `{date, activeUsers, screenPageViews}`, newest day first.
    pub async fn fetch_total_visitors_and_page_views(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(
            Preset::total_visitors_and_page_views(),
            period,
            max_results,
            offset,
        )
        .await
    }

    /// Rows of `{pageTitle, fullPageUrl, screenPageViews}`, most viewed first.
    pub async fn fetch_most_visited_pages(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::most_visited_pages(), period, max_results, offset)
            .await
    }

    /// Rows of `{pageReferrer, screenPageViews}`, busiest referrer first.
    pub async fn fetch_top_referrers(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::top_referrers(), period, max_results, offset)
            .await
    }

    /// Rows of `{newVsReturning, activeUsers}`.
    pub async fn fetch_user_types(&self, period: Period) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::user_types(), period, None, 0).await
    }

    /// Rows of `{browser, screenPageViews}`, most used first.
    pub async fn fetch_top_browsers(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::top_browsers(), period, max_results, offset)
            .await
    }

    /// Rows of `{country, screenPageViews}`, most views first.
    pub async fn fetch_top_countries(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::top_countries(), period, max_results, offset)
            .await
    }

    /// Rows of `{operatingSystem, screenPageViews}`, most views first.
    pub async fn fetch_top_operating_systems(
        &self,
        period: Period,
        max_results: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Row>, ReportError> {
        self.fetch_preset(Preset::top_operating_systems(), period, max_results, offset)
            .await
    }
}
