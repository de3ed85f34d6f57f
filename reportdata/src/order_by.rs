//! Report ordering rules.

use serde::{Deserialize, Serialize};

/// One ordering rule for a report: sort by a metric or by a dimension.
///
/// When a request carries several rules the remote service applies them as a
/// multi-key sort in sequence order (first rule = primary key). The client
/// never re-sorts locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    Metric { name: String, descending: bool },
    Dimension { name: String, descending: bool },
}

impl OrderBy {
    /// Sort by a metric value.
    pub fn metric(name: impl Into<String>, descending: bool) -> Self {
        OrderBy::Metric {
            name: name.into(),
            descending,
        }
    }

    /// Sort by a dimension value.
    pub fn dimension(name: impl Into<String>, descending: bool) -> Self {
        OrderBy::Dimension {
            name: name.into(),
            descending,
        }
    }

    /// The metric or dimension name this rule sorts on.
    pub fn name(&self) -> &str {
        match self {
            OrderBy::Metric { name, .. } | OrderBy::Dimension { name, .. } => name,
        }
    }

    pub fn is_descending(&self) -> bool {
        match self {
            OrderBy::Metric { descending, .. } | OrderBy::Dimension { descending, .. } => {
                *descending
            }
        }
    }
}
