//! Dimension filter expressions.
//!
//! A filter is an opaque predicate tree handed through to the remote service
//! unchanged; the client never evaluates it locally.

use serde::{Deserialize, Serialize};

/// Predicate tree restricting which rows the remote service returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterExpression {
    /// All sub-expressions must match.
    And(Vec<FilterExpression>),
    /// At least one sub-expression must match.
    Or(Vec<FilterExpression>),
    /// The sub-expression must not match.
    Not(Box<FilterExpression>),
    /// Leaf predicate on a single field.
    Filter(FieldFilter),
}

impl FilterExpression {
    pub fn and(exprs: impl IntoIterator<Item = FilterExpression>) -> Self {
        FilterExpression::And(exprs.into_iter().collect())
    }

    pub fn or(exprs: impl IntoIterator<Item = FilterExpression>) -> Self {
        FilterExpression::Or(exprs.into_iter().collect())
    }

    pub fn not(expr: FilterExpression) -> Self {
        FilterExpression::Not(Box::new(expr))
    }
}

impl From<FieldFilter> for FilterExpression {
    fn from(filter: FieldFilter) -> Self {
        FilterExpression::Filter(filter)
    }
}

/// String match on one dimension field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilter {
    pub field_name: String,
    pub match_type: MatchType,
    pub value: String,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Exact,
    BeginsWith,
    EndsWith,
    Contains,
    FullRegexp,
    PartialRegexp,
}

impl FieldFilter {
    /// Case-sensitive exact match on `field_name`.
    pub fn exact(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            match_type: MatchType::Exact,
            value: value.into(),
            case_sensitive: true,
        }
    }

    /// Case-sensitive substring match on `field_name`.
    pub fn contains(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            match_type: MatchType::Contains,
            value: value.into(),
            case_sensitive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tree_builds_without_interpretation() {
        let expr = FilterExpression::and([
            FieldFilter::exact("country", "Belgium").into(),
            FilterExpression::not(FieldFilter::contains("pageTitle", "draft").into()),
        ]);

        match expr {
            FilterExpression::And(children) => assert_eq!(children.len(), 2),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn match_type_serializes_screaming_snake_case() {
        let json = serde_json::to_value(MatchType::BeginsWith).unwrap();
        assert_eq!(json, "BEGINS_WITH");
    }
}
