use crate::model::{Order, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional predicates narrowing the order list. All present predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    /// Case-insensitive substring of the company name. Empty means no constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Inclusive lower bound on `created_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on `created_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn company(name: impl Into<String>) -> Self {
        Self {
            company_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn created_between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            date_from: from,
            date_to: to,
            ..Self::default()
        }
    }

    fn company_needle(&self) -> Option<String> {
        self.company_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }

    /// True when no predicate constrains the result.
    pub fn is_empty(&self) -> bool {
        self.company_needle().is_none()
            && self.status.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some(needle) = self.company_needle() {
            if !order.company_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        self.status.is_none_or(|status| order.status == status)
            && self.date_from.is_none_or(|from| order.created_at >= from)
            && self.date_to.is_none_or(|to| order.created_at <= to)
    }
}
