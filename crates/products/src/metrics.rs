//! Seller dashboard metrics (last 30 days).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counter metrics exposed by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Products sold in the last 30 days.
    SoldProducts,
    /// Products available (announced) in the last 30 days.
    AvailableProducts,
    /// Views received in the last 30 days.
    Views,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::SoldProducts,
        MetricKind::AvailableProducts,
        MetricKind::Views,
    ];

    /// Endpoint path, relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            MetricKind::SoldProducts => "/sellers/metrics/products/sold",
            MetricKind::AvailableProducts => "/sellers/metrics/products/available",
            MetricKind::Views => "/sellers/metrics/views",
        }
    }

    /// Whether the counter depends on how products are distributed across statuses.
    pub fn depends_on_status(&self) -> bool {
        matches!(self, MetricKind::SoldProducts | MetricKind::AvailableProducts)
    }
}

/// Views received on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyViews {
    pub date: DateTime<Utc>,
    pub amount: u64,
}
