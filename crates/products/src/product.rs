use serde::{Deserialize, Serialize};
use thiserror::Error;

use sellerdesk_core::{DomainError, ProductId};

use crate::catalog::{Attachment, Category, Seller};

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Available,
    Sold,
    Cancelled,
}

/// Legal status transitions: current state -> permitted next states.
///
/// Anything not listed here (including staying in the same state) is illegal.
pub const TRANSITIONS: &[(ProductStatus, &[ProductStatus])] = &[
    (
        ProductStatus::Available,
        &[ProductStatus::Sold, ProductStatus::Cancelled],
    ),
    (ProductStatus::Sold, &[ProductStatus::Available]),
    (ProductStatus::Cancelled, &[ProductStatus::Available]),
];

/// A requested status change that the lifecycle table does not allow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot move product from {from} to {to}")]
pub struct InvalidTransition {
    pub from: ProductStatus,
    pub to: ProductStatus,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Available,
        ProductStatus::Sold,
        ProductStatus::Cancelled,
    ];

    /// Wire token, also used as the last path segment of the status endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::Sold => "sold",
            ProductStatus::Cancelled => "cancelled",
        }
    }

    /// States reachable from `self` in one step.
    pub fn allowed_next(self) -> &'static [ProductStatus] {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, next)| *next)
            .unwrap_or(&[])
    }

    pub fn can_transition_to(self, target: ProductStatus) -> bool {
        self.allowed_next().contains(&target)
    }

    /// Check a transition against the lifecycle table.
    pub fn ensure_transition(self, target: ProductStatus) -> Result<(), InvalidTransition> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(InvalidTransition {
                from: self,
                to: target,
            })
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(ProductStatus::Available),
            "sold" => Ok(ProductStatus::Sold),
            "cancelled" => Ok(ProductStatus::Cancelled),
            other => Err(DomainError::validation(format!(
                "status must be one of: available, sold, cancelled (got {other:?})"
            ))),
        }
    }
}

/// Product read model (matches the remote service's response shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_in_cents: u64,
    pub status: ProductStatus,
    pub owner: Seller,
    pub category: Category,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Product {
    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Copy of this snapshot with only the status replaced.
    ///
    /// Used to fold a confirmed status change into a cached snapshot without
    /// losing fields the status endpoint may not return in full.
    pub fn with_status(&self, status: ProductStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
