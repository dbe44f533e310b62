//! Request bodies sent to the remote service.
//!
//! Each body validates locally before it is sent; the remote service remains
//! the authority and may still reject it.

use serde::{Deserialize, Serialize};

use sellerdesk_core::{AttachmentId, CategoryId, DomainError, DomainResult};

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub title: String,
    pub category_id: CategoryId,
    pub description: Option<String>,
    pub price_in_cents: u64,
    pub attachments_ids: Vec<AttachmentId>,
}

/// Body of `PUT /products/{id}`. Status is not editable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProduct {
    pub title: String,
    pub category_id: CategoryId,
    pub description: String,
    pub price_in_cents: u64,
    pub attachments_ids: Vec<AttachmentId>,
}

/// Body of `POST /sellers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUp {
    pub name: String,
    pub phone: String,
    pub avatar_id: Option<AttachmentId>,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

fn ensure_listing(title: &str, category_id: &CategoryId, price_in_cents: u64) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title cannot be empty"));
    }
    if category_id.as_str().trim().is_empty() {
        return Err(DomainError::validation("category is required"));
    }
    if price_in_cents == 0 {
        return Err(DomainError::validation("price must be greater than zero"));
    }
    Ok(())
}

impl CreateProduct {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_listing(&self.title, &self.category_id, self.price_in_cents)
    }
}

impl EditProduct {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_listing(&self.title, &self.category_id, self.price_in_cents)
    }
}

impl SignUp {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email is invalid"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }
        if self.password != self.password_confirmation {
            return Err(DomainError::validation("passwords do not match"));
        }
        Ok(())
    }
}
