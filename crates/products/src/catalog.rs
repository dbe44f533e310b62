//! Catalog read models embedded in products.

use serde::{Deserialize, Serialize};

use sellerdesk_core::{AttachmentId, CategoryId, SellerId};

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub slug: String,
}

/// Uploaded file (product image or seller avatar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub url: String,
}

/// Seller avatar reference.
pub type Avatar = Attachment;

/// Seller profile, also embedded as a product's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<Avatar>,
}
