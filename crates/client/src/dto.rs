//! Response envelopes of the remote API.
//!
//! Every endpoint wraps its payload in a single named field.

use serde::Deserialize;

use sellerdesk_products::{Attachment, Category, DailyViews, Product, Seller};

#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct SellerEnvelope {
    pub seller: Seller,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
pub struct AttachmentsEnvelope {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Deserialize)]
pub struct AmountEnvelope {
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewsPerDayEnvelope {
    pub views_per_day: Vec<DailyViews>,
}

/// Error body returned by the API on non-2xx responses (best effort).
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Extract a human-readable message from an error response body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => body.trim().to_string(),
    }
}
