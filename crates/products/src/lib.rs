//! Products domain module.
//!
//! Read models and request bodies for seller products, plus the status
//! lifecycle rules. Pure, deterministic logic (no IO, no HTTP, no caching).

pub mod catalog;
pub mod filter;
pub mod metrics;
pub mod product;
pub mod requests;

pub use catalog::{Attachment, Avatar, Category, Seller};
pub use filter::ProductFilter;
pub use metrics::{DailyViews, MetricKind};
pub use product::{InvalidTransition, Product, ProductStatus, TRANSITIONS};
pub use requests::{CreateProduct, EditProduct, SignUp};
