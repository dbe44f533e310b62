//! `sellerdesk-core`: shared building blocks.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no caching).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AttachmentId, CategoryId, ProductId, SellerId};
