//! `sellerdesk-client`
//!
//! **Responsibility:** HTTP access to the remote marketplace API.
//!
//! This crate provides:
//! - The `ProductService` seam used by the dashboard (mockable in tests)
//! - A `reqwest`-backed implementation
//! - Client configuration loaded from the environment
//!
//! The remote service is the **source of truth**; nothing here caches.

pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod service;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpProductService;
pub use service::{AttachmentUpload, ProductService};
