//! Backend services.
//!
//! This module provides the HTTP client for the analysis backend:
//!
//! # Services
//!
//! - [`api`] - JSON endpoints, URL building and error decoding
//! - [`upload`] - Multipart uploads (test cases, metadata, feedback)

pub mod api;
pub mod upload;

pub use api::*;
pub use upload::*;
