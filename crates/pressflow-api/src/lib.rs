//! Pressflow platform API client
//!
//! The boundary between the CLI and the hosting platform: the
//! [`PlatformApi`] trait, its HTTP implementation, the resource models
//! and the API error taxonomy. Nothing in this crate prompts or prints;
//! it only issues requests and returns models.

pub mod api;
pub mod error;
pub mod models;
pub mod resource;

pub use api::{AwsCredentials, DEFAULT_BASE_URL, HttpPlatformApi, PlatformApi, TypeOption};
pub use error::{ApiError, Result};
pub use resource::{Resource, ResourceKind};
