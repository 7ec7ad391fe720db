//! Platform API error types

use thiserror::Error;

/// Errors surfaced by the platform API
///
/// HTTP status codes are mapped to actionable messages here so that
/// callers never have to inspect a raw response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Please authenticate using the \"login\" command before using this command")]
    AuthenticationRequired,

    #[error("An active subscription is required: {0}")]
    PaymentRequired(String),

    #[error("You are not authorized to perform this action")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("This operation is already in progress")]
    OperationInProgress,

    #[error("This resource is currently being deleted")]
    BeingDeleted,

    #[error("You are sending too many requests, please try again in a moment")]
    RateLimited,

    #[error("The platform rejected the request:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Unexpected API response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
