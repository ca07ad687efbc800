//! HTTP client for the remote explanation service.
//!
//! This crate owns everything that crosses the network: the
//! [`ExplainClient`] wrapper around the service's endpoints, and the
//! page flows that read the session relay and issue exactly one request
//! per page load. The service itself is an opaque collaborator; nothing
//! here retries, and timeouts are left to the environment defaults.

mod client;
pub mod pages;

pub use client::{ExplainClient, ServiceInfo, UploadAck};

/// Errors that can occur when talking to the explanation service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The rendering page loaded without any staged prescription
    #[error("no prescription found")]
    NoPrescriptionFound,

    /// The request could not be sent or its response could not be read
    #[error("could not explain prescription: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("could not explain prescription (HTTP {0})")]
    Status(reqwest::StatusCode),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
