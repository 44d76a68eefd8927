//! Error types for the LDS sync checks

use reqwest::StatusCode;
use thiserror::Error;

use crate::endpoints::Operation;

/// Result type alias using the LDS sync Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failure conditions raised by the auth handshake and the resource checks.
///
/// Every variant is fatal to the check that raised it. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("InvalidModelType: model '{model}' not found in config")]
    InvalidModelType { model: String },

    #[error("AuthenticationError: authenticate responded with {status}")]
    Authentication { status: StatusCode },

    #[error("AuthorizationError: authorize responded with {status}")]
    Authorization { status: StatusCode },

    #[error("GetLayoutsListError: layout list responded with {status}")]
    GetLayoutsList { status: StatusCode },

    #[error("GetLayoutsError: layout {id} responded with {status}")]
    GetLayouts { id: String, status: StatusCode },

    #[error("GetDeviceListError: device list responded with {status}")]
    GetDeviceList { status: StatusCode },

    #[error("GetCameraError: device {id} responded with {status}")]
    GetCamera { id: String, status: StatusCode },

    #[error("GetCameraRtspError: rtsp for camera {id} responded with {status}")]
    GetCameraRtsp { id: String, status: StatusCode },

    #[error("CameraRtspEmptyResponseError: camera {id} returned an empty {field}")]
    CameraRtspEmptyResponse { id: String, field: &'static str },

    #[error("Branded subdomain requested for {operation} before authorization")]
    SubdomainNotPopulated { operation: Operation },

    #[error("Invalid branded subdomain: '{0}'")]
    InvalidSubdomain(String),

    #[error("Malformed {operation} response: {reason}")]
    MalformedResponse { operation: Operation, reason: String },

    #[error("No final response to assert for {workflow}")]
    MissingResponse { workflow: &'static str },

    #[error("{operation} request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Short name of the failure condition, as reported by the suite.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidModelType { .. } => "InvalidModelType",
            Error::Authentication { .. } => "AuthenticationError",
            Error::Authorization { .. } => "AuthorizationError",
            Error::GetLayoutsList { .. } => "GetLayoutsListError",
            Error::GetLayouts { .. } => "GetLayoutsError",
            Error::GetDeviceList { .. } => "GetDeviceListError",
            Error::GetCamera { .. } => "GetCameraError",
            Error::GetCameraRtsp { .. } => "GetCameraRtspError",
            Error::CameraRtspEmptyResponse { .. } => "CameraRtspEmptyResponseError",
            Error::SubdomainNotPopulated { .. } => "SubdomainNotPopulated",
            Error::InvalidSubdomain(_) => "InvalidSubdomain",
            Error::MalformedResponse { .. } => "MalformedResponse",
            Error::MissingResponse { .. } => "MissingResponse",
            Error::Transport { .. } => "Transport",
            Error::Config(_) => "Config",
            Error::Io(_) => "Io",
            Error::Yaml(_) => "Yaml",
            Error::Http(_) => "Http",
        }
    }

    pub(crate) fn malformed(operation: Operation, reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            operation,
            reason: reason.into(),
        }
    }
}
