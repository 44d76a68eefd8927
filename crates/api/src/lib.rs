//! LDS Sync API Checks
//!
//! Client-side checks for the cloud video-management API calls used when
//! syncing archivers with the LDS:
//! - Authenticate/authorize handshake that discovers the branded subdomain
//! - Layout list and layout detail retrieval
//! - Device list, camera detail and RTSP descriptor retrieval
//!
//! # Flow
//!
//! ```text
//! SuiteConfig ──► ApiSession ──login()──► AuthorizedSession
//!                                             ├── check_layouts()
//!                                             └── check_cameras()
//! ```

pub mod auth;
pub mod cameras;
pub mod checks;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod layouts;
pub mod session;

pub use auth::{login, AuthorizedSession};
pub use cameras::{check_cameras, CameraReport, RtspDescriptor};
pub use checks::AssertMode;
pub use config::{ApiConfig, Credentials, SuiteConfig};
pub use endpoints::{BrandSubdomain, EndpointRegistry, Operation};
pub use error::{Error, Result};
pub use layouts::{check_layouts, LayoutReport};
pub use session::{ApiResponse, ApiSession};

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "testconfig.yaml";

/// Model used when none is given
pub const DEFAULT_MODEL: &str = "DS100";
