//! Endpoint registry
//!
//! Builds request URLs as `protocol + subdomain + base + path`. Only the
//! login subdomain is known up front; the branded subdomain (`bsd`) is handed
//! out by the authorize call and recorded here exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Logical API operations and their fixed paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Authenticate,
    Authorize,
    LayoutList,
    Layout,
    DeviceList,
    Device,
    DeviceRtsp,
}

impl Operation {
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Authenticate => "/g/aaa/authenticate",
            Operation::Authorize => "/g/aaa/authorize",
            Operation::LayoutList => "/g/layout/list",
            Operation::Layout => "/g/layout",
            Operation::DeviceList => "/g/device/list",
            Operation::Device => "/g/device",
            Operation::DeviceRtsp => "/g/device/rtsp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Authenticate => "authenticate",
            Operation::Authorize => "authorize",
            Operation::LayoutList => "layout_list",
            Operation::Layout => "layout",
            Operation::DeviceList => "device_list",
            Operation::Device => "device",
            Operation::DeviceRtsp => "device_rtsp",
        }
    }

    /// Whether the operation is served from the login host
    pub fn is_login(&self) -> bool {
        matches!(self, Operation::Authenticate | Operation::Authorize)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A branded subdomain returned by a successful authorize call.
///
/// Holding one proves authorization completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSubdomain(String);

impl BrandSubdomain {
    pub fn parse(value: &str) -> Result<Self> {
        let valid = !value.is_empty()
            && value.len() <= 63
            && !value.starts_with('-')
            && !value.ends_with('-')
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::InvalidSubdomain(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandSubdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps operations to full URLs
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    protocol: String,
    base: String,
    login: String,
    bsd: Option<BrandSubdomain>,
}

impl EndpointRegistry {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            protocol: config.protocol.clone(),
            base: config.base_domain.clone(),
            login: config.login_subdomain.clone(),
            bsd: None,
        }
    }

    /// Resolve the URL for an operation.
    ///
    /// `use_bsd == false` targets the login host. `use_bsd == true` fails
    /// with `SubdomainNotPopulated` until a subdomain has been recorded.
    pub fn resolve(&self, operation: Operation, use_bsd: bool) -> Result<String> {
        let subdomain = if use_bsd {
            self.bsd
                .as_ref()
                .map(BrandSubdomain::as_str)
                .ok_or(Error::SubdomainNotPopulated { operation })?
        } else {
            self.login.as_str()
        };
        Ok(format!(
            "{}{}{}{}",
            self.protocol,
            subdomain,
            self.base,
            operation.path()
        ))
    }

    /// Resolve using the host the operation belongs to
    pub fn url(&self, operation: Operation) -> Result<String> {
        self.resolve(operation, !operation.is_login())
    }

    pub fn set_subdomain(&mut self, bsd: BrandSubdomain) {
        self.bsd = Some(bsd);
    }

    pub fn subdomain(&self) -> Option<&BrandSubdomain> {
        self.bsd.as_ref()
    }
}
