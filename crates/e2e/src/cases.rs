//! The checks that make up a suite run

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::E2eError;

/// A named check, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCase {
    /// Authenticate and authorize; setup for everything else
    Login,
    /// Layout list plus up to five layouts
    GetLayouts,
    /// Device list plus detail and RTSP URLs for up to 32 cameras
    GetCamerasAndRtsp,
}

impl TestCase {
    /// The resource check this case runs, `None` for the login setup
    pub fn resource(&self) -> Option<ResourceCase> {
        match self {
            TestCase::Login => None,
            TestCase::GetLayouts => Some(ResourceCase::GetLayouts),
            TestCase::GetCamerasAndRtsp => Some(ResourceCase::GetCamerasAndRtsp),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TestCase::Login => "login",
            TestCase::GetLayouts => "get_layouts",
            TestCase::GetCamerasAndRtsp => "get_cameras_and_rtsp",
        }
    }
}

/// Checks that run against an authorized session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCase {
    GetLayouts,
    GetCamerasAndRtsp,
}

impl ResourceCase {
    pub const ALL: [ResourceCase; 2] = [ResourceCase::GetLayouts, ResourceCase::GetCamerasAndRtsp];

    pub fn case(&self) -> TestCase {
        match self {
            ResourceCase::GetLayouts => TestCase::GetLayouts,
            ResourceCase::GetCamerasAndRtsp => TestCase::GetCamerasAndRtsp,
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestCase {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(TestCase::Login),
            "get_layouts" | "layouts" => Ok(TestCase::GetLayouts),
            "get_cameras_and_rtsp" | "cameras" => Ok(TestCase::GetCamerasAndRtsp),
            other => Err(E2eError::TestNotFound(other.to_string())),
        }
    }
}
