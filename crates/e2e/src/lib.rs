//! LDS Sync E2E Suite
//!
//! Runs the LDS sync API checks against a live account:
//! - Logs in once with the credentials for the selected model
//! - Hands the authorized session to each resource check
//! - Reports per-check results and writes them as JSON
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TestRunner                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  setup:  login(model) -> AuthorizedSession                  │
//! │  cases:  get_layouts(&AuthorizedSession)                    │
//! │          get_cameras_and_rtsp(&AuthorizedSession)           │
//! │  report: TestSuiteResult -> test-results.json               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod cases;
pub mod error;
pub mod runner;

pub use cases::{ResourceCase, TestCase};
pub use error::{E2eError, E2eResult};
pub use runner::{RunnerConfig, TestResult, TestRunner, TestStatus, TestSuiteResult};
