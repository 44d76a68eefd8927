//! Suite runner: login fixture, resource checks, result reporting

use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};
use lds_sync_api::{
    check_cameras, check_layouts, login, ApiSession, AssertMode, AuthorizedSession, SuiteConfig,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::cases::{ResourceCase, TestCase};
use crate::error::{E2eError, E2eResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result of running a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    pub duration_ms: u64,
    /// Identifiers the check touched (subdomain, layout IDs, camera IDs)
    #[serde(default)]
    pub checked: Vec<String>,
    /// Named failure condition, e.g. `GetCameraRtspError`
    pub error_kind: Option<String>,
    pub error: Option<String>,
}

impl TestResult {
    fn passed(case: TestCase, duration_ms: u64, checked: Vec<String>) -> Self {
        Self {
            name: case.name().to_string(),
            status: TestStatus::Passed,
            duration_ms,
            checked,
            error_kind: None,
            error: None,
        }
    }

    fn failed(case: TestCase, duration_ms: u64, err: &lds_sync_api::Error) -> Self {
        Self {
            name: case.name().to_string(),
            status: TestStatus::Failed,
            duration_ms,
            checked: vec![],
            error_kind: Some(err.kind().to_string()),
            error: Some(err.to_string()),
        }
    }

    fn skipped(case: TestCase, reason: &str) -> Self {
        Self {
            name: case.name().to_string(),
            status: TestStatus::Skipped,
            duration_ms: 0,
            checked: vec![],
            error_kind: None,
            error: Some(reason.to_string()),
        }
    }
}

/// Result of running the suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteResult {
    pub model: String,
    pub assert_mode: AssertMode,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl TestSuiteResult {
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    pub fn result(&self, case: TestCase) -> Option<&TestResult> {
        self.results.iter().find(|r| r.name == case.name())
    }
}

/// Configuration for the test runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub config_path: PathBuf,
    pub model: String,
    pub assert_mode: AssertMode,
    /// Overrides `api.timeout_secs` from the config file
    pub timeout_secs: Option<u64>,
    pub output_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(lds_sync_api::DEFAULT_CONFIG_PATH),
            model: lds_sync_api::DEFAULT_MODEL.to_string(),
            assert_mode: AssertMode::default(),
            timeout_secs: None,
            output_dir: PathBuf::from("test-results"),
        }
    }
}

/// Runs login once, then each resource check against the authorized session
pub struct TestRunner {
    config: SuiteConfig,
    model: String,
    assert_mode: AssertMode,
    output_dir: PathBuf,
}

impl TestRunner {
    /// Load the config file named in `runner` and build a runner from it
    pub fn with_config(runner: RunnerConfig) -> E2eResult<Self> {
        let mut config =
            SuiteConfig::from_file(&runner.config_path).map_err(|source| E2eError::ConfigLoad {
                path: runner.config_path.display().to_string(),
                source,
            })?;
        if let Some(secs) = runner.timeout_secs {
            config.api.timeout_secs = secs;
            config.api.validate()?;
        }
        Ok(Self::new(config, runner.model, runner.assert_mode, runner.output_dir))
    }

    pub fn new(
        config: SuiteConfig,
        model: impl Into<String>,
        assert_mode: AssertMode,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            config,
            model: model.into(),
            assert_mode,
            output_dir,
        }
    }

    /// Run login and every resource check
    pub async fn run_all(&self) -> E2eResult<TestSuiteResult> {
        self.run_cases(&ResourceCase::ALL).await
    }

    /// Run login and a single check
    pub async fn run_test(&self, case: TestCase) -> E2eResult<TestSuiteResult> {
        match case.resource() {
            Some(resource) => self.run_cases(&[resource]).await,
            None => self.run_cases(&[]).await,
        }
    }

    async fn run_cases(&self, cases: &[ResourceCase]) -> E2eResult<TestSuiteResult> {
        let started_at = Utc::now();
        let start = Instant::now();
        let session = ApiSession::new(&self.config.api)?;
        let mut results = Vec::with_capacity(cases.len() + 1);

        info!(
            "Running {} test(s) for model {} (assert mode: {})...",
            cases.len() + 1,
            self.model,
            self.assert_mode
        );

        let login_start = Instant::now();
        let authorized = match login(session, &self.config, &self.model).await {
            Ok(auth) => {
                let result = TestResult::passed(
                    TestCase::Login,
                    elapsed_ms(login_start),
                    vec![auth.subdomain().to_string()],
                );
                report(&result);
                results.push(result);
                Some(auth)
            }
            Err(e) => {
                let result = TestResult::failed(TestCase::Login, elapsed_ms(login_start), &e);
                report(&result);
                results.push(result);
                None
            }
        };

        for case in cases {
            let result = match &authorized {
                Some(auth) => self.run_case(*case, auth).await,
                None => {
                    let result = TestResult::skipped(case.case(), "login failed");
                    report(&result);
                    result
                }
            };
            results.push(result);
        }

        let passed = count(&results, TestStatus::Passed);
        let failed = count(&results, TestStatus::Failed);
        let skipped = count(&results, TestStatus::Skipped);
        let duration_ms = elapsed_ms(start);

        info!("");
        info!(
            "Test Results: {} passed, {} failed, {} skipped ({} ms)",
            passed, failed, skipped, duration_ms
        );

        Ok(TestSuiteResult {
            model: self.model.clone(),
            assert_mode: self.assert_mode,
            started_at,
            total: results.len(),
            passed,
            failed,
            skipped,
            duration_ms,
            results,
        })
    }

    async fn run_case(&self, resource: ResourceCase, auth: &AuthorizedSession) -> TestResult {
        let case = resource.case();
        let start = Instant::now();
        debug!("Running test: {}", case);

        let outcome: lds_sync_api::Result<Vec<String>> = match resource {
            ResourceCase::GetLayouts => check_layouts(auth, self.assert_mode)
                .await
                .map(|report| report.checked),
            ResourceCase::GetCamerasAndRtsp => check_cameras(auth, self.assert_mode)
                .await
                .map(|report| report.checked.into_iter().map(|c| c.id).collect()),
        };

        let result = match outcome {
            Ok(checked) => TestResult::passed(case, elapsed_ms(start), checked),
            Err(e) => TestResult::failed(case, elapsed_ms(start), &e),
        };
        report(&result);
        result
    }

    /// Write test results to JSON file
    pub fn write_results(&self, results: &TestSuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

fn report(result: &TestResult) {
    match result.status {
        TestStatus::Passed => info!("✓ {} ({} ms)", result.name, result.duration_ms),
        TestStatus::Failed => error!(
            "✗ {} - {}",
            result.name,
            result.error.as_deref().unwrap_or("unknown error")
        ),
        TestStatus::Skipped => warn!(
            "- {} skipped: {}",
            result.name,
            result.error.as_deref().unwrap_or("")
        ),
    }
}

fn count(results: &[TestResult], status: TestStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
