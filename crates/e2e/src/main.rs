//! LDS sync check entry point
//!
//! Run with: cargo run --package lds-sync-e2e -- --model DS100

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lds_sync_api::AssertMode;
use lds_sync_e2e::{E2eResult, RunnerConfig, TestCase, TestRunner};

#[derive(Parser, Debug)]
#[command(name = "lds-sync-check")]
#[command(about = "Checks the cloud VMS API calls used by LDS sync")]
struct Args {
    /// Path to the YAML config with model credentials
    #[arg(short, long, env = "LDS_SYNC_CONFIG", default_value = lds_sync_api::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Model whose credentials are used
    #[arg(short, long, env = "LDS_SYNC_MODEL", default_value = lds_sync_api::DEFAULT_MODEL)]
    model: String,

    /// Run only this check (login always runs first)
    #[arg(short, long)]
    name: Option<String>,

    /// Assert every response in a loop, or only require a final successful one
    #[arg(long, default_value = "every")]
    assert_mode: AssertMode,

    /// Per-request timeout, overrides the config file
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Output directory for results
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            std::process::exit(2);
        }
    };

    match rt.block_on(async_main(args)) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> E2eResult<bool> {
    let only = args.name.as_deref().map(str::parse::<TestCase>).transpose()?;

    let runner = TestRunner::with_config(RunnerConfig {
        config_path: args.config,
        model: args.model,
        assert_mode: args.assert_mode,
        timeout_secs: args.timeout_secs,
        output_dir: args.output,
    })?;

    let results = match only {
        Some(case) => runner.run_test(case).await?,
        None => runner.run_all().await?,
    };

    runner.write_results(&results)?;

    Ok(results.success())
}
