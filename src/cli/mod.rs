//! Command-line interface for the drift-monitoring job.
//!
//! One invocation, one run: the external scheduler invokes this binary on a
//! fixed cadence, and a nonzero exit marks the run as failed without a
//! metric having been published for the interval.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::application::{DriftOrchestrator, RunRequest};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::gateway::HttpDriftGateway;
use crate::infrastructure::logging;

/// Detect configuration drift across a stack fleet and publish the
/// drifted-stack count as a metric.
#[derive(Parser, Debug)]
#[command(name = "driftwatch", version)]
pub struct Cli {
    /// Comma-delimited stack names to check; every stack when omitted
    #[arg(long, env = "STACK_NAMES", value_delimiter = ',')]
    pub stacks: Option<Vec<String>>,

    /// Namespace the drifted-stacks metric is published under
    #[arg(long, env = "METRIC_NAMESPACE")]
    pub namespace: Option<String>,

    /// Configuration file to load instead of the hierarchical default
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve configuration, wire the gateway, and run one invocation.
///
/// CLI flags and their env fallbacks take precedence over file
/// configuration for the two invocation inputs.
pub async fn execute(cli: Cli) -> Result<u64> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    logging::init(&config.logging)?;

    let request = build_request(&cli, &config);
    info!(
        stacks = ?request.stack_names,
        namespace = ?request.namespace,
        "Starting drift detection run"
    );

    let gateway = Arc::new(
        HttpDriftGateway::new(&config.gateway).context("Failed to build gateway client")?,
    );
    let orchestrator = DriftOrchestrator::with_detection_config(
        gateway.clone(),
        gateway,
        config.detection.clone(),
    );

    let drifted = orchestrator.run(&request).await?;
    info!(drifted, "Drift detection run complete");
    Ok(drifted)
}

fn build_request(cli: &Cli, config: &Config) -> RunRequest {
    RunRequest {
        stack_names: cli.stacks.clone().or_else(|| config.stack_names.clone()),
        namespace: cli
            .namespace
            .clone()
            .or_else(|| config.metric_namespace.clone()),
    }
}
