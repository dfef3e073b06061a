//! Use Case Factory
//!
//! Wires use cases to their infrastructure and turns CLI flags plus
//! configuration into domain requests.

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::domain::entities::DeployRequest;
use crate::infrastructure::SystemCommandRunner;

use super::cli::Cli;

/// Create a DeployUseCase that spawns real processes
pub fn create_deploy_use_case(config: &Config) -> DeployUseCase<'_, SystemCommandRunner> {
    DeployUseCase::new(SystemCommandRunner, config)
}

/// Build the request; `--username` wins over config/env.
pub fn deploy_request(cli: &Cli, config: &Config) -> DeployRequest {
    let username = cli
        .username
        .clone()
        .unwrap_or_else(|| config.remote.username.clone());
    DeployRequest::new(&cli.source_path, &cli.remote_host, username, cli.restart)
}
