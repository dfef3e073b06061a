//! tcboot CLI - copy a TwinCAT boot folder to TcBSD over SSH
//!
//! Usage: tcboot --source-path <PATH> --remote-host <HOST> [--restart] [--username <USER>]

use anyhow::{Context, Result};
use clap::Parser;

use tcboot::config::{self, Config, ConfigSource, LoadedConfig};
use tcboot::infrastructure::JsonEventSink;
use tcboot::presentation::{create_deploy_use_case, deploy_request, Cli};
use tcboot::{DeployEventSink, DeployOptions};

mod ui;

use ui::console::ConsoleEventSink;
use ui::context::UiContext;

/// Exit code after Ctrl+C, as a shell reports SIGINT.
const INTERRUPTED: i32 = 130;

fn main() {
    let cli = Cli::parse();
    install_interrupt_handler(cli.json);

    let loaded = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
            ui::error::print_error(&err, &ui);
            std::process::exit(ui::error::exit_code(&err));
        }
    };

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    ui::output::print_config_diagnostics(&loaded, &ui);

    if let Err(err) = cmd_deploy(&cli, &loaded, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    Ok(config::resolve(cli.config.as_deref(), &cwd)?)
}

fn install_interrupt_handler(json: bool) {
    let installed = ctrlc::set_handler(move || {
        if json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "error",
                "message": "Cancelled by user.",
                "exit_code": INTERRUPTED,
            }));
        } else {
            eprintln!("\nCancelled by user.");
        }
        std::process::exit(INTERRUPTED);
    });

    if let Err(e) = installed {
        eprintln!("[WARN] Failed to install Ctrl+C handler: {}", e);
    }
}

fn cmd_deploy(cli: &Cli, loaded: &LoadedConfig, ui: &UiContext) -> Result<()> {
    let config = &loaded.config;

    if !ui.json {
        print!("{}", ui::views::deploy::render_banner(ui.color));
        if ui.verbose > 0 {
            match &loaded.source {
                ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
                    println!("Using config {}\n", path.display());
                }
                ConfigSource::Defaults => {}
            }
        }
    }

    let request = deploy_request(cli, config);
    let options = DeployOptions::default()
        .with_dry_run(cli.dry_run)
        .with_json(cli.json);

    let sink: Box<dyn DeployEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(*ui, cli.dry_run))
    };

    let use_case = create_deploy_use_case(config);
    let outcome = use_case.execute(&request, &options, sink.as_ref())?;

    if !ui.json && !outcome.dry_run {
        print!(
            "{}",
            ui::views::deploy::render_deploy_summary(outcome.restarted, ui.color, ui.unicode)
        );
    }

    Ok(())
}
