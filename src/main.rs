//! notifier CLI
//!
//! Usage: notifier [--config <PATH>] [--json] [-v] [COMMAND]
//!
//! Commands:
//!   send    Notify a single user or admin

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use notifier::config;
use notifier::presentation::cli::{Cli, Commands};
use notifier::presentation::logging::init_tracing;
use notifier::presentation::{create_sink, resolve_format};
use notifier::{dispatch, run_demo, Admin, Dispatcher, Notifier, OutputFormat, User};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) = config::load_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("failed to load config from {}", path.display()),
            None => "failed to load config".to_string(),
        }
    })?;
    for warning in &warnings {
        warn!("{warning}");
    }

    let format = resolve_format(config.format, cli.json);

    match cli.command {
        Some(Commands::Send { name, email }) => cmd_send(name, email, format),
        None => cmd_run(&config, format),
    }
}

fn cmd_send(name: String, email: Option<String>, format: OutputFormat) -> Result<()> {
    let user = User::new(name);
    let notifier: Box<dyn Notifier> = match email {
        Some(email) => Box::new(Admin::new(user, email)),
        None => Box::new(user),
    };

    match format {
        OutputFormat::Text => dispatch(notifier.as_ref()),
        OutputFormat::Json => {
            let sink = create_sink(format);
            Dispatcher::new(sink.as_ref()).send(notifier.as_ref());
        }
    }
    Ok(())
}

fn cmd_run(config: &config::Config, format: OutputFormat) -> Result<()> {
    let roster = config.roster().context("invalid recipient in config")?;
    let sink = create_sink(format);
    let dispatcher = Dispatcher::new(sink.as_ref());

    let summary = if roster.is_empty() {
        run_demo(&dispatcher)
    } else {
        dispatcher.send_all(&roster)
    };

    info!(
        total = summary.total(),
        users = summary.users,
        admins = summary.admins,
        "dispatch complete"
    );
    Ok(())
}
