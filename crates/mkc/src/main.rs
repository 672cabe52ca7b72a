mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mkc_config::Config;
use mkc_core::RegistryClient;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "mkc", &mut std::io::stdout());
            Ok(())
        }

        // Config commands load the file themselves and need no registry client
        Command::Config(args) => commands::config_cmd::handle(args, &mut cli.global),

        cmd => {
            let cfg = mkc_config::load_config()?;
            cli.global.default_output(&cfg.defaults.output);
            let client = build_client(cfg, &cli.global)?;
            tracing::debug!(command = ?cmd, base_url = %client.base_url(), "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Config file and environment first, then CLI flag overrides.
fn build_client(mut cfg: Config, global: &GlobalOpts) -> Result<RegistryClient, CliError> {
    if let Some(ref url) = global.base_url {
        cfg.base_url.clone_from(url);
    }
    if let Some(secs) = global.timeout {
        cfg.timeout_secs = secs;
    }
    if global.allow_http {
        cfg.allow_http = true;
    }
    tracing::trace!(
        timeout_secs = cfg.timeout_secs,
        allow_http = cfg.allow_http,
        "transport settings"
    );
    Ok(cfg.registry_client()?)
}
