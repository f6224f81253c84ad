use clap::{Parser, Subcommand};
use dns_unlocker_domain::{CliOverrides, TargetUrl};
use std::sync::Arc;
use tracing::debug;

mod bootstrap;
mod di;
mod render;

#[derive(Parser)]
#[command(name = "dns-unlocker")]
#[command(version)]
#[command(about = "Find the DNS servers that get past a 403, and the fastest of them")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory holding dns.yml and checked_dns.yml
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe every candidate DNS server against a site and cache the ones that get a 200
    Check {
        /// Domain or http(s) URL
        target: String,
    },
    /// Download a file through each DNS server and report the fastest
    Dns {
        /// http(s) URL of the file to download
        url: String,

        /// Run the reachability check first and only evaluate servers that pass
        #[arg(long)]
        check: bool,

        /// Download budget per server, in seconds
        #[arg(short = 't', long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let timeout = match &cli.command {
        Command::Dns { timeout, .. } => *timeout,
        Command::Check { .. } => None,
    };
    let cli_overrides = CliOverrides {
        config_dir: cli.config_dir.clone(),
        timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting DNS Unlocker");

    let repos = di::Repositories::new(&config)?;

    match cli.command {
        Command::Check { target } => {
            let target = TargetUrl::from_domain_or_url(&target)?;
            let renderer = Arc::new(render::TableRenderer::new(
                target.as_str(),
                config.speed.timeout,
                &config.servers.reachable_file,
            ));
            let use_cases = di::UseCases::new(&config, &repos, renderer.clone());

            use_cases.check_servers.execute(target.as_str()).await?;
            renderer.finish();
        }
        Command::Dns { url, check, .. } => {
            let target = TargetUrl::parse(&url)?;
            let renderer = Arc::new(render::TableRenderer::new(
                target.as_str(),
                config.speed.timeout,
                &config.servers.reachable_file,
            ));
            let use_cases = di::UseCases::new(&config, &repos, renderer.clone());

            let report = use_cases
                .find_best_server
                .execute(target.as_str(), check, config.speed.timeout)
                .await?;
            renderer.finish();
            renderer.best(report.best.as_ref());
        }
    }

    Ok(())
}
