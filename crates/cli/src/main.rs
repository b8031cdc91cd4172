use clap::Parser;
use nswalk_application::services::NameserverSelector;
use nswalk_application::use_cases::WalkDelegationUseCase;
use nswalk_domain::{CliOverrides, DomainName};
use nswalk_infrastructure::dns::{HickoryDelegationResolver, QueryExecutor};
use nswalk_infrastructure::system::ResolvConfReader;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod report;

use report::ConsoleReporter;

#[derive(Parser)]
#[command(name = "nswalk")]
#[command(version)]
#[command(about = "Walk the DNS delegation chain from the root zone down to a domain")]
struct Cli {
    /// Domain name to trace
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolver configuration used to reach the root zone
    #[arg(short = 'r', long, value_name = "FILE")]
    resolv_conf: Option<String>,

    /// Per-query timeout in seconds
    #[arg(short = 't', long, value_name = "SECS")]
    timeout: Option<u64>,

    /// DNS port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Fixed seed for nameserver selection
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        query_timeout: cli.timeout,
        resolv_conf: cli.resolv_conf.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let target = DomainName::parse(&cli.domain)?;

    info!(
        domain = %target,
        port = config.dns.port,
        timeout_secs = config.dns.query_timeout,
        "nswalk v{}",
        env!("CARGO_PKG_VERSION")
    );

    let selector = match cli.seed {
        Some(seed) => NameserverSelector::with_seed(seed),
        None => NameserverSelector::new(),
    };

    let executor = QueryExecutor::new(config.dns.port, config.dns.timeout());
    let walker = WalkDelegationUseCase::new(
        Arc::new(HickoryDelegationResolver::new(executor)),
        Arc::new(ResolvConfReader::with_path(config.dns.resolv_conf.clone())),
        Arc::new(selector),
    )
    .with_observer(Arc::new(ConsoleReporter::stdout()));

    let report = walker.execute(&target).await?;

    if let Some(last) = report.final_step() {
        info!(
            zones = ?report.zones(),
            nameservers = last.nameservers.len(),
            "Delegation chain resolved"
        );
    }

    Ok(())
}
