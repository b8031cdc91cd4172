use nswalk_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    debug!(
        config_file = config_path.unwrap_or("default"),
        port = config.dns.port,
        timeout_secs = config.dns.query_timeout,
        resolv_conf = %config.dns.resolv_conf,
        "Configuration loaded"
    );

    Ok(config)
}
