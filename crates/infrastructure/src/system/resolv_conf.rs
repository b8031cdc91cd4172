use async_trait::async_trait;
use nswalk_application::ports::ResolverConfigSource;
use nswalk_domain::{DomainError, ResolverConfig};
use std::net::IpAddr;
use tokio::fs;
use tracing::{debug, warn};

pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// System resolver configuration reader (resolv.conf syntax)
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_RESOLV_CONF.to_string())
    }

    pub fn with_path(path: String) -> Self {
        Self { path }
    }

    /// Parse resolv.conf content. Only `nameserver`, `search` and `domain`
    /// are read; every other keyword is ignored.
    pub fn parse(content: &str) -> ResolverConfig {
        let mut config = ResolverConfig::default();

        for (line_num, raw) in content.lines().enumerate() {
            let line = raw
                .split(['#', ';'])
                .next()
                .unwrap_or_default();

            let mut fields = line.split_whitespace();
            let Some(keyword) = fields.next() else {
                continue;
            };

            match keyword {
                "nameserver" => {
                    let Some(value) = fields.next() else {
                        warn!(line = line_num + 1, "nameserver entry without address");
                        continue;
                    };
                    // fe80::1%eth0 is only reachable through its interface
                    if value.contains('%') {
                        warn!(
                            line = line_num + 1,
                            value = value,
                            "Scoped nameserver address cannot be used, skipping"
                        );
                        continue;
                    }
                    match value.parse::<IpAddr>() {
                        Ok(ip) => config.nameservers.push(ip),
                        Err(e) => {
                            warn!(
                                line = line_num + 1,
                                value = value,
                                error = %e,
                                "Invalid nameserver address"
                            );
                        }
                    }
                }
                // search and domain override each other; the last one wins
                "search" => {
                    config.search = fields.map(str::to_string).collect();
                }
                "domain" => {
                    config.search = fields.next().map(str::to_string).into_iter().collect();
                }
                _ => {}
            }
        }

        config
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolverConfigSource for ResolvConfReader {
    async fn load(&self) -> Result<ResolverConfig, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ResolverConfig(format!("failed to read {}: {}", self.path, e))
        })?;

        let config = Self::parse(&content);

        if config.nameservers.is_empty() {
            return Err(DomainError::ResolverConfig(format!(
                "no nameserver entry in {}",
                self.path
            )));
        }

        debug!(
            path = %self.path,
            nameservers = ?config.nameservers,
            search = ?config.search,
            "Resolver configuration loaded"
        );

        Ok(config)
    }
}
