use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Destination port for every query.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-exchange timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// System resolver configuration used to reach the root zone.
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,
}

impl DnsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            query_timeout: default_query_timeout(),
            resolv_conf: default_resolv_conf(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    5
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}
