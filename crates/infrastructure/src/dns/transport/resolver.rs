use nswalk_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Resolves a hostname to all its IP addresses (IPv4 + IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| DomainError::Transport {
            server: target.clone(),
            reason: format!("address lookup failed: {}", e),
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::Transport {
            server: target,
            reason: "no addresses found".to_string(),
        });
    }

    Ok(addrs)
}

/// Socket address for a nameserver given as a hostname or an IP literal.
///
/// Literals (with or without a trailing dot) skip the lookup. Hostnames use
/// the first address the system resolver returns.
pub async fn resolve_server(
    server: &str,
    port: u16,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    let hostname = server.trim_end_matches('.');
    if let Ok(ip) = hostname.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    if hostname.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is not a usable nameserver",
            server
        )));
    }

    let addrs = resolve_all(hostname, port, timeout).await?;
    let chosen = addrs[0];

    debug!(
        server = server,
        addr = %chosen,
        candidates = addrs.len(),
        "Nameserver address resolved"
    );

    Ok(chosen)
}
