//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Messages are sent as-is (no framing).
//! Truncated responses are returned as received; there is no TCP fallback.

use nswalk_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn transport_error(&self, reason: impl ToString) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason: reason.to_string(),
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

/// Ephemeral local address of the same family as `server`.
fn unspecified_for(server: SocketAddr) -> SocketAddr {
    if server.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    }
}

/// Reject a datagram whose ID is not the one we asked with.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message from {} too short to carry an ID",
            server
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS ID mismatch from {}: sent {:#06x}, received {:#06x}",
            server, query_id, response_id
        )));
    }

    Ok(())
}

impl UdpTransport {
    /// Send one query and wait for the datagram that answers it.
    ///
    /// The socket is connected, so only the server's datagrams are seen.
    /// Datagrams carrying another ID are discarded and reading continues
    /// until `timeout`, which bounds the whole exchange.
    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let deadline = Instant::now() + timeout;

        let socket = UdpSocket::bind(unspecified_for(self.server_addr))
            .await
            .map_err(|e| self.transport_error(format!("failed to bind UDP socket: {}", e)))?;
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.transport_error(format!("failed to connect UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout_at(deadline, socket.send(message_bytes))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.transport_error(e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = tokio::time::timeout_at(deadline, socket.recv(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.transport_error(e))?;

            let datagram = &recv_buf[..bytes_received];
            if let Err(e) = validate_response_id(message_bytes, datagram, self.server_addr) {
                debug!(error = %e, "Discarding datagram that does not answer the query");
                continue;
            }

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(datagram.to_vec());
        }
    }
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
