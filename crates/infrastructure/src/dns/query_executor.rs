use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::resolver::resolve_server;
use super::transport::UdpTransport;
use hickory_proto::op::Message;
use nswalk_domain::{DomainError, RecordType, Zone};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends one question to one server over UDP and hands back the parsed reply.
pub struct QueryExecutor {
    port: u16,
    timeout: Duration,
}

impl QueryExecutor {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Query `server` (hostname or IP literal, no port) for `zone`.
    ///
    /// Only NOERROR and NXDOMAIN replies are returned; every other rcode is
    /// reported as `UnexpectedResponseCode`.
    pub async fn query(
        &self,
        zone: &Zone,
        record_type: RecordType,
        server: &str,
    ) -> Result<Message, DomainError> {
        let server_addr = resolve_server(server, self.port, self.timeout).await?;
        let (id, query_bytes) = MessageBuilder::build_query_with_id(zone.as_str(), &record_type)?;

        debug!(
            zone = %zone,
            record_type = %record_type,
            server = server,
            addr = %server_addr,
            id = id,
            "Sending query"
        );

        let transport = UdpTransport::new(server_addr);
        let response = transport.send(&query_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response)?;

        if !parsed.is_answered() {
            return Err(DomainError::UnexpectedResponseCode {
                server: server.to_string(),
                rcode: ResponseParser::rcode_to_status(parsed.rcode).to_string(),
            });
        }

        Ok(parsed.message)
    }
}

impl Default for QueryExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_DNS_PORT, DEFAULT_QUERY_TIMEOUT)
    }
}
