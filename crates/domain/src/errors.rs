use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Cannot initialize the local resolver: {0}")]
    ResolverConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("No name server to answer the question ({server} replied {rcode})")]
    UnexpectedResponseCode { server: String, rcode: String },

    #[error("No nameservers found for {zone}")]
    NoNameservers { zone: String },

    #[error("Cannot write report: {0}")]
    Output(String),
}

impl DomainError {
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::TransportTimeout { .. } | Self::Transport { .. } | Self::InvalidDnsResponse(_)
        )
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
