use crate::DomainError;
use std::net::IpAddr;

/// Local recursive resolvers, as listed in the system resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    pub nameservers: Vec<IpAddr>,

    pub search: Vec<String>,
}

impl ResolverConfig {
    pub fn new(nameservers: Vec<IpAddr>) -> Self {
        Self {
            nameservers,
            search: Vec::new(),
        }
    }

    /// First configured resolver; the only one used to bootstrap a walk.
    pub fn primary(&self) -> Result<IpAddr, DomainError> {
        self.nameservers.first().copied().ok_or_else(|| {
            DomainError::ResolverConfig("no nameserver configured".to_string())
        })
    }
}
