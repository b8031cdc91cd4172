use async_trait::async_trait;
use nswalk_domain::{DomainError, NameserverSet, Zone};

#[async_trait]
pub trait DelegationResolver: Send + Sync {
    /// Ask `server` (a hostname or IP literal, no port) for the NS set of `zone`.
    ///
    /// Fails on transport errors, on response codes other than NOERROR and
    /// NXDOMAIN, and when the response names no nameserver at all.
    async fn lookup_nameservers(
        &self,
        zone: &Zone,
        server: &str,
    ) -> Result<NameserverSet, DomainError>;
}
