use async_trait::async_trait;
use nswalk_domain::{DomainError, ResolverConfig};

/// Port for reading the system's configured recursive resolvers.
#[async_trait]
pub trait ResolverConfigSource: Send + Sync {
    async fn load(&self) -> Result<ResolverConfig, DomainError>;
}
