use super::forwarding::NsExtractor;
use super::query_executor::QueryExecutor;
use async_trait::async_trait;
use nswalk_application::ports::DelegationResolver;
use nswalk_domain::{DomainError, NameserverSet, RecordType, Zone};

/// `DelegationResolver` backed by a real UDP exchange per lookup.
pub struct HickoryDelegationResolver {
    executor: QueryExecutor,
}

impl HickoryDelegationResolver {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl DelegationResolver for HickoryDelegationResolver {
    async fn lookup_nameservers(
        &self,
        zone: &Zone,
        server: &str,
    ) -> Result<NameserverSet, DomainError> {
        let message = self.executor.query(zone, RecordType::NS, server).await?;
        let nameservers = NsExtractor::extract(&message, zone)?;
        Ok(NameserverSet::new(nameservers))
    }
}
