use crate::ports::{DelegationResolver, ResolverConfigSource, WalkObserver};
use crate::services::NameserverSelector;
use nswalk_domain::{DelegationReport, DomainError, DomainName, WalkStep, Zone};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Walks the delegation chain from the root zone down to a target name.
///
/// One NS query per zone level, strictly in sequence: the server asked at
/// level n+1 is the one selected from the answer at level n. The first
/// failure ends the walk.
pub struct WalkDelegationUseCase {
    resolver: Arc<dyn DelegationResolver>,
    config_source: Arc<dyn ResolverConfigSource>,
    selector: Arc<NameserverSelector>,
    observer: Option<Arc<dyn WalkObserver>>,
}

impl WalkDelegationUseCase {
    pub fn new(
        resolver: Arc<dyn DelegationResolver>,
        config_source: Arc<dyn ResolverConfigSource>,
        selector: Arc<NameserverSelector>,
    ) -> Self {
        Self {
            resolver,
            config_source,
            selector,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn WalkObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[instrument(skip_all, fields(domain = %target))]
    pub async fn execute(&self, target: &DomainName) -> Result<DelegationReport, DomainError> {
        let resolver_config = self.config_source.load().await?;
        let bootstrap = resolver_config.primary()?;

        info!(
            bootstrap = %bootstrap,
            levels = target.label_count() + 1,
            "Starting delegation walk"
        );

        let mut steps = Vec::with_capacity(target.label_count() + 1);

        let mut step = self
            .discover(Zone::root(), bootstrap.to_string(), target)
            .await?;
        self.notify(&step)?;
        steps.push(step.clone());

        for label in target.labels_from_tld() {
            step = self.descend(&step, label, target).await?;
            self.notify(&step)?;
            steps.push(step.clone());
        }

        info!(steps = steps.len(), "Delegation walk complete");

        Ok(DelegationReport {
            target: target.clone(),
            steps,
        })
    }

    /// Resolve the zone one label below `previous`, asking the server it selected.
    pub async fn descend(
        &self,
        previous: &WalkStep,
        label: &str,
        target: &DomainName,
    ) -> Result<WalkStep, DomainError> {
        let zone = previous.zone.child(label);
        self.discover(zone, previous.selected.clone(), target).await
    }

    async fn discover(
        &self,
        zone: Zone,
        server: String,
        target: &DomainName,
    ) -> Result<WalkStep, DomainError> {
        debug!(zone = %zone, server = %server, "Querying NS set");

        let nameservers = self.resolver.lookup_nameservers(&zone, &server).await?;

        let selected = self
            .selector
            .select(nameservers.as_slice())
            .await
            .ok_or_else(|| DomainError::NoNameservers {
                zone: zone.to_string(),
            })?;

        let is_final = zone.is_name(target);

        info!(
            zone = %zone,
            parent = %server,
            nameservers = nameservers.len(),
            selected = %selected,
            is_final = is_final,
            "Zone level resolved"
        );

        Ok(WalkStep {
            zone,
            parent_nameserver: server,
            nameservers,
            selected,
            is_final,
        })
    }

    fn notify(&self, step: &WalkStep) -> Result<(), DomainError> {
        match &self.observer {
            Some(observer) => observer.on_step(step),
            None => Ok(()),
        }
    }
}
