#![allow(dead_code)]

use async_trait::async_trait;
use nswalk_application::ports::{DelegationResolver, ResolverConfigSource, WalkObserver};
use nswalk_domain::{DomainError, NameserverSet, ResolverConfig, WalkStep, Zone};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// Answers NS lookups from a per-zone table and records every call.
#[derive(Clone, Default)]
pub struct MockDelegationResolver {
    responses: Arc<RwLock<HashMap<String, Vec<String>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockDelegationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, zone: &str, nameservers: &[&str]) {
        self.responses.write().await.insert(
            zone.to_string(),
            nameservers.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub async fn set_error(&self, zone: &str, error: DomainError) {
        self.errors.write().await.insert(zone.to_string(), error);
    }

    /// `(zone, server)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_zones(&self) -> Vec<String> {
        self.calls().into_iter().map(|(zone, _)| zone).collect()
    }
}

#[async_trait]
impl DelegationResolver for MockDelegationResolver {
    async fn lookup_nameservers(
        &self,
        zone: &Zone,
        server: &str,
    ) -> Result<NameserverSet, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((zone.to_string(), server.to_string()));

        if let Some(error) = self.errors.read().await.get(zone.as_str()) {
            return Err(error.clone());
        }

        match self.responses.read().await.get(zone.as_str()) {
            Some(servers) if !servers.is_empty() => Ok(NameserverSet::new(servers.clone())),
            _ => Err(DomainError::NoNameservers {
                zone: zone.to_string(),
            }),
        }
    }
}

pub struct MockResolverConfigSource {
    config: Result<ResolverConfig, DomainError>,
}

impl MockResolverConfigSource {
    pub fn with_nameservers(nameservers: &[&str]) -> Self {
        let addrs: Vec<IpAddr> = nameservers.iter().map(|s| s.parse().unwrap()).collect();
        Self {
            config: Ok(ResolverConfig::new(addrs)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self { config: Err(error) }
    }
}

#[async_trait]
impl ResolverConfigSource for MockResolverConfigSource {
    async fn load(&self) -> Result<ResolverConfig, DomainError> {
        self.config.clone()
    }
}

/// Records reported steps; optionally refuses output once `capacity` is reached.
#[derive(Default)]
pub struct RecordingObserver {
    steps: Mutex<Vec<WalkStep>>,
    capacity: Option<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(capacity: usize) -> Self {
        Self {
            steps: Mutex::new(Vec::new()),
            capacity: Some(capacity),
        }
    }

    pub fn steps(&self) -> Vec<WalkStep> {
        self.steps.lock().unwrap().clone()
    }
}

impl WalkObserver for RecordingObserver {
    fn on_step(&self, step: &WalkStep) -> Result<(), DomainError> {
        let mut steps = self.steps.lock().unwrap();
        if self.capacity.is_some_and(|cap| steps.len() >= cap) {
            return Err(DomainError::Output("Broken pipe (os error 32)".to_string()));
        }
        steps.push(step.clone());
        Ok(())
    }
}
