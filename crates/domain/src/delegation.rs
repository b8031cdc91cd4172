use super::{DomainName, NameserverSet, Zone};

/// Result of one zone level of a walk. Each step is derived from the previous
/// one and is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    pub zone: Zone,

    /// Server that was asked for `zone`'s NS set.
    pub parent_nameserver: String,

    pub nameservers: NameserverSet,

    /// Member of `nameservers` that the next step will query.
    pub selected: String,

    /// The zone is the walk target; `selected` has nowhere left to lead.
    pub is_final: bool,
}

impl WalkStep {
    /// Whether `server` should be highlighted as the next hop.
    pub fn is_next_hop(&self, server: &str) -> bool {
        !self.is_final && self.selected == server
    }
}

#[derive(Debug, Clone)]
pub struct DelegationReport {
    pub target: DomainName,
    pub steps: Vec<WalkStep>,
}

impl DelegationReport {
    pub fn final_step(&self) -> Option<&WalkStep> {
        self.steps.last()
    }

    pub fn zones(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.zone.as_str()).collect()
    }
}
