use nswalk_domain::{DomainError, WalkStep};

/// Receives each zone level as soon as it has been resolved.
///
/// An error ends the walk before the next query is sent.
pub trait WalkObserver: Send + Sync {
    fn on_step(&self, step: &WalkStep) -> Result<(), DomainError>;
}
