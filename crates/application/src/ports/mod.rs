mod delegation_resolver;
mod resolver_config_source;
mod walk_observer;

pub use delegation_resolver::DelegationResolver;
pub use resolver_config_source::ResolverConfigSource;
pub use walk_observer::WalkObserver;
