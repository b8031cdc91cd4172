//! nswalk Domain Layer
pub mod config;
pub mod delegation;
pub mod domain_name;
pub mod errors;
pub mod nameserver_set;
pub mod record_type;
pub mod resolver_config;

pub use config::{CliOverrides, Config, ConfigError};
pub use delegation::{DelegationReport, WalkStep};
pub use domain_name::{DomainName, Zone};
pub use errors::DomainError;
pub use nameserver_set::NameserverSet;
pub use record_type::RecordType;
pub use resolver_config::ResolverConfig;
