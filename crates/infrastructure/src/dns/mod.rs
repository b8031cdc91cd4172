pub mod forwarding;
pub mod query_executor;
pub mod resolver;
pub mod transport;

pub use query_executor::QueryExecutor;
pub use resolver::HickoryDelegationResolver;
