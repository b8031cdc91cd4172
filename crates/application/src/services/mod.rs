pub mod nameserver_selector;

pub use nameserver_selector::NameserverSelector;
