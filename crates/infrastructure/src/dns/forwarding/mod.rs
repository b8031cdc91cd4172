pub mod message_builder;
pub mod ns_extractor;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use ns_extractor::NsExtractor;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{DnsResponse, ResponseParser};
