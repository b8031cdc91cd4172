use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use nswalk_domain::{DomainError, Zone};
use tracing::debug;

/// Pulls nameserver hostnames out of an NS response.
///
/// The answer section wins when it holds any NS record. Otherwise the
/// authority section is used, which covers both a referral from a parent and
/// an authoritative server listing its own NS set there.
pub struct NsExtractor;

impl NsExtractor {
    pub fn extract(message: &Message, zone: &Zone) -> Result<Vec<String>, DomainError> {
        let mut nameservers = Self::ns_targets(message.answers());

        if nameservers.is_empty() {
            nameservers = Self::ns_targets(message.name_servers());
            debug!(
                zone = %zone,
                found = nameservers.len(),
                "No NS records in answer section, used authority section"
            );
        }

        if nameservers.is_empty() {
            return Err(DomainError::NoNameservers {
                zone: zone.to_string(),
            });
        }

        Ok(nameservers)
    }

    fn ns_targets(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(ns.0.to_utf8()),
                _ => None,
            })
            .collect()
    }
}
