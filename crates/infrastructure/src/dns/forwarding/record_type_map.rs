//! Mapping from `nswalk_domain::RecordType` to `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use nswalk_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Question type used when building queries
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::NS => HickoryRecordType::NS,
        }
    }
}
