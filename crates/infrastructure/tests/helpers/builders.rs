#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::ns_record;

/// Builds response messages section by section.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            message: Message::new(0x2a2a, MessageType::Response, OpCode::Query),
        }
    }

    pub fn answer_ns(mut self, zone: &str, target: &str) -> Self {
        self.message.add_answer(ns_record(zone, target));
        self
    }

    pub fn authority_ns(mut self, zone: &str, target: &str) -> Self {
        self.message.add_name_server(ns_record(zone, target));
        self
    }

    pub fn answer_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.message.add_answer(Record::from_rdata(
            Name::from_str(name).unwrap(),
            300,
            RData::A(A(ip)),
        ));
        self
    }

    pub fn authority_soa(mut self, zone: &str) -> Self {
        let mname = Name::from_str(&format!("ns1.{}", zone)).unwrap();
        let rname = Name::from_str(&format!("hostmaster.{}", zone)).unwrap();
        let soa = SOA::new(mname, rname, 1, 3600, 900, 604800, 300);
        self.message.add_name_server(Record::from_rdata(
            Name::from_str(zone).unwrap(),
            300,
            RData::SOA(soa),
        ));
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
