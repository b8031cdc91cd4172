#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record};
use nswalk_infrastructure::dns::forwarding::MessageBuilder;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock answers a query for one zone.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// NS set in the answer section.
    Answer(Vec<String>),
    /// NS set in the authority section only.
    Referral(Vec<String>),
    /// Both sections populated.
    Both {
        answer: Vec<String>,
        authority: Vec<String>,
    },
    /// Empty sections with the given response code.
    Rcode(ResponseCode),
    /// Correct payload under a different message ID.
    WrongId(Vec<String>),
    /// A wrong-ID datagram first, then the real answer.
    StrayThenAnswer(Vec<String>),
    /// Never reply.
    Silent,
}

pub fn ns_record(zone: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(zone).unwrap(),
        172_800,
        RData::NS(NS(Name::from_str(target).unwrap())),
    )
}

fn ns_records(zone: &str, targets: &[String]) -> Vec<Record> {
    targets.iter().map(|t| ns_record(zone, t)).collect()
}

/// UDP DNS server on 127.0.0.1 answering NS queries from a zone table.
/// Unknown zones get NXDOMAIN.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zones: HashMap<String, MockReply>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(Mutex::new(Vec::new()));
        let seen = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(request) = Message::from_vec(&buf[..len]) else { continue };
                        let Some(query) = request.queries().first().cloned() else { continue };

                        let zone = query.name().to_utf8();
                        seen.lock().unwrap().push(zone.clone());

                        let reply = zones
                            .get(&zone)
                            .cloned()
                            .unwrap_or(MockReply::Rcode(ResponseCode::NXDomain));

                        if let MockReply::StrayThenAnswer(targets) = &reply {
                            let stray = MockReply::WrongId(targets.clone());
                            if let Some(bytes) = Self::build_response(&request, &zone, &stray) {
                                let _ = socket.send_to(&bytes, peer).await;
                            }
                        }

                        if let Some(bytes) = Self::build_response(&request, &zone, &reply) {
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Query names received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn build_response(request: &Message, zone: &str, reply: &MockReply) -> Option<Vec<u8>> {
        let id = match reply {
            MockReply::Silent => return None,
            MockReply::WrongId(_) => request.id().wrapping_add(1),
            _ => request.id(),
        };

        let mut response = Message::new(id, MessageType::Response, OpCode::Query);
        response.set_recursion_desired(request.recursion_desired());
        for query in request.queries() {
            response.add_query(query.clone());
        }

        match reply {
            MockReply::Answer(targets)
            | MockReply::WrongId(targets)
            | MockReply::StrayThenAnswer(targets) => {
                for record in ns_records(zone, targets) {
                    response.add_answer(record);
                }
            }
            MockReply::Referral(targets) => {
                for record in ns_records(zone, targets) {
                    response.add_name_server(record);
                }
            }
            MockReply::Both { answer, authority } => {
                for record in ns_records(zone, answer) {
                    response.add_answer(record);
                }
                for record in ns_records(zone, authority) {
                    response.add_name_server(record);
                }
            }
            MockReply::Rcode(code) => {
                response.set_response_code(*code);
            }
            MockReply::Silent => unreachable!(),
        }

        MessageBuilder::serialize_message(&response).ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
