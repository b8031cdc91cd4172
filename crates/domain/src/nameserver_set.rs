use std::sync::Arc;

/// Nameserver hostnames returned for one zone, in response order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameserverSet {
    servers: Arc<Vec<String>>,
}

impl NameserverSet {
    pub fn new(servers: Vec<String>) -> Self {
        Self {
            servers: Arc::new(servers),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn contains(&self, server: &str) -> bool {
        self.servers.iter().any(|s| s == server)
    }

    /// Lexicographic copy for display. Selection never looks at this order.
    pub fn sorted(&self) -> Vec<String> {
        let mut sorted = self.servers.to_vec();
        sorted.sort();
        sorted
    }
}

impl From<Vec<String>> for NameserverSet {
    fn from(servers: Vec<String>) -> Self {
        Self::new(servers)
    }
}
