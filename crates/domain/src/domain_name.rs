use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Target of a walk, split into labels (`www.example.com` -> `["www", "example", "com"]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    /// Parse a presentation-format name, with or without the trailing dot.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        if trimmed == "." {
            return Ok(Self::root());
        }

        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if relative.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is longer than {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        let mut labels = Vec::new();
        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    trimmed
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is longer than {} characters",
                    label, MAX_LABEL_LEN
                )));
            }
            labels.push(label.to_string());
        }

        Ok(Self { labels })
    }

    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Labels in walk order: TLD first, leftmost label last.
    pub fn labels_from_tld(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().rev().map(String::as_str)
    }

    pub fn fqdn(&self) -> String {
        if self.is_root() {
            return ".".to_string();
        }
        let mut name = self.labels.join(".");
        name.push('.');
        name
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqdn())
    }
}

/// A fully-qualified zone name, grown one label at a time from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone(Arc<str>);

impl Zone {
    pub fn root() -> Self {
        Self(Arc::from("."))
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    pub fn child(&self, label: &str) -> Self {
        if self.is_root() {
            Self(Arc::from(format!("{}.", label)))
        } else {
            Self(Arc::from(format!("{}.{}", label, self.0)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DNS names compare case-insensitively.
    pub fn is_name(&self, name: &DomainName) -> bool {
        self.0.eq_ignore_ascii_case(&name.fqdn())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
