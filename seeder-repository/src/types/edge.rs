use std::fmt;

use super::{NodeId, NodeLabel, Properties};

/// Relationship types known to the seeder. All of them are directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeType {
    /// Child interest to parent interest.
    HasSubinterest,
    HasGenre,
    BelongsTo,
    Likes,
    Matches,
}

impl EdgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::HasSubinterest => "HAS_SUBINTEREST",
            EdgeType::HasGenre => "HAS_GENRE",
            EdgeType::BelongsTo => "BELONGS_TO",
            EdgeType::Likes => "LIKES",
            EdgeType::Matches => "MATCHES",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a node that must already exist in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Resolved through the natural key property of `label`.
    Key { label: NodeLabel, key: String },
    /// Resolved through the store's internal identifier.
    Id { label: NodeLabel, id: NodeId },
}

impl Endpoint {
    pub fn key(label: NodeLabel, key: impl Into<String>) -> Self {
        Endpoint::Key {
            label,
            key: key.into(),
        }
    }

    pub fn id(label: NodeLabel, id: NodeId) -> Self {
        Endpoint::Id { label, id }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Key { label, key } => write!(f, "({}:{})", label, key),
            Endpoint::Id { label, id } => write!(f, "({}{})", label, id),
        }
    }
}

/// A relationship to write between two resolved endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub edge_type: EdgeType,
    pub from: Endpoint,
    pub to: Endpoint,
    pub properties: Properties,
}

impl EdgeSpec {
    pub fn new(edge_type: EdgeType, from: Endpoint, to: Endpoint) -> Self {
        Self {
            edge_type,
            from,
            to,
            properties: Properties::new(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}
