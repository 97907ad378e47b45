use std::fmt;

use super::Properties;

/// Internal identifier assigned to a node by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node labels known to the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Interest,
    Genre,
    Category,
    User,
    /// Secondary label carried by video game interests.
    Game,
}

impl NodeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Interest => "Interest",
            NodeLabel::Genre => "Genre",
            NodeLabel::Category => "Category",
            NodeLabel::User => "User",
            NodeLabel::Game => "Game",
        }
    }

    /// Property holding the natural key of nodes with this label.
    pub fn key_property(&self) -> &'static str {
        match self {
            NodeLabel::User => "username",
            _ => "name",
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node to create or merge, identified by its natural key.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub label: NodeLabel,
    pub extra_labels: Vec<NodeLabel>,
    pub key: String,
    pub properties: Properties,
}

impl NodeSpec {
    pub fn new(label: NodeLabel, key: impl Into<String>) -> Self {
        Self {
            label,
            extra_labels: Vec::new(),
            key: key.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_label(mut self, label: NodeLabel) -> Self {
        if label != self.label && !self.extra_labels.contains(&label) {
            self.extra_labels.push(label);
        }
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// All labels of the node, primary label first.
    pub fn labels(&self) -> impl Iterator<Item = NodeLabel> + '_ {
        std::iter::once(self.label).chain(self.extra_labels.iter().copied())
    }
}
