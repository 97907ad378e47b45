//! Node, relationship and property types shared by the store implementations.
mod edge;
mod node;
mod properties;

pub use edge::{EdgeSpec, EdgeType, Endpoint};
pub use node::{NodeId, NodeLabel, NodeSpec};
pub use properties::{is_valid_identifier, Properties, PropertyValue};
